//! Workflow context
//!
//! This module defines the state collected while a migration runs.

use std::path::PathBuf;

use crate::rules::RuleSet;

/// Represents a planned operation for dry-run mode
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedOperation {
    /// The source path
    pub source: PathBuf,
    /// The destination path
    pub destination: PathBuf,
    /// The type of operation
    pub operation_type: OperationType,
}

/// Type of migration operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    CreateDirectory,
    Move,
    Copy,
    TranslateConfig,
}

/// Statistics about the migration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationStats {
    /// Number of tree entries visited
    pub entries_visited: usize,
    /// Number of directories created
    pub directories_created: usize,
    /// Number of files moved
    pub files_moved: usize,
    /// Number of files copied
    pub files_copied: usize,
    /// Number of files left where they are
    pub files_skipped: usize,
    /// Number of configuration files translated
    pub configs_translated: usize,
    /// Number of configuration lines written
    pub config_lines_written: usize,
    /// Number of configuration lines omitted
    pub config_lines_omitted: usize,
}

/// Context for one migration run
#[derive(Debug, Clone)]
pub struct MigrationContext {
    /// The rules the run uses
    pub rules: RuleSet,
    /// Whether to only plan the operations
    pub dry_run: bool,
    /// Statistics about the run
    pub stats: MigrationStats,
    /// Planned operations for dry-run mode
    pub planned_operations: Vec<PlannedOperation>,
}

impl MigrationContext {
    pub fn new(rules: RuleSet, dry_run: bool) -> Self {
        MigrationContext {
            rules,
            dry_run,
            stats: MigrationStats::default(),
            planned_operations: Vec::new(),
        }
    }

    /// Records an operation when running dry
    pub fn plan(&mut self, source: PathBuf, destination: PathBuf, operation_type: OperationType) {
        if self.dry_run {
            self.planned_operations.push(PlannedOperation {
                source,
                destination,
                operation_type,
            });
        }
    }

    /// Planned operations of one type, in run order
    pub fn planned(&self, operation_type: OperationType) -> Vec<&PlannedOperation> {
        self.planned_operations
            .iter()
            .filter(|op| op.operation_type == operation_type)
            .collect()
    }
}
