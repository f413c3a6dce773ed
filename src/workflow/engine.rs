//! Workflow engine
//!
//! This module contains the engine that drives a migration from start to end.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use rayon::prelude::*;

use crate::constants::HUGO_CONFIG_FILENAME;
use crate::discovery::{FileKind, SiteEntry, classify_file, walk_site};
use crate::file_ops::{create_directory, relocate_file, write_config};
use crate::logging::format_relocation;
use crate::path_gen::migrate_path;
use crate::rules::{RuleSet, load_rules_or_default};
use crate::utils::absolute_path;

use super::context::{MigrationContext, OperationType};

/// Options for a migration run
#[derive(Debug, Clone, Default)]
pub struct MigrationOptions {
    /// Root folder of the Jekyll site
    pub root: PathBuf,
    /// Destination root; the site root itself when `None`
    pub output: Option<PathBuf>,
    /// YAML rule file replacing the built-in rules
    pub rules_file: Option<PathBuf>,
    /// Whether to only plan the operations
    pub dry_run: bool,
    /// Copy files instead of moving them
    pub copy: bool,
}

/// What a single entry of the site tree turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    CreateDirectory,
    Relocate,
    TranslateConfig,
    Skip,
}

/// One planned step of a migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationStep {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub action: StepAction,
}

/// Computes the step for every entry of the site tree
///
/// Each entry is mapped independently, so the work is spread over the
/// rayon pool. The returned steps keep the order of `entries`.
///
/// # Errors
/// Returns an error if an entry lies outside `root` or is not valid Unicode
pub fn plan_migration(
    rules: &RuleSet,
    root: &Path,
    output: &Path,
    entries: &[SiteEntry],
) -> crate::errors::Result<Vec<MigrationStep>> {
    entries
        .par_iter()
        .map(|entry| plan_entry(rules, root, output, entry))
        .collect()
}

fn plan_entry(
    rules: &RuleSet,
    root: &Path,
    output: &Path,
    entry: &SiteEntry,
) -> crate::errors::Result<MigrationStep> {
    let destination = migrate_path(&rules.directories, root, output, &entry.path)?;

    let (destination, action) = if entry.is_directory {
        (destination, StepAction::CreateDirectory)
    } else {
        match classify_file(&entry.path) {
            FileKind::Config => (
                destination.with_file_name(HUGO_CONFIG_FILENAME),
                StepAction::TranslateConfig,
            ),
            FileKind::Relocate => (destination, StepAction::Relocate),
            FileKind::Skip => (destination, StepAction::Skip),
        }
    };

    Ok(MigrationStep {
        source: entry.path.clone(),
        destination,
        action,
    })
}

/// Migrates a Jekyll site into the Hugo layout
///
/// The run:
/// 1. loads the rules (built-in or from the rule file)
/// 2. resolves the root and output against the current folder and walks the site tree
/// 3. plans a step for every entry
/// 4. executes the steps in walk order, so directories exist before their files
///
/// The first failing operation aborts the run.
///
/// # Errors
/// * Returns an error if the rules cannot be loaded
/// * Returns an error if the site tree cannot be walked
/// * Returns an error if any file operation fails
pub fn migrate_site(options: MigrationOptions) -> Result<MigrationContext> {
    let rules = load_rules_or_default(options.rules_file.as_deref())?;

    let root = absolute_path(&options.root)?;
    let output = match options.output.as_deref() {
        Some(output) => absolute_path(output)?,
        None => root.clone(),
    };
    let (root, output) = (root.as_path(), output.as_path());
    let nested_output = (output != root && output.starts_with(root)).then_some(output);

    let entries = walk_site(root, nested_output)?;
    let steps = plan_migration(&rules, root, output, &entries)?;

    info!(
        "Migrating {} entries from {} to {}{}...",
        steps.len(),
        root.display(),
        output.display(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    let mut context = MigrationContext::new(rules, options.dry_run);
    for step in &steps {
        execute_step(&mut context, step, options.copy)?;
    }

    info!(
        "Finished migration: {} directories created, {} files moved, {} files copied, {} skipped",
        context.stats.directories_created,
        context.stats.files_moved,
        context.stats.files_copied,
        context.stats.files_skipped
    );

    if options.dry_run {
        print_plan(&context);
    }

    Ok(context)
}

fn execute_step(context: &mut MigrationContext, step: &MigrationStep, copy: bool) -> Result<()> {
    let run_execution = !context.dry_run;
    context.stats.entries_visited += 1;

    match step.action {
        StepAction::CreateDirectory => {
            if step.destination.is_dir() {
                return Ok(());
            }
            create_directory(&step.destination, run_execution)
                .with_context(|| format!("Migration stopped at {}", step.source.display()))?;
            context.stats.directories_created += 1;
            context.plan(
                step.source.clone(),
                step.destination.clone(),
                OperationType::CreateDirectory,
            );
        }
        StepAction::Relocate => {
            let result = relocate_file(&step.source, &step.destination, copy, run_execution)
                .with_context(|| format!("Migration stopped at {}", step.source.display()))?;
            if result.source_path == result.target_path {
                return Ok(());
            }

            info!(
                "{}",
                format_relocation(
                    &step.source.display().to_string(),
                    &step.destination.display().to_string()
                )
            );

            let operation_type = if copy {
                context.stats.files_copied += 1;
                OperationType::Copy
            } else {
                context.stats.files_moved += 1;
                OperationType::Move
            };
            context.plan(step.source.clone(), step.destination.clone(), operation_type);
        }
        StepAction::TranslateConfig => {
            let stats = write_config(
                &context.rules,
                &step.source,
                &step.destination,
                run_execution,
            )
            .with_context(|| format!("Migration stopped at {}", step.source.display()))?;

            if let Some(stats) = stats {
                context.stats.config_lines_written += stats.lines_written;
                context.stats.config_lines_omitted += stats.lines_omitted;
            }
            context.stats.configs_translated += 1;

            info!(
                "Configuration {}",
                format_relocation(
                    &step.source.display().to_string(),
                    &step.destination.display().to_string()
                )
            );
            context.plan(
                step.source.clone(),
                step.destination.clone(),
                OperationType::TranslateConfig,
            );
        }
        StepAction::Skip => {
            debug!("Leaving {} in place", step.source.display());
            context.stats.files_skipped += 1;
        }
    }

    Ok(())
}

fn print_plan(context: &MigrationContext) {
    if context.planned_operations.is_empty() {
        println!("\nNothing to migrate.");
        return;
    }

    println!("\nDetailed plan of operations:");
    println!("===========================");

    let sections = [
        (OperationType::CreateDirectory, "Directories to be created:"),
        (OperationType::Move, "Files to be moved:"),
        (OperationType::Copy, "Files to be copied:"),
        (OperationType::TranslateConfig, "Configuration to be translated:"),
    ];

    for (operation_type, title) in sections {
        let operations = context.planned(operation_type);
        if operations.is_empty() {
            continue;
        }

        println!("\n{title}");
        println!("{}", "-".repeat(title.len()));
        for op in operations {
            println!("  From: {}", op.source.display());
            println!("  To:   {}", op.destination.display());
        }
    }

    println!("\nSummary:");
    println!("--------");
    println!(
        "  Directories to be created: {}",
        context.planned(OperationType::CreateDirectory).len()
    );
    println!(
        "  Files to be moved:         {}",
        context.planned(OperationType::Move).len()
    );
    println!(
        "  Files to be copied:        {}",
        context.planned(OperationType::Copy).len()
    );
    println!("  Files left in place:       {}", context.stats.files_skipped);
    println!(
        "  Total operations:          {}",
        context.planned_operations.len()
    );
    println!("\nRun without --dry flag to execute these operations.");
}
