//! Workflow module
//!
//! This module contains components for orchestrating a migration.

mod context;
mod engine;

pub use context::{MigrationContext, MigrationStats, OperationType, PlannedOperation};
pub use engine::{MigrationOptions, MigrationStep, StepAction, migrate_site, plan_migration};
