//! File operations module
//!
//! This module contains the operations that change the disk during a migration.

mod actions;

pub use actions::{FileActionResult, create_directory, relocate_file, write_config};
