//! File operation functionality
//!
//! This module contains functions for creating directories, relocating
//! files and writing the translated configuration.

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use fs_extra::file::{CopyOptions, copy, move_file};
use log::debug;

use crate::errors::{Result, file_operation_error};
use crate::rules::RuleSet;
use crate::translate::{TranslationStats, migrate_config_file};

/// Result of performing a file action
#[derive(Debug, Clone)]
pub struct FileActionResult {
    /// The source path
    pub source_path: PathBuf,
    /// The target path
    pub target_path: PathBuf,
    /// Whether anything changed on disk
    pub performed: bool,
}

impl FileActionResult {
    fn new(source_path: &Path, target_path: &Path, performed: bool) -> Self {
        FileActionResult {
            source_path: source_path.to_path_buf(),
            target_path: target_path.to_path_buf(),
            performed,
        }
    }
}

/// Creates `path` and any missing parents
///
/// # Arguments
/// * `path` - The directory to create
/// * `run_execution` - Whether to actually create it (true) or just simulate it (false)
pub fn create_directory(path: &Path, run_execution: bool) -> Result<bool> {
    if !run_execution {
        debug!("Simulating directory creation: {}", path.display());
        return Ok(false);
    }

    if path.is_dir() {
        return Ok(false);
    }

    create_dir_all(path)
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "create directory"))?;
    debug!("Created directory: {}", path.display());

    Ok(true)
}

/// Moves or copies `source_path` to `target_path`
///
/// The target's parent folder is created first. Relocating a file onto
/// itself does nothing.
///
/// # Arguments
/// * `source_path` - The file to relocate
/// * `target_path` - Where the file ends up
/// * `is_copy_operation` - Keep the source (true) or remove it (false)
/// * `run_execution` - Whether to actually touch the disk (true) or just simulate it (false)
///
/// # Errors
/// * Returns an error if the parent folder cannot be created
/// * Returns an error if the copy or move fails
pub fn relocate_file(
    source_path: &Path,
    target_path: &Path,
    is_copy_operation: bool,
    run_execution: bool,
) -> Result<FileActionResult> {
    if source_path == target_path {
        debug!("{} is already in place", source_path.display());
        return Ok(FileActionResult::new(source_path, target_path, false));
    }

    if !run_execution {
        debug!(
            "Simulating file relocation: {} -> {}",
            source_path.display(),
            target_path.display()
        );
        return Ok(FileActionResult::new(source_path, target_path, false));
    }

    if let Some(parent) = target_path.parent() {
        create_dir_all(parent)
            .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create directory"))?;
    }

    let options = CopyOptions::new().overwrite(true);

    if is_copy_operation {
        debug!(
            "Copying file: {} -> {}",
            source_path.display(),
            target_path.display()
        );
        copy(source_path, target_path, &options).map_err(|e| {
            file_operation_error(std::io::Error::other(e), source_path.to_path_buf(), "copy")
        })?;
    } else {
        debug!(
            "Moving file: {} -> {}",
            source_path.display(),
            target_path.display()
        );
        move_file(source_path, target_path, &options).map_err(|e| {
            file_operation_error(std::io::Error::other(e), source_path.to_path_buf(), "move")
        })?;
    }

    Ok(FileActionResult::new(source_path, target_path, true))
}

/// Translates the site configuration into the Hugo configuration file
///
/// The source configuration is always kept.
///
/// # Returns
/// * `Result<Option<TranslationStats>>` - Line counts, or `None` in a dry run
pub fn write_config(
    rules: &RuleSet,
    source_path: &Path,
    target_path: &Path,
    run_execution: bool,
) -> Result<Option<TranslationStats>> {
    if !run_execution {
        debug!(
            "Simulating configuration translation: {} -> {}",
            source_path.display(),
            target_path.display()
        );
        return Ok(None);
    }

    migrate_config_file(rules, source_path, target_path).map(Some)
}
