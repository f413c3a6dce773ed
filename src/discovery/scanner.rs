//! Site tree walking
//!
//! This module lists every entry below the site root, the root included.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, glob_with};
use log::debug;

use crate::constants::RECURSIVE_WILDCARD;
use crate::errors::{
    Result, file_operation_error, glob_pattern_error, invalid_path_error, source_not_found_error,
};
use crate::utils::has_hidden_component;

/// One entry of the site tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteEntry {
    pub path: PathBuf,
    pub is_directory: bool,
}

impl SiteEntry {
    pub fn directory(path: PathBuf) -> Self {
        SiteEntry {
            path,
            is_directory: true,
        }
    }

    pub fn file(path: PathBuf) -> Self {
        SiteEntry {
            path,
            is_directory: false,
        }
    }
}

/// Walks the tree below `root`
///
/// Hidden entries (names starting with `.`) are not visited. Entries at or
/// below `skip` are left out, which keeps a destination folder nested in
/// the source tree from being walked. The result is sorted so that every
/// directory comes before its contents.
///
/// `root` should be absolute: glob drops a leading `./`, so entries found
/// below a root like `./site` would not start with it.
///
/// # Errors
/// * Returns an error if `root` is not an existing directory
/// * Returns an error if an entry cannot be read
pub fn walk_site(root: &Path, skip: Option<&Path>) -> Result<Vec<SiteEntry>> {
    if !root.is_dir() {
        return Err(source_not_found_error(root.to_path_buf()));
    }

    let root_str = root
        .to_str()
        .ok_or_else(|| invalid_path_error(root.to_path_buf()))?;
    let pattern = Path::new(&Pattern::escape(root_str)).join(RECURSIVE_WILDCARD);
    let pattern_str = pattern
        .to_str()
        .ok_or_else(|| invalid_path_error(pattern.clone()))?;

    debug!("Walking site tree: {}", root.display());

    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let mut entries = vec![SiteEntry::directory(root.to_path_buf())];
    for found in glob_with(pattern_str, options).map_err(|e| glob_pattern_error(e, pattern_str))? {
        let path = found.map_err(|e| {
            let path = e.path().to_path_buf();
            file_operation_error(e.into_error(), path, "access")
        })?;

        if skip.is_some_and(|skip| path.starts_with(skip)) || has_hidden_component(root, &path) {
            continue;
        }

        entries.push(if path.is_dir() {
            SiteEntry::directory(path)
        } else {
            SiteEntry::file(path)
        });
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));

    debug!("Found {} entries below {}", entries.len(), root.display());

    Ok(entries)
}
