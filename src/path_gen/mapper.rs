//! Segment-wise path mapping
//!
//! Paths are split on the separator and every segment is looked up in the
//! directory table by exact name. Matches are replaced, everything else is
//! kept, and the segments are joined back in the same order.

use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

use log::trace;

use crate::errors::{Result, path_operation_error};
use crate::rules::DirectoryMappingTable;

/// Maps `path` using the platform separator
///
/// # Examples
/// ```
/// use jektohug::path_gen::map_path;
/// use jektohug::rules::DirectoryMappingTable;
///
/// let table = DirectoryMappingTable::default();
/// let sep = std::path::MAIN_SEPARATOR;
/// assert_eq!(
///     map_path(&table, &format!("_sass{sep}theme.scss")),
///     format!("assets{sep}scss{sep}theme.scss")
/// );
/// ```
pub fn map_path(table: &DirectoryMappingTable, path: &str) -> String {
    map_path_with(table, path, MAIN_SEPARATOR)
}

/// Maps `path` using an explicit separator
///
/// Segment order and separator placement are preserved: a separator is
/// written between each pair of adjacent segments, never after the last.
/// Empty segments (a leading root marker, doubled separators) pass through.
pub fn map_path_with(table: &DirectoryMappingTable, path: &str, separator: char) -> String {
    let mut mapped = String::with_capacity(path.len());

    for (index, segment) in path.split(separator).enumerate() {
        if index > 0 {
            mapped.push(separator);
        }
        mapped.push_str(table.lookup(segment).unwrap_or(segment));
    }

    mapped
}

/// Maps a filesystem path component by component
///
/// Only normal components are looked up. A name that is not valid Unicode
/// cannot match a table entry and is kept as-is.
pub fn map_path_buf(table: &DirectoryMappingTable, path: &Path) -> PathBuf {
    let mut mapped = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Normal(name) => match name.to_str().and_then(|n| table.lookup(n)) {
                Some(replacement) => mapped.push(replacement),
                None => mapped.push(name),
            },
            other => mapped.push(other.as_os_str()),
        }
    }

    mapped
}

/// Computes where an entry of the source tree lands in the destination tree
///
/// Only the part of `path` below `root` is mapped, so directories above the
/// site root keep their names even if they collide with a mapped segment.
/// The root itself maps onto `output`.
///
/// # Errors
/// Returns an error if `path` is not inside `root`
pub fn migrate_path(
    table: &DirectoryMappingTable,
    root: &Path,
    output: &Path,
    path: &Path,
) -> Result<PathBuf> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| path_operation_error(path.to_path_buf(), "strip site root from"))?;

    if relative.as_os_str().is_empty() {
        return Ok(output.to_path_buf());
    }

    let mapped = output.join(map_path_buf(table, relative));
    trace!("Mapped {} to {}", path.display(), mapped.display());

    Ok(mapped)
}
