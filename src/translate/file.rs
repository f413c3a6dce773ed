//! Whole-file configuration translation
//!
//! This module streams a Jekyll `_config.yml` through the line translator
//! and writes the kept lines, in order, as a Hugo `hugo.toml`.

use std::fs::{File, create_dir_all};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use encoding_rs::UTF_8;
use log::{debug, warn};
use tempfile::NamedTempFile;

use crate::errors::{Result, file_operation_error};
use crate::rules::RuleSet;

use super::line::{LineOutcome, translate_line};

/// Line counts gathered while translating a configuration file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationStats {
    pub lines_read: usize,
    pub lines_written: usize,
    pub lines_omitted: usize,
}

/// Translates every line from `reader` and writes the kept ones to `writer`
///
/// Input is decoded as UTF-8; a leading byte order mark is dropped and
/// malformed sequences are replaced. Each kept line is terminated with `\n`.
///
/// # Errors
/// Returns the underlying I/O error unchanged if reading or writing fails
pub fn translate_config<R: Read, W: Write>(
    rules: &RuleSet,
    mut reader: R,
    mut writer: W,
) -> io::Result<TranslationStats> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;

    let (content, _, had_errors) = UTF_8.decode(&raw);
    if had_errors {
        warn!("Configuration contains invalid UTF-8; malformed bytes were replaced");
    }

    let mut stats = TranslationStats::default();
    for line in content.lines() {
        stats.lines_read += 1;
        match translate_line(rules, line) {
            LineOutcome::Keep(translated) => {
                writeln!(writer, "{translated}")?;
                stats.lines_written += 1;
            }
            LineOutcome::Omit(reason) => {
                debug!("Skipping configuration line {}: {reason:?}", stats.lines_read);
                stats.lines_omitted += 1;
            }
        }
    }

    writer.flush()?;
    Ok(stats)
}

/// Translates the configuration file at `source` into `destination`
///
/// The output is written to a temporary file next to `destination` and only
/// moved into place once every line was written, so a failure never leaves
/// a truncated destination behind.
///
/// # Errors
/// * Returns an error if the source cannot be read
/// * Returns an error if the destination folder or file cannot be written
pub fn migrate_config_file(
    rules: &RuleSet,
    source: &Path,
    destination: &Path,
) -> Result<TranslationStats> {
    let source_file =
        File::open(source).map_err(|e| file_operation_error(e, source.to_path_buf(), "read"))?;

    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    create_dir_all(parent)
        .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create directory"))?;

    let mut temporary = NamedTempFile::new_in(parent)
        .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create temporary"))?;

    let stats = {
        let writer = BufWriter::new(temporary.as_file_mut());
        translate_config(rules, source_file, writer)
            .map_err(|e| file_operation_error(e, source.to_path_buf(), "translate"))?
    };

    temporary
        .persist(destination)
        .map_err(|e| file_operation_error(e.error, destination.to_path_buf(), "write"))?;

    debug!(
        "Translated {} into {}: {} lines kept, {} omitted",
        source.display(),
        destination.display(),
        stats.lines_written,
        stats.lines_omitted
    );

    Ok(stats)
}
