//! Site discovery module
//!
//! This module contains components for walking the site tree and
//! classifying the files found.

mod classifier;
mod scanner;

pub use classifier::{FileKind, RELOCATED_EXTENSIONS, classify_file};
pub use scanner::{SiteEntry, walk_site};
