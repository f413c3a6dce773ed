//! Configuration translation module
//!
//! This module converts Jekyll configuration lines into Hugo ones.

mod file;
mod line;

pub use file::{TranslationStats, migrate_config_file, translate_config};
pub use line::{
    COMMENT_MARKER, KEY_VALUE_SEPARATOR, LineOutcome, OmitReason, strip_comment, translate_line,
};
