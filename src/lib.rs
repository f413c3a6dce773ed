//! Migrates a Jekyll site to the Hugo layout
//!
//! The migration rests on two pure functions driven by an immutable
//! [`rules::RuleSet`]:
//!
//! - [`path_gen::map_path`] renames Jekyll directory segments to their Hugo
//!   counterparts (`_sass/theme.scss` becomes `assets/scss/theme.scss`)
//! - [`translate::translate_line`] turns a `_config.yml` line into a
//!   `hugo.toml` line, or drops it
//!
//! [`workflow::migrate_site`] walks a site tree and applies both.

pub mod cli;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod path_gen;
pub mod rules;
pub mod translate;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::errors::{
        Error, Result, file_operation_error, generic_error, glob_pattern_error,
        invalid_path_error, path_operation_error, rule_parsing_error, source_not_found_error,
    };
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::path_gen::{map_path, migrate_path};
    pub use crate::rules::{RuleSet, load_rules};
    pub use crate::translate::{LineOutcome, translate_config, translate_line};
    pub use crate::workflow::{MigrationContext, MigrationOptions, migrate_site};
}
