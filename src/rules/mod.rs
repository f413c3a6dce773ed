//! Migration rules module
//!
//! This module contains the rule tables and the rule file loader.

mod loader;
mod model;

pub use loader::{load_rules, load_rules_or_default, parse_rules};
pub use model::{
    DEFAULT_DIRECTORY_MAPPINGS, DEFAULT_OMITTED_KEYS, DirectoryMappingTable, KeyRewriteTable,
    KeyRule, OmitKeySet, RuleSet, ValueTransform,
};
