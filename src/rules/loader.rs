//! Rule file loading
//!
//! A rule file is a YAML document overriding some or all of the built-in
//! tables:
//!
//! ```yaml
//! directories:
//!   _sass: assets/scss
//!   _posts: content/posts
//! omit:
//!   - markdown
//!   - plugins
//! rewrites:
//!   url:
//!     rename: BaseURL
//!   exclude:
//!     rename: ignoreFiles
//!     value: anchored_pattern
//! ```
//!
//! Sections missing from the file keep their built-in defaults.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;
use serde_yaml::from_str;

use crate::errors::{file_operation_error, rule_parsing_error, Result};

use super::model::{DirectoryMappingTable, KeyRewriteTable, KeyRule, OmitKeySet, RuleSet};

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct RuleFile {
    #[serde(default)]
    directories: Option<HashMap<String, String>>,
    #[serde(default)]
    omit: Option<Vec<String>>,
    #[serde(default)]
    rewrites: Option<HashMap<String, KeyRule>>,
}

impl From<RuleFile> for RuleSet {
    fn from(file: RuleFile) -> Self {
        let directories = file
            .directories
            .map(DirectoryMappingTable::from_portable)
            .unwrap_or_default();
        let omit = file.omit.map(OmitKeySet::new).unwrap_or_default();
        let rewrites = file.rewrites.map(KeyRewriteTable::new).unwrap_or_default();

        RuleSet::new(directories, omit, rewrites)
    }
}

/// Parses a YAML rule document
///
/// # Errors
/// Returns an error if the document is not valid YAML, contains unknown
/// sections, or names an unknown value transform
pub fn parse_rules(content: &str) -> Result<RuleSet> {
    if content.trim().is_empty() {
        return Ok(RuleSet::default());
    }

    let file: RuleFile = from_str(content)
        .map_err(|e| rule_parsing_error(e, "Please check the YAML syntax of the rule file"))?;

    Ok(file.into())
}

/// Loads a rule set from a YAML file
///
/// # Errors
/// Returns an error if the file cannot be read, is not UTF-8, or cannot be parsed
pub fn load_rules(file: &Path) -> Result<RuleSet> {
    debug!("Reading rule file: {}", file.display());

    let file_content =
        fs::read(file).map_err(|e| file_operation_error(e, file.to_path_buf(), "read"))?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        rule_parsing_error(
            e,
            &format!("Rule file {} contains invalid UTF-8 characters", file.display()),
        )
    })?;

    let rules = parse_rules(&content_str)?;
    info!(
        "Loaded {} directory mappings, {} omitted keys and {} key rewrites from {}",
        rules.directories.len(),
        rules.omit.len(),
        rules.rewrites.len(),
        file.display()
    );

    Ok(rules)
}

/// Loads the rule file if one was given, otherwise the built-in rules
pub fn load_rules_or_default(file: Option<&Path>) -> Result<RuleSet> {
    match file {
        Some(path) => load_rules(path),
        None => {
            debug!("Using built-in migration rules");
            Ok(RuleSet::default())
        }
    }
}
