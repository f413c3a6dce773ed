//! Rule set data structures
//!
//! This module contains the immutable tables that drive a migration:
//! directory renames, configuration keys to drop, and configuration keys
//! to rewrite. A `RuleSet` is built once and handed by reference to the
//! path mapper and the line translator.

use std::collections::{HashMap, HashSet};
use std::path::MAIN_SEPARATOR_STR;

use serde::Deserialize;

/// Built-in directory renames from the Jekyll layout to the Hugo layout
///
/// Replacements use `/` and are converted to the platform separator when
/// the table is built.
pub const DEFAULT_DIRECTORY_MAPPINGS: [(&str, &str); 8] = [
    ("_sass", "assets/scss"),
    ("_data", "data"),
    ("_layouts", "layouts/_default"),
    ("_includes", "layouts/partials"),
    ("pages", "content"),
    ("assets", "static"),
    ("js", "assets/js"),
    ("css", "assets/css"),
];

/// Built-in configuration keys that have no Hugo counterpart
pub const DEFAULT_OMITTED_KEYS: [&str; 5] = ["markdown", "baseurl", "sass", "plugins", "defaults"];

static IDENTITY_RULE: KeyRule = KeyRule::identity();

/// Exact-match lookup from a path segment to its replacement
///
/// A replacement may contain separators, which expands one segment into a
/// sub-path (e.g. `_sass` becomes `assets/scss`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryMappingTable {
    entries: HashMap<String, String>,
}

impl DirectoryMappingTable {
    /// Builds a table from `(segment, replacement)` pairs
    ///
    /// Replacements are taken as-is; use [`DirectoryMappingTable::from_portable`]
    /// for `/`-separated replacements.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        DirectoryMappingTable {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Builds a table whose replacements use `/`, converting them to the
    /// platform separator
    pub fn from_portable<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        Self::new(
            entries
                .into_iter()
                .map(|(k, v)| (k, to_platform_separator(v.as_ref()))),
        )
    }

    /// Returns the replacement for `segment`, if any
    pub fn lookup(&self, segment: &str) -> Option<&str> {
        self.entries.get(segment).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for DirectoryMappingTable {
    fn default() -> Self {
        Self::from_portable(DEFAULT_DIRECTORY_MAPPINGS)
    }
}

/// Configuration keys whose lines never reach the destination file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OmitKeySet {
    keys: HashSet<String>,
}

impl OmitKeySet {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OmitKeySet {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Default for OmitKeySet {
    fn default() -> Self {
        Self::new(DEFAULT_OMITTED_KEYS)
    }
}

/// Transformation applied to the value of a rewritten key
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValueTransform {
    /// Keep the value unchanged
    #[default]
    Verbatim,
    /// Turn a filename suffix into an anchored regular expression:
    /// every `.` becomes `\.` and `$` is appended
    AnchoredPattern,
}

impl ValueTransform {
    pub fn apply(&self, value: &str) -> String {
        match self {
            ValueTransform::Verbatim => value.to_string(),
            ValueTransform::AnchoredPattern => format!("{}$", value.replace('.', r"\.")),
        }
    }
}

/// Rewrite applied to one configuration key
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyRule {
    /// New key name; `None` keeps the original key
    #[serde(default)]
    pub rename: Option<String>,
    #[serde(default)]
    pub value: ValueTransform,
}

impl KeyRule {
    /// The rule used for every key without an entry: no rename, value kept
    pub const fn identity() -> Self {
        KeyRule {
            rename: None,
            value: ValueTransform::Verbatim,
        }
    }

    pub fn renamed(to: &str) -> Self {
        KeyRule {
            rename: Some(to.to_string()),
            value: ValueTransform::Verbatim,
        }
    }

    pub fn with_value(mut self, value: ValueTransform) -> Self {
        self.value = value;
        self
    }

    pub fn is_identity(&self) -> bool {
        self.rename.is_none() && self.value == ValueTransform::Verbatim
    }

    /// Renders `key` and `value` as a destination `key=value` line
    pub fn apply(&self, key: &str, value: &str) -> String {
        let key = self.rename.as_deref().unwrap_or(key);
        format!("{}={}", key, self.value.apply(value))
    }
}

/// Per-key rewrite rules
///
/// Lookup is total: keys without an entry resolve to [`KeyRule::identity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyRewriteTable {
    rules: HashMap<String, KeyRule>,
}

impl KeyRewriteTable {
    pub fn new<I, K>(rules: I) -> Self
    where
        I: IntoIterator<Item = (K, KeyRule)>,
        K: Into<String>,
    {
        KeyRewriteTable {
            rules: rules.into_iter().map(|(k, r)| (k.into(), r)).collect(),
        }
    }

    pub fn rule_for(&self, key: &str) -> &KeyRule {
        self.rules.get(key).unwrap_or(&IDENTITY_RULE)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for KeyRewriteTable {
    fn default() -> Self {
        Self::new([
            (
                "exclude",
                KeyRule::renamed("ignoreFiles").with_value(ValueTransform::AnchoredPattern),
            ),
            ("url", KeyRule::renamed("BaseURL")),
        ])
    }
}

/// Every table a migration needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    pub directories: DirectoryMappingTable,
    pub omit: OmitKeySet,
    pub rewrites: KeyRewriteTable,
}

impl RuleSet {
    pub fn new(
        directories: DirectoryMappingTable,
        omit: OmitKeySet,
        rewrites: KeyRewriteTable,
    ) -> Self {
        RuleSet {
            directories,
            omit,
            rewrites,
        }
    }
}

pub(crate) fn to_platform_separator(value: &str) -> String {
    value.replace(crate::constants::RULE_FILE_SEPARATOR, MAIN_SEPARATOR_STR)
}
