//! Configuration line translation
//!
//! A Jekyll line `key: value # comment` becomes the Hugo line `key=value`.
//! The stages run in a fixed order and the first one that rejects the
//! line decides the outcome:
//!
//! 1. strip everything from the first `#`
//! 2. split on the first `:` into key and value
//! 3. drop keys listed in the omit set
//! 4. rewrite the key and value with the key's rule

use log::trace;

use crate::rules::RuleSet;

/// Marker starting a comment in a source configuration line
pub const COMMENT_MARKER: char = '#';

/// Separator between key and value in a source configuration line
pub const KEY_VALUE_SEPARATOR: char = ':';

/// Why a line did not make it into the destination file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OmitReason {
    /// Nothing left once the comment is removed
    Blank,
    /// The payload has no `:`, so it carries no key/value pair
    NoSeparator,
    /// The key is listed in the omit set
    OmittedKey(String),
}

/// Result of translating one configuration line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Keep(String),
    Omit(OmitReason),
}

impl LineOutcome {
    pub fn is_omitted(&self) -> bool {
        matches!(self, LineOutcome::Omit(_))
    }

    /// Splits the outcome into `(line, omit)`
    ///
    /// Every omitted line yields an empty string and `true`.
    pub fn into_parts(self) -> (String, bool) {
        match self {
            LineOutcome::Keep(line) => (line, false),
            LineOutcome::Omit(_) => (String::new(), true),
        }
    }

    pub fn kept(&self) -> Option<&str> {
        match self {
            LineOutcome::Keep(line) => Some(line),
            LineOutcome::Omit(_) => None,
        }
    }
}

/// Returns the part of `line` before the first comment marker
pub fn strip_comment(line: &str) -> &str {
    match line.split_once(COMMENT_MARKER) {
        Some((payload, _)) => payload,
        None => line,
    }
}

/// Translates one source configuration line
///
/// The key is matched exactly as written (no trimming), so indented lines
/// belonging to nested YAML blocks never match a top-level rule. The value
/// is trimmed of surrounding whitespace before it is transformed.
///
/// # Examples
/// ```
/// use jektohug::rules::RuleSet;
/// use jektohug::translate::{LineOutcome, translate_line};
///
/// let rules = RuleSet::default();
/// assert_eq!(
///     translate_line(&rules, "url: /blog"),
///     LineOutcome::Keep("BaseURL=/blog".to_string())
/// );
/// assert!(translate_line(&rules, "# just a comment").is_omitted());
/// ```
pub fn translate_line(rules: &RuleSet, line: &str) -> LineOutcome {
    let payload = strip_comment(line);
    if payload.is_empty() {
        return LineOutcome::Omit(OmitReason::Blank);
    }

    let Some((key, value)) = payload.split_once(KEY_VALUE_SEPARATOR) else {
        return LineOutcome::Omit(OmitReason::NoSeparator);
    };

    if rules.omit.contains(key) {
        trace!("Omitting configuration key '{key}'");
        return LineOutcome::Omit(OmitReason::OmittedKey(key.to_string()));
    }

    LineOutcome::Keep(rules.rewrites.rule_for(key).apply(key, value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{DirectoryMappingTable, KeyRewriteTable, KeyRule, OmitKeySet};

    fn keep(line: &str) -> LineOutcome {
        LineOutcome::Keep(line.to_string())
    }

    #[test]
    fn test_exclude_becomes_anchored_ignore_files() {
        let rules = RuleSet::default();
        assert_eq!(translate_line(&rules, "exclude: *.log"), keep(r"ignoreFiles=*\.log$"));
    }

    #[test]
    fn test_url_becomes_base_url() {
        let (line, omit) = translate_line(&RuleSet::default(), "url: /blog").into_parts();
        assert_eq!(line, "BaseURL=/blog");
        assert!(!omit);
    }

    #[test]
    fn test_value_with_colon_is_kept_whole() {
        let rules = RuleSet::default();
        assert_eq!(
            translate_line(&rules, "url: https://example.com:8080/blog"),
            keep("BaseURL=https://example.com:8080/blog")
        );
        assert_eq!(translate_line(&rules, "time: 10:30"), keep("time=10:30"));
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let rules = RuleSet::default();
        assert_eq!(
            translate_line(&rules, "# just a comment"),
            LineOutcome::Omit(OmitReason::Blank)
        );
        assert_eq!(translate_line(&rules, ""), LineOutcome::Omit(OmitReason::Blank));
        assert_eq!(
            translate_line(&rules, "title: Blog # the name"),
            keep("title=Blog")
        );
    }

    #[test]
    fn test_line_without_separator() {
        let rules = RuleSet::default();
        assert_eq!(
            translate_line(&rules, "title"),
            LineOutcome::Omit(OmitReason::NoSeparator)
        );
        assert_eq!(
            translate_line(&rules, "  - node_modules"),
            LineOutcome::Omit(OmitReason::NoSeparator)
        );
        assert_eq!(translate_line(&rules, "title").into_parts(), (String::new(), true));
    }

    #[test]
    fn test_colon_only_inside_comment() {
        assert_eq!(
            translate_line(&RuleSet::default(), "title # note: later"),
            LineOutcome::Omit(OmitReason::NoSeparator)
        );
    }

    #[test]
    fn test_omitted_keys_ignore_value() {
        let rules = RuleSet::default();
        for key in crate::rules::DEFAULT_OMITTED_KEYS {
            for value in ["", " kramdown", " http://x.y:1", " [a, b]"] {
                let outcome = translate_line(&rules, &format!("{key}:{value}"));
                assert_eq!(outcome, LineOutcome::Omit(OmitReason::OmittedKey(key.to_string())));
                assert_eq!(outcome.into_parts(), (String::new(), true));
            }
        }
    }

    #[test]
    fn test_key_is_not_trimmed() {
        let rules = RuleSet::default();
        assert_eq!(translate_line(&rules, "  baseurl: /x"), keep("  baseurl=/x"));
        assert_eq!(translate_line(&rules, " url: /x"), keep(" url=/x"));
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let rules = RuleSet::default();
        assert_eq!(translate_line(&rules, "title: My Blog"), keep("title=My Blog"));
        assert_eq!(translate_line(&rules, "empty:"), keep("empty="));
    }

    #[test]
    fn test_custom_rules_are_injected() {
        let rules = RuleSet::new(
            DirectoryMappingTable::default(),
            OmitKeySet::new(["title"]),
            KeyRewriteTable::new([("author", KeyRule::renamed("params.author"))]),
        );

        assert!(translate_line(&rules, "title: Blog").is_omitted());
        assert_eq!(translate_line(&rules, "author: Jo"), keep("params.author=Jo"));
        assert_eq!(translate_line(&rules, "baseurl: /x"), keep("baseurl=/x"));
        assert_eq!(translate_line(&rules, "url: /x"), keep("url=/x"));
    }
}
