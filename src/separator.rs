//! Patterns whose matches are replaced by the slug separator.
//!
//! The rule set runs twice per `filter` call, before and after downcoding.
use lazy_static::lazy_static;
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use thiserror::Error;

/// Built-in rules: a few HTML entities, the dash/underscore/quote family and
/// `<br>` tags.
pub const DEFAULT_SEPARATOR_PATTERNS: &[&str] = &[
    r"(?i)&quot;|&amp;|&lt;|&gt;|&ndash;|&mdash;",
    r#"⁻|-|—|_|"|`|´"#,
    r"(?i)<br.*?>",
];

lazy_static! {
    static ref DEFAULT_RULES: Vec<Regex> = DEFAULT_SEPARATOR_PATTERNS
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect();
}

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid separator rule `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Ordered separator-replacement rules.
#[derive(Debug, Clone)]
pub struct SeparatorRules {
    rules: Vec<Regex>,
}

impl Default for SeparatorRules {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.clone(),
        }
    }
}

impl SeparatorRules {
    /// Compile `patterns` into a fresh rule set.
    pub fn new<I, S>(patterns: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self {
            rules: compile(patterns)?,
        })
    }

    /// Append `patterns` (`append = true`) or replace the whole set with them.
    /// Nothing changes when any pattern fails to compile.
    pub fn set<I, S>(&mut self, patterns: I, append: bool) -> Result<(), RuleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let compiled = compile(patterns)?;
        if append {
            self.rules.extend(compiled);
        } else {
            self.rules = compiled;
        }
        Ok(())
    }

    /// Back to the built-in rules.
    pub fn reset(&mut self) {
        self.rules = DEFAULT_RULES.clone();
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Regex::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether some rule matches text other than `separator` itself.
    pub fn would_replace(&self, text: &str, separator: &str) -> bool {
        self.rules
            .iter()
            .any(|re| re.find_iter(text).any(|m| m.as_str() != separator))
    }

    /// Apply every rule in order, replacing matches with `separator`
    /// literally.
    pub fn apply<'a>(&self, text: &'a str, separator: &str) -> Cow<'a, str> {
        let mut current = Cow::Borrowed(text);
        for re in &self.rules {
            let replaced = match re.replace_all(&current, NoExpand(separator)) {
                Cow::Owned(s) => Some(s),
                Cow::Borrowed(_) => None,
            };
            if let Some(s) = replaced {
                current = Cow::Owned(s);
            }
        }
        match current {
            Cow::Owned(s) if s == text => Cow::Borrowed(text),
            other => other,
        }
    }
}

fn compile<I, S>(patterns: I) -> Result<Vec<Regex>, RuleError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|p| {
            let pattern = p.as_ref();
            Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_replace_dash_family() {
        let rules = SeparatorRules::default();
        assert_eq!(rules.apply("_foo_bar_", "-"), "-foo-bar-");
        assert_eq!(rules.apply("a—b⁻c`d´e\"f", " "), "a b c d e f");
        assert_eq!(rules.apply("J'étudie", "-"), "J'étudie");
    }

    #[test]
    fn defaults_replace_entities_and_breaks() {
        let rules = SeparatorRules::default();
        assert_eq!(rules.apply("Tom&AMP;Jerry", "-"), "Tom-Jerry");
        assert_eq!(rules.apply("Petty<br>theft", "-"), "Petty-theft");
        assert_eq!(rules.apply("a<BR />b<br>c", "_"), "a_b_c");
    }

    #[test]
    fn separator_is_inserted_literally() {
        let rules = SeparatorRules::default();
        assert_eq!(rules.apply("a_b", "$1"), "a$1b");
    }

    #[test]
    fn unchanged_text_stays_borrowed() {
        let rules = SeparatorRules::default();
        assert!(matches!(rules.apply("plain", "-"), Cow::Borrowed(_)));
        assert!(matches!(rules.apply("a-b", "-"), Cow::Borrowed(_)));
        assert!(!rules.would_replace("a-b", "-"));
        assert!(rules.would_replace("a_b", "-"));
    }

    #[test]
    fn set_appends_or_replaces() {
        let mut rules = SeparatorRules::default();
        rules.set(["x"], true).unwrap();
        assert_eq!(rules.len(), DEFAULT_SEPARATOR_PATTERNS.len() + 1);
        assert_eq!(rules.apply("axb_c", "-"), "a-b-c");

        rules.set(["x"], false).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.apply("axb_c", "-"), "a-b_c");

        rules.reset();
        assert_eq!(rules.patterns().collect::<Vec<_>>(), DEFAULT_SEPARATOR_PATTERNS);
    }

    #[test]
    fn invalid_pattern_keeps_previous_rules() {
        let mut rules = SeparatorRules::default();
        let err = rules.set(["ok", "(unclosed"], false).unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
        assert_eq!(rules.len(), DEFAULT_SEPARATOR_PATTERNS.len());
    }
}
