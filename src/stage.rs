//! Core filter stage abstraction.
//!
//! A slug is produced by running text through an ordered chain of stages.
//! Every stage gets a fast `needs_apply` pre-check and an allocation-aware
//! `apply`; a stage that changes nothing hands its input back untouched, so a
//! clean ASCII slug travels the whole chain without a copy.

pub mod clean_utf8;
pub mod downcode;
pub mod lower_case;
pub mod remove_words;
pub mod replace_separators;
pub mod restrict_charset;
pub mod strip_html;
pub mod trim_separator;
pub mod truncate;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Filtering failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single filter step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used for tracing and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context<'_>)
    -> Result<Cow<'a, str>, StageError>;
}

/// Run `f` over `text`, keeping `text` itself when `f` reports no change.
///
/// `f` must return `Cow::Borrowed` only for its unchanged input.
#[inline]
pub fn rewrite<'a, F>(text: Cow<'a, str>, f: F) -> Cow<'a, str>
where
    F: for<'t> FnOnce(&'t str) -> Cow<'t, str>,
{
    let changed = match f(&text) {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    };
    match changed {
        Some(s) => Cow::Owned(s),
        None => text,
    }
}

/// Narrow `text` to `range` without copying when it is borrowed.
#[inline]
pub(crate) fn narrow(text: Cow<'_, str>, range: std::ops::Range<usize>) -> Cow<'_, str> {
    if range.start == 0 && range.end == text.len() {
        return text;
    }
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(&s[range]),
        Cow::Owned(mut s) => {
            s.truncate(range.end);
            s.drain(..range.start);
            Cow::Owned(s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrite_keeps_unchanged_input() {
        let input = "abc";
        let out = rewrite(Cow::Borrowed(input), |t| Cow::Borrowed(t));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
        let out = rewrite(Cow::Borrowed(input), |t| Cow::Owned(t.to_uppercase()));
        assert_eq!(out, "ABC");
    }

    #[test]
    fn narrow_slices_or_shrinks() {
        let input = "--abc--";
        assert!(matches!(narrow(Cow::Borrowed(input), 2..5), Cow::Borrowed("abc")));
        assert_eq!(narrow(Cow::Owned(input.to_owned()), 2..5), "abc");
        assert!(matches!(narrow(Cow::Borrowed(input), 0..7), Cow::Borrowed(s) if s.len() == 7));
    }
}
