use crate::{
    context::Context,
    stage::{Stage, StageError, narrow},
};
use std::borrow::Cow;

/// Trims characters of the separator from both ends.
pub struct TrimSeparator;

impl Stage for TrimSeparator {
    fn name(&self) -> &'static str {
        "trim_separator"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> Result<bool, StageError> {
        let sep = ctx.separator;
        if sep.is_empty() {
            return Ok(false);
        }
        Ok(text.starts_with(|c: char| sep.contains(c)) || text.ends_with(|c: char| sep.contains(c)))
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        let sep = ctx.separator;
        if sep.is_empty() {
            return Ok(text);
        }
        let is_sep = |c: char| sep.contains(c);
        let start = text.len() - text.trim_start_matches(is_sep).len();
        let end = text.trim_end_matches(is_sep).len().max(start);
        Ok(narrow(text, start..end))
    }
}
