use crate::{
    context::Context,
    stage::{Stage, StageError, rewrite},
};
use std::borrow::Cow;

/// Replaces every match of the separator rules with the separator.
///
/// Runs twice in the URL filter: on the raw input and again after
/// downcoding.
pub struct ReplaceSeparators;

impl Stage for ReplaceSeparators {
    fn name(&self) -> &'static str {
        "replace_separators"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> Result<bool, StageError> {
        Ok(!text.is_empty()
            && ctx
                .translit
                .separator_rules()
                .would_replace(text, ctx.separator))
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        let rules = ctx.translit.separator_rules();
        Ok(rewrite(text, |t| rules.apply(t, ctx.separator)))
    }
}
