use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// ASCII lower-casing, active when the call asked for it.
///
/// Runs after the charset restriction, so ASCII is all that is left.
pub struct LowerCase;

impl Stage for LowerCase {
    fn name(&self) -> &'static str {
        "lower_case"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> Result<bool, StageError> {
        Ok(ctx.options.lowercase && text.bytes().any(|b| b.is_ascii_uppercase()))
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        if !ctx.options.lowercase || !text.bytes().any(|b| b.is_ascii_uppercase()) {
            return Ok(text);
        }
        let mut owned = text.into_owned();
        owned.make_ascii_lowercase();
        Ok(Cow::Owned(owned))
    }
}
