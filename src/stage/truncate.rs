use crate::{
    context::Context,
    stage::{Stage, StageError, narrow},
};
use std::borrow::Cow;

/// Cuts text to `max_length` characters; `0` disables the cut.
///
/// The cut is hard: a multi-character replacement may be split.
pub struct Truncate;

impl Stage for Truncate {
    fn name(&self) -> &'static str {
        "truncate"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> Result<bool, StageError> {
        let max = ctx.options.max_length;
        Ok(max > 0 && text.len() > max && text.chars().nth(max).is_some())
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        let max = ctx.options.max_length;
        if max == 0 {
            return Ok(text);
        }
        let cut = text.char_indices().nth(max).map(|(end, _)| end);
        match cut {
            Some(end) => Ok(narrow(text, 0..end)),
            None => Ok(text),
        }
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{
        assert_stage_contract, options::FilterOptions, testing::stage_contract::StageTestConfig,
    };

    impl StageTestConfig for Truncate {
        fn options(lang: &str) -> FilterOptions {
            FilterOptions::new().lang(lang).max_length(5)
        }

        fn samples() -> &'static [&'static str] {
            &["abcdefgh", "abc", "äöüßéè", "exact", ""]
        }

        fn should_pass_through() -> &'static [&'static str] {
            &["hello", "abc", ""]
        }

        fn should_transform(_lang: &str) -> &'static [(&'static str, &'static str)] {
            &[("abcdefgh", "abcde"), ("äöüßéè", "äöüßé")]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(Truncate);
    }
}
