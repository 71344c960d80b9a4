use crate::{
    context::Context,
    stage::{Stage, StageError, rewrite},
    unicode,
};
use std::borrow::Cow;

/// Removes control, zero-width and BOM characters and maps Unicode
/// whitespace and typographic punctuation to ASCII.
///
/// Only active when the call asked for UTF-8 cleaning.
pub struct CleanUtf8;

impl Stage for CleanUtf8 {
    fn name(&self) -> &'static str {
        "clean_utf8"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> Result<bool, StageError> {
        Ok(ctx.options.clean_utf8 && unicode::needs_clean(text))
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        if !ctx.options.clean_utf8 {
            return Ok(text);
        }
        Ok(rewrite(text, unicode::clean))
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{
        assert_stage_contract, options::FilterOptions, testing::stage_contract::StageTestConfig,
    };

    impl StageTestConfig for CleanUtf8 {
        fn options(lang: &str) -> FilterOptions {
            FilterOptions::new().lang(lang).clean_utf8(true)
        }

        fn samples() -> &'static [&'static str] {
            &[
                "\u{FEFF}BOM first",
                "zero\u{200B}width",
                "no\u{00A0}break",
                "\u{201C}quoted\u{201D}",
                "ctrl\u{0007}bell",
                "plain text",
                "",
            ]
        }

        fn should_transform(_lang: &str) -> &'static [(&'static str, &'static str)] {
            &[
                ("\u{FEFF}BOM first", "BOM first"),
                ("no\u{00A0}break", "no break"),
                ("wait\u{2026}", "wait..."),
            ]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(CleanUtf8);
    }
}
