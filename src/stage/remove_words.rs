use crate::{
    context::Context,
    remove_words::strip_words,
    stage::{Stage, StageError, rewrite},
};
use std::borrow::Cow;

/// Strips the remove words of the call's language, whole words only and
/// ignoring case. Only active when the call asked for word removal.
pub struct RemoveWords;

impl Stage for RemoveWords {
    fn name(&self) -> &'static str {
        "remove_words"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> Result<bool, StageError> {
        if !ctx.options.remove_words || text.is_empty() {
            return Ok(false);
        }
        Ok(ctx
            .translit
            .remove_words_pattern(ctx.lang)
            .is_some_and(|re| re.is_match(text)))
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        if !ctx.options.remove_words {
            return Ok(text);
        }
        match ctx.translit.remove_words_pattern(ctx.lang) {
            Some(re) => Ok(rewrite(text, |t| strip_words(&re, t))),
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

    impl StageTestConfig for RemoveWords {
        fn options(lang: &str) -> FilterOptions {
            FilterOptions::new().lang(lang).remove_words(true)
        }

        fn samples() -> &'static [&'static str] {
            &["the art of war", "der Weg ist das Ziel", "Tipps fuer dich", "La vie", "plain", ""]
        }

        fn should_transform(lang: &str) -> &'static [(&'static str, &'static str)] {
            match lang {
                "en" => &[("The art of war", " art  war")],
                "de" => &[
                    ("der Weg ist das Ziel", " Weg   Ziel"),
                    ("Tipps fuer dich", "Tipps  dich"),
                ],
                "fr" => &[("La vie", " vie")],
                _ => &[],
            }
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(RemoveWords);
    }
}
