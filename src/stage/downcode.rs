use crate::{
    context::Context,
    options::DowncodeOptions,
    stage::{Stage, StageError, rewrite},
};
use std::borrow::Cow;

/// ASCII bytes url decoding and symbol or currency expansion may rewrite.
/// ASCII keys of the mapping tables are looked up in the active map.
const EXPANSION_TRIGGERS: &[u8] = b"%&=@$";

/// Expands currencies and symbols, maps characters through the active map
/// of the call's language and folds the rest to ASCII.
pub struct Downcode;

impl Stage for Downcode {
    fn name(&self) -> &'static str {
        "downcode"
    }

    #[inline]
    fn needs_apply(&self, text: &str, ctx: &Context<'_>) -> Result<bool, StageError> {
        if !text.is_ascii() || text.bytes().any(|b| EXPANSION_TRIGGERS.contains(&b)) {
            return Ok(true);
        }
        Ok(ctx
            .translit
            .active_map(ctx.lang)
            .is_some_and(|map| map.has_ascii_key(text)))
    }

    fn apply<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        let options = DowncodeOptions::from(ctx.options);
        Ok(rewrite(text, |t| {
            ctx.translit.downcode_cow(t, ctx.lang, &options)
        }))
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::{assert_stage_contract, testing::stage_contract::StageTestConfig};

    impl StageTestConfig for Downcode {
        fn samples() -> &'static [&'static str] {
            &[
                "Jürgen Weiß",
                "ΦΞΠΏΣ",
                "Преступление и наказание",
                "22,50 € für 2",
                "1+1",
                "© 2024",
                "plain",
                "",
            ]
        }

        fn should_transform(lang: &str) -> &'static [(&'static str, &'static str)] {
            match lang {
                "de" => &[("Jürgen", "Juergen"), ("ΦΞΠΏΣ", "F3PWS"), ("a+b", "a plus b")],
                "tr" => &[("Jürgen", "Jurgen"), ("ış", "is")],
                "ru" => &[("Москва", "Moskva")],
                _ => &[],
            }
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(Downcode);
    }
}
