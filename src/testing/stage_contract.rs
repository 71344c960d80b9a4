use crate::{
    context::Context, options::FilterOptions, stage::Stage, transliterator::Transliterator,
};
use std::borrow::Cow;

/// Languages every contract runs in: the default, table-rich languages,
/// one without remove words and a bare category.
pub const CONTRACT_LANGS: &[&str] = &["de", "en", "fr", "tr", "ru", "el", "latin"];

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// Options the stage runs with; stages gated by a flag switch it on here.
    fn options(lang: &str) -> FilterOptions {
        FilterOptions::new().lang(lang)
    }

    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that must pass through unchanged and without a copy.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "test123", ""]
    }

    /// Input/output pairs that verify correct transformations.
    fn should_transform(_lang: &str) -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies the universal stage contracts:
///
/// 1. `zero_copy_when_no_changes`: no allocation when input == output
/// 2. `stage_is_idempotent`: applying twice yields the same result as once
/// 3. `needs_apply_is_accurate`: correctly predicts whether `apply` changes text
/// 4. `handles_empty_string`: `""` stays `""`
/// 5. `no_panic_on_mixed_scripts`: survives multi-script input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(&$stage);
        $crate::testing::stage_contract::handles_empty_string(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

fn run<'a, S: Stage>(stage: &S, text: Cow<'a, str>, ctx: &Context<'_>) -> Cow<'a, str> {
    if stage.needs_apply(&text, ctx).unwrap() {
        stage.apply(text, ctx).unwrap()
    } else {
        text
    }
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    let translit = Transliterator::new();
    for &lang in CONTRACT_LANGS {
        let options = S::options(lang);
        let ctx = Context::new(&translit, &options);

        for &input in S::samples() {
            let mut text = Cow::Borrowed(input);

            // First pass: respect needs_apply
            if stage.needs_apply(&text, &ctx).unwrap() {
                let old_ptr = text.as_ref() as *const str;
                text = stage.apply(text, &ctx).unwrap();
                assert_ne!(
                    old_ptr,
                    text.as_ref() as *const str,
                    "needs_apply promised a change (lang: {lang}, input: `{input}`)"
                );
            } else {
                assert_eq!(input as *const str, text.as_ref() as *const str);
            }

            // Second pass: must never allocate again
            let old_ptr = text.as_ref() as *const str;
            let text = run(stage, text, &ctx);
            assert_eq!(
                old_ptr,
                text.as_ref() as *const str,
                "zero-copy violated on second pass (lang: {lang}, input: `{input}`)"
            );
        }

        for &pass_through in S::should_pass_through() {
            let text = run(stage, Cow::Borrowed(pass_through), &ctx);
            assert_eq!(text.as_ref(), pass_through);
            assert_eq!(
                pass_through as *const str,
                text.as_ref() as *const str,
                "zero-copy violated on pass-through sample (lang: {lang}, input: `{pass_through}`)"
            );
        }

        for &(input, expected) in S::should_transform(lang) {
            let text = run(stage, Cow::Borrowed(input), &ctx);
            assert_eq!(text.as_ref(), expected, "lang: {lang}, input: `{input}`");
        }
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    let translit = Transliterator::new();
    for &lang in CONTRACT_LANGS {
        let options = S::options(lang);
        let ctx = Context::new(&translit, &options);
        for &input in S::samples() {
            let once = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
            let twice = stage.apply(once.clone(), &ctx).unwrap();
            assert_eq!(once, twice, "apply() not idempotent in {lang} on `{input}`");
        }
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    let translit = Transliterator::new();
    for &lang in CONTRACT_LANGS {
        let options = S::options(lang);
        let ctx = Context::new(&translit, &options);
        for &sample in S::samples() {
            check_accuracy(stage, sample, &ctx);
        }
        for clean in ["", "hello", "world123"] {
            check_accuracy(stage, clean, &ctx);
        }
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str, ctx: &Context<'_>) {
    let predicted = stage.needs_apply(input, ctx).expect("needs_apply errored");
    // Owned input so stages that always allocate are not penalised.
    let output = stage
        .apply(Cow::Owned(input.to_owned()), ctx)
        .expect("apply errored");
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` in {lang} on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
        lang = ctx.lang
    );
}

pub fn handles_empty_string<S: StageTestConfig>(stage: &S) {
    let translit = Transliterator::new();
    let options = S::options("de");
    let ctx = Context::new(&translit, &options);
    let result = run(stage, Cow::Borrowed(""), &ctx);
    assert_eq!(result.as_ref(), "");
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let translit = Transliterator::new();
    let options = S::options("de");
    let ctx = Context::new(&translit, &options);
    let _ = stage.apply(
        Cow::Borrowed("Hello 世界 русский Türkçe العربية <b>简体中文</b> 22,50 € & 100%"),
        &ctx,
    );
}
