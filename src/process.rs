//! Stage chains.
//!
//! `ChainedProcess` is monomorphised: the compiler sees the concrete type of
//! every stage and inlines the whole chain. `DynamicProcess` is the boxed
//! fallback for chains assembled at runtime.
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};

pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context<'_>)
    -> Result<Cow<'a, str>, StageError>;
}

pub struct EmptyProcess;

impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(
        &self,
        text: Cow<'a, str>,
        _ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        Ok(text)
    }
}

pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        let current = self.previous.process(text, ctx)?;
        run_stage(&self.stage, current, ctx)
    }
}

#[inline(always)]
fn run_stage<'a, S: Stage + ?Sized>(
    stage: &S,
    text: Cow<'a, str>,
    ctx: &Context<'_>,
) -> Result<Cow<'a, str>, StageError> {
    if !stage.needs_apply(&text, ctx)? {
        return Ok(text);
    }
    log::trace!("stage `{}` on {} bytes", stage.name(), text.len());
    stage.apply(text, ctx)
}

#[derive(Default)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage + Send + Sync>; 12]>,
}

impl DynamicProcess {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push<T: Stage + Send + Sync + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl FromIterator<Arc<dyn Stage + Send + Sync>> for DynamicProcess {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Stage + Send + Sync>>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

impl Process for DynamicProcess {
    fn process<'a>(
        &self,
        mut text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, StageError> {
        for stage in &self.stages {
            text = run_stage(stage.as_ref(), text, ctx)?;
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        options::FilterOptions,
        stage::{lower_case::LowerCase, trim_separator::TrimSeparator},
        transliterator::Transliterator,
    };

    struct Fails;

    impl Stage for Fails {
        fn name(&self) -> &'static str {
            "fails"
        }

        fn needs_apply(&self, _text: &str, _ctx: &Context<'_>) -> Result<bool, StageError> {
            Ok(true)
        }

        fn apply<'a>(
            &self,
            _text: Cow<'a, str>,
            _ctx: &Context<'_>,
        ) -> Result<Cow<'a, str>, StageError> {
            Err(StageError::Failed(self.name(), "boom".into()))
        }
    }

    #[test]
    fn chained_runs_in_insertion_order() {
        let translit = Transliterator::new();
        let options = FilterOptions::new().lowercase(true);
        let ctx = Context::new(&translit, &options);
        let chain = ChainedProcess {
            stage: LowerCase,
            previous: ChainedProcess {
                stage: TrimSeparator,
                previous: EmptyProcess,
            },
        };
        assert_eq!(chain.process(Cow::Borrowed("-AB-C-"), &ctx).unwrap(), "ab-c");
    }

    #[test]
    fn dynamic_matches_chained() {
        let translit = Transliterator::new();
        let options = FilterOptions::new().lowercase(true);
        let ctx = Context::new(&translit, &options);
        let dynamic = DynamicProcess::new().push(TrimSeparator).push(LowerCase);
        assert_eq!(dynamic.len(), 2);
        assert_eq!(dynamic.process(Cow::Borrowed("-AB-C-"), &ctx).unwrap(), "ab-c");
    }

    #[test]
    fn untouched_input_stays_borrowed() {
        let translit = Transliterator::new();
        let options = FilterOptions::new();
        let ctx = Context::new(&translit, &options);
        let dynamic = DynamicProcess::new().push(TrimSeparator).push(LowerCase);
        let out = dynamic.process(Cow::Borrowed("clean-slug"), &ctx).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn errors_propagate() {
        let translit = Transliterator::new();
        let options = FilterOptions::new();
        let ctx = Context::new(&translit, &options);
        let dynamic = DynamicProcess::new().push(TrimSeparator).push(Fails);
        let err = dynamic.process(Cow::Borrowed("x"), &ctx).unwrap_err();
        assert!(err.to_string().contains("fails"));
    }
}
