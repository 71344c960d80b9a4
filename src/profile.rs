//! Named filter chains.
//!
//! Presets are built at compile time through [`ProfileBuilder`]; callers that
//! pick their stages at runtime hand a list to [`Profile::from_stages`].
pub mod preset;

use crate::{
    context::Context,
    process::{ChainedProcess, DynamicProcess, EmptyProcess, Process},
    stage::{Stage, StageError},
};
use std::{borrow::Cow, sync::Arc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile `{profile}` failed: {source}")]
    Failed {
        profile: &'static str,
        #[source]
        source: StageError,
    },
}

impl ProfileError {
    /// Name of the stage that reported the failure.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Failed {
                source: StageError::Failed(stage, _),
                ..
            } => *stage,
        }
    }
}

/// A chain of filter stages under a name used in errors and traces.
pub struct Profile<P: Process> {
    name: &'static str,
    pipeline: P,
}

impl<P: Process> Profile<P> {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run every stage over `text` in order. Stages that report no work are
    /// skipped, so unchanged text stays borrowed.
    pub fn run<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context<'_>,
    ) -> Result<Cow<'a, str>, ProfileError> {
        self.pipeline
            .process(text, ctx)
            .map_err(|source| ProfileError::Failed {
                profile: self.name,
                source,
            })
    }
}

impl Profile<EmptyProcess> {
    pub fn builder(name: &'static str) -> ProfileBuilder<EmptyProcess> {
        ProfileBuilder {
            name,
            pipeline: EmptyProcess,
        }
    }
}

impl Profile<DynamicProcess> {
    /// Profile over stages chosen at runtime, run in iteration order.
    pub fn from_stages<I>(name: &'static str, stages: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Stage + Send + Sync>>,
    {
        Profile {
            name,
            pipeline: stages.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pipeline.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipeline.is_empty()
    }
}

/// Statically typed chain under construction; each [`stage`](Self::stage)
/// call wraps the chain so far.
pub struct ProfileBuilder<P: Process> {
    name: &'static str,
    pipeline: P,
}

impl<P: Process> ProfileBuilder<P> {
    pub fn stage<S: Stage + 'static>(self, stage: S) -> ProfileBuilder<ChainedProcess<S, P>> {
        ProfileBuilder {
            name: self.name,
            pipeline: ChainedProcess {
                stage,
                previous: self.pipeline,
            },
        }
    }

    pub fn build(self) -> Profile<P> {
        Profile {
            name: self.name,
            pipeline: self.pipeline,
        }
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

    struct Rejects;

    impl Stage for Rejects {
        fn name(&self) -> &'static str {
            "rejects"
        }

        fn needs_apply(&self, _text: &str, _ctx: &Context<'_>) -> Result<bool, StageError> {
            Ok(true)
        }

        fn apply<'a>(
            &self,
            _text: Cow<'a, str>,
            _ctx: &Context<'_>,
        ) -> Result<Cow<'a, str>, StageError> {
            Err(StageError::Failed("rejects", "nope".into()))
        }
    }

    #[test]
    fn runtime_stages_run_in_order() {
        let translit = Transliterator::new();
        let options = FilterOptions::new().lowercase(true);
        let ctx = Context::new(&translit, &options);
        let stages: [Arc<dyn Stage + Send + Sync>; 2] = [Arc::new(TrimSeparator), Arc::new(LowerCase)];
        let profile = Profile::from_stages("runtime", stages);
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.run(Cow::Borrowed("-ABC-"), &ctx).unwrap(), "abc");
    }

    #[test]
    fn errors_name_profile_and_stage() {
        let translit = Transliterator::new();
        let options = FilterOptions::new();
        let ctx = Context::new(&translit, &options);
        let profile = Profile::builder("strict").stage(LowerCase).stage(Rejects).build();

        let err = profile.run(Cow::Borrowed("text"), &ctx).unwrap_err();
        assert_eq!(err.stage(), "rejects");
        assert!(err.to_string().starts_with("profile `strict` failed"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn empty_runtime_profile_borrows() {
        let translit = Transliterator::new();
        let options = FilterOptions::new();
        let ctx = Context::new(&translit, &options);
        let profile = Profile::from_stages("none", Vec::<Arc<dyn Stage + Send + Sync>>::new());
        assert!(profile.is_empty());
        assert!(matches!(profile.run(Cow::Borrowed("Text"), &ctx).unwrap(), Cow::Borrowed(_)));
    }
}
