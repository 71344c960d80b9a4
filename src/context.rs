use crate::{options::FilterOptions, transliterator::Transliterator};

/// Runtime context passed to every filter stage.
///
/// Borrows the transliterator (tables, remove words, separator rules) and the
/// options of the current call; `lang` and `separator` are resolved once.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub translit: &'a Transliterator,
    pub options: &'a FilterOptions,
    pub lang: &'a str,
    pub separator: &'a str,
}

impl<'a> Context<'a> {
    #[inline(always)]
    pub fn new(translit: &'a Transliterator, options: &'a FilterOptions) -> Self {
        Self {
            translit,
            options,
            lang: &options.lang,
            separator: options.effective_separator(),
        }
    }
}
