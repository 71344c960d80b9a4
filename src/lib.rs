pub mod active_map;
pub mod context;
pub mod expand;
pub mod input;
pub mod lang;
pub mod options;
pub mod process;
pub mod profile;
pub mod registry;
pub mod remove_words;
pub mod separator;
pub mod stage;
pub mod transliterator;
pub mod unicode;

pub use input::SlugInput;
pub use lang::{DEFAULT_LANG, Lang};
pub use lang::{
    ARA, AZE, BUL, CES, CURRENCY, DAN, DEU, DEU_AT, DEU_CH, ELL, ENG, EPO, EST, FAS, FIN, FRA,
    FRA_AT, FRA_CH, HIN, HRV, KAT, LATIN, LATIN_SYMBOLS, LAV, LIT, MYA, NOR, POL, RON, RUS, SRP,
    SWE, TUR, UKR, VIE,
};
pub use options::{DEFAULT_MAX_LENGTH, DEFAULT_SEPARATOR, DowncodeOptions, FilterOptions};
pub use profile::{Profile, ProfileError};
pub use registry::{MappingTable, Registry};
pub use separator::RuleError;
pub use stage::{Stage, StageError};
pub use stage::{
    clean_utf8::CleanUtf8, downcode::Downcode, lower_case::LowerCase, remove_words::RemoveWords,
    replace_separators::ReplaceSeparators, restrict_charset::RestrictCharset,
    strip_html::StripHtml, trim_separator::TrimSeparator, truncate::Truncate,
};
pub use transliterator::{Transliterator, TransliteratorBuilder, TransliteratorError};

use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT: Transliterator = Transliterator::new();
}

/// The shared instance behind the free functions. Never mutated.
pub fn default_transliterator() -> &'static Transliterator {
    &DEFAULT
}

/// [`Transliterator::filter`] on the shared instance.
pub fn filter(text: &str, options: &FilterOptions) -> String {
    DEFAULT.filter(text, options)
}

/// [`Transliterator::slug`] on the shared instance.
pub fn slug(text: &str, lang: &str, separator: Option<&str>, lowercase: bool) -> String {
    DEFAULT.slug(text, lang, separator, lowercase)
}

/// [`Transliterator::downcode`] on the shared instance.
pub fn downcode(text: &str, lang: &str) -> String {
    DEFAULT.downcode(text, lang)
}

/// [`Transliterator::downcode_with`] on the shared instance.
pub fn downcode_with(text: &str, lang: &str, options: &DowncodeOptions) -> String {
    DEFAULT.downcode_with(text, lang, options)
}

/// [`Transliterator::transliterate`] on the shared instance.
pub fn transliterate(text: &str) -> String {
    DEFAULT.transliterate(text)
}

#[cfg(test)]
mod testing {
    pub mod stage_contract;
}
