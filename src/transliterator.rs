//! The transliteration context: tables, the cached active map, remove words
//! and separator rules, plus the public downcode and filter operations.
use crate::{
    active_map::ActiveMap,
    context::Context,
    expand::expand,
    input::SlugInput,
    lang::DEFAULT_LANG,
    options::{DowncodeOptions, FilterOptions},
    process::Process,
    profile::{Profile, ProfileError, preset},
    registry::{MappingTable, Registry},
    remove_words::RemoveWordList,
    separator::{RuleError, SeparatorRules},
    stage::rewrite,
    unicode::{to_ascii, url_decode},
};
use log::{debug, error, warn};
use parking_lot::Mutex;
use regex::Regex;
use std::{borrow::Cow, sync::Arc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransliteratorError {
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
    #[error("separator rule error: {0}")]
    Rule(#[from] RuleError),
}

/// Owns every piece of mutable state the operations consult.
///
/// Configuration takes `&mut self`; lookups take `&self` and may be shared
/// across threads. The active map is rebuilt lazily whenever the requested
/// language differs from the cached one or the registry changed.
#[derive(Debug)]
pub struct Transliterator {
    registry: Registry,
    active: Mutex<Option<Arc<ActiveMap>>>,
    remove_words: RemoveWordList,
    separator_rules: SeparatorRules,
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::with_registry(Registry::builtin())
    }
}

impl Clone for Transliterator {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            active: Mutex::new(self.active.lock().clone()),
            remove_words: self.remove_words.clone(),
            separator_rules: self.separator_rules.clone(),
        }
    }
}

impl Transliterator {
    /// Built-in tables, default remove words and default separator rules.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> TransliteratorBuilder {
        TransliteratorBuilder::default()
    }

    fn with_registry(registry: Registry) -> Self {
        Self {
            registry,
            active: Mutex::new(None),
            remove_words: RemoveWordList::new(),
            separator_rules: SeparatorRules::default(),
        }
    }

    #[inline]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    pub fn separator_rules(&self) -> &SeparatorRules {
        &self.separator_rules
    }

    #[inline]
    pub fn remove_word_list(&self) -> &RemoveWordList {
        &self.remove_words
    }

    /// Remove-word pattern of `lang`. Words also match in their downcoded
    /// spelling, so `für` is found in text that already reads `fuer`.
    pub fn remove_words_pattern(&self, lang: &str) -> Option<Arc<Regex>> {
        let options = DowncodeOptions::new().clean_utf8(false);
        self.remove_words.pattern(lang, |word| {
            let ascii = self.downcode_cow(word, lang, &options);
            let ascii = ascii.trim();
            (ascii != word).then(|| ascii.to_owned())
        })
    }

    /// Active map for `lang`, rebuilt when the cached one belongs to another
    /// language. `None` for the empty language or when the map cannot be
    /// compiled.
    pub fn active_map(&self, lang: &str) -> Option<Arc<ActiveMap>> {
        if lang.is_empty() {
            return None;
        }
        let mut active = self.active.lock();
        if let Some(map) = active.as_ref().filter(|map| map.lang() == lang) {
            return Some(Arc::clone(map));
        }
        match ActiveMap::build(&self.registry, lang) {
            Ok(map) => {
                debug!("built active map for `{lang}` with {} entries", map.len());
                let map = Arc::new(map);
                *active = Some(Arc::clone(&map));
                Some(map)
            }
            Err(err) => {
                warn!("no transliteration map for `{lang}`: {err}");
                *active = None;
                None
            }
        }
    }

    /// Transliterate `text` to ASCII with the tables of `lang`.
    pub fn downcode(&self, text: &str, lang: &str) -> String {
        self.downcode_with(text, lang, &DowncodeOptions::default())
    }

    pub fn downcode_with(&self, text: &str, lang: &str, options: &DowncodeOptions) -> String {
        self.downcode_cow(text, lang, options).into_owned()
    }

    /// [`downcode`](Self::downcode) with the default language.
    pub fn transliterate(&self, text: &str) -> String {
        self.downcode(text, DEFAULT_LANG.code())
    }

    /// Url-decode (when asked), expand currencies and symbols, apply the
    /// active map, then the generic ASCII fallback unless `map_only` is set.
    /// Borrows `text` when nothing changes.
    pub fn downcode_cow<'a>(
        &self,
        text: &'a str,
        lang: &str,
        options: &DowncodeOptions,
    ) -> Cow<'a, str> {
        let mut out = Cow::Borrowed(text);
        if options.clean_utf8 {
            out = rewrite(out, url_decode);
        }
        out = rewrite(out, |t| expand(t, lang, &self.registry));
        if let Some(map) = self.active_map(lang) {
            out = rewrite(out, |t| map.apply(t));
        }
        if !options.map_only {
            out = rewrite(out, |t| to_ascii(t, &options.unknown));
        }
        out
    }

    /// Turn `text` into a URL-safe slug.
    ///
    /// Never fails: an empty language yields `""`, and so does a failing
    /// stage (logged at `error`).
    pub fn filter(&self, text: &str, options: &FilterOptions) -> String {
        if options.lang.is_empty() {
            return String::new();
        }
        match self.filter_with_profile(text, &preset::url_filter(), options) {
            Ok(slug) => slug.into_owned(),
            Err(err) => {
                error!("slug filter failed: {err}");
                String::new()
            }
        }
    }

    /// [`filter`](Self::filter) for loosely typed input.
    pub fn filter_input<T: SlugInput + ?Sized>(&self, input: &T, options: &FilterOptions) -> String {
        self.filter(&input.to_slug_text(), options)
    }

    /// Filter with the slug preset: maximum length 200 and UTF-8 cleaning.
    /// `None` joins words without a separator.
    pub fn slug(&self, text: &str, lang: &str, separator: Option<&str>, lowercase: bool) -> String {
        self.filter(text, &FilterOptions::slug(lang, separator, lowercase))
    }

    /// Run a caller-built profile over `text`.
    pub fn filter_with_profile<'a, P: Process>(
        &self,
        text: &'a str,
        profile: &Profile<P>,
        options: &FilterOptions,
    ) -> Result<Cow<'a, str>, TransliteratorError> {
        let ctx = Context::new(self, options);
        Ok(profile.run(Cow::Borrowed(text), &ctx)?)
    }

    /// Insert or replace the named table at the end of the registry.
    pub fn register_table(&mut self, name: impl Into<Cow<'static, str>>, table: MappingTable) {
        self.registry.register_table(name, table);
        self.invalidate();
    }

    /// Add custom characters. They win over every table registered before.
    pub fn register_chars<I, K, V>(&mut self, chars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Cow<'static, str>>,
        V: Into<Cow<'static, str>>,
    {
        self.registry.add_ad_hoc_table(chars.into_iter().collect());
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.remove_words.invalidate();
        if self.active.get_mut().take().is_some() {
            debug!("active map invalidated by registry change");
        }
    }

    pub fn set_remove_words<I, S>(&mut self, words: I, lang: &str, merge: bool)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remove_words.set(words, lang, merge);
    }

    /// Back to the built-in remove words of `lang`, or of every language.
    pub fn reset_remove_words(&mut self, lang: Option<&str>) {
        self.remove_words.reset(lang);
    }

    /// Append to (`append = true`) or replace the separator rules. A pattern
    /// that fails to compile leaves the current rules in place.
    pub fn set_separator_rules<I, S>(&mut self, patterns: I, append: bool) -> Result<(), RuleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.separator_rules.set(patterns, append)
    }

    pub fn reset_separator_rules(&mut self) {
        self.separator_rules.reset();
    }
}

/// Startup configuration of a [`Transliterator`].
pub struct TransliteratorBuilder {
    translit: Transliterator,
}

impl Default for TransliteratorBuilder {
    fn default() -> Self {
        Self {
            translit: Transliterator::new(),
        }
    }
}

impl TransliteratorBuilder {
    /// Start from an empty registry instead of the built-in tables.
    pub fn without_builtin_tables(mut self) -> Self {
        self.translit.registry = Registry::empty();
        self.translit.invalidate();
        self
    }

    pub fn table(mut self, name: impl Into<Cow<'static, str>>, table: MappingTable) -> Self {
        self.translit.register_table(name, table);
        self
    }

    pub fn chars<I, K, V>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Cow<'static, str>>,
        V: Into<Cow<'static, str>>,
    {
        self.translit.register_chars(chars);
        self
    }

    pub fn remove_words<I, S>(mut self, words: I, lang: &str, merge: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.translit.set_remove_words(words, lang, merge);
        self
    }

    pub fn separator_rules<I, S>(mut self, patterns: I, append: bool) -> Result<Self, TransliteratorError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.translit.set_separator_rules(patterns, append)?;
        Ok(self)
    }

    pub fn build(self) -> Transliterator {
        self.translit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_map_is_cached_per_language() {
        let translit = Transliterator::new();
        let de = translit.active_map("de").unwrap();
        let again = translit.active_map("de").unwrap();
        assert!(Arc::ptr_eq(&de, &again));
        let tr = translit.active_map("tr").unwrap();
        assert!(!Arc::ptr_eq(&de, &tr));
        assert_eq!(de.get("ö"), Some("oe"));
        assert_eq!(tr.get("ö"), Some("o"));
        assert!(translit.active_map("").is_none());
    }

    #[test]
    fn registry_changes_invalidate_the_cache() {
        let mut translit = Transliterator::new();
        assert_eq!(translit.downcode("\u{E000}", "de"), "");
        translit.register_chars([("\u{E000}", "logo")]);
        assert_eq!(translit.downcode("\u{E000}", "de"), "logo");
    }

    #[test]
    fn custom_table_under_language_name() {
        let translit = Transliterator::builder()
            .table("xx", [("ä", "ae!")].into_iter().collect())
            .build();
        assert_eq!(translit.downcode("ä", "xx"), "ae!");
        assert_eq!(translit.downcode("ä", "de"), "ae");
    }

    #[test]
    fn downcode_options() {
        let translit = Transliterator::new();
        let map_only = DowncodeOptions::new().map_only(true);
        assert_eq!(translit.downcode_with("Über ☃", "de", &map_only), "Ueber ☃");
        let unknown = DowncodeOptions::new().unknown("?");
        assert_eq!(translit.downcode_with("a\u{E000}b", "de", &unknown), "a?b");
        let raw = DowncodeOptions::new().clean_utf8(false);
        assert_eq!(translit.downcode_with("caf&eacute;", "en", &raw), "caf and eacute;");
    }

    #[test]
    fn downcode_borrows_ascii() {
        let translit = Transliterator::new();
        let out = translit.downcode_cow("plain text", "de", &DowncodeOptions::default());
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn transliterate_uses_german() {
        let translit = Transliterator::new();
        assert_eq!(translit.transliterate("Größe"), "Groesse");
    }

    #[test]
    fn invalid_separator_rule_keeps_current_rules() {
        let mut translit = Transliterator::new();
        let before = translit.separator_rules().len();
        assert!(translit.set_separator_rules(["("], true).is_err());
        assert_eq!(translit.separator_rules().len(), before);
        assert!(Transliterator::builder().separator_rules(["["], false).is_err());
    }

    #[test]
    fn remove_words_round_trip() {
        let mut translit = Transliterator::new();
        translit.set_remove_words(["foo"], "en", true);
        assert!(translit.remove_word_list().words("en").contains(&"foo"));
        translit.reset_remove_words(Some("en"));
        assert!(!translit.remove_word_list().words("en").contains(&"foo"));
    }

    #[test]
    fn remove_words_match_downcoded_spelling() {
        let translit = Transliterator::new();
        let re = translit.remove_words_pattern("de").unwrap();
        assert!(re.is_match("Tipps fuer dich"));
        assert!(re.is_match("Tipps für dich"));
        assert!(translit.remove_words_pattern("zz").is_none());
    }

    #[test]
    fn registry_changes_refresh_remove_words() {
        let mut translit = Transliterator::new();
        translit.set_remove_words(["čaj"], "en", false);
        assert!(translit.remove_words_pattern("en").unwrap().is_match("caj"));
        translit.register_chars([("č", "tsch")]);
        let re = translit.remove_words_pattern("en").unwrap();
        assert!(re.is_match("tschaj"));
        assert!(!re.is_match("caj"));
    }

    #[test]
    fn empty_registry() {
        let translit = Transliterator::builder().without_builtin_tables().build();
        assert!(translit.registry().is_empty());
        assert_eq!(translit.downcode("Ärger", "de"), "Arger");
    }

    #[test]
    fn shared_across_threads() {
        let translit = Arc::new(Transliterator::new());
        let handles: Vec<_> = ["de", "tr", "ru", "el"]
            .into_iter()
            .map(|lang| {
                let translit = Arc::clone(&translit);
                std::thread::spawn(move || translit.filter("Öl Straße", &FilterOptions::new().lang(lang)))
            })
            .collect();
        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results[0], "Oel-Strasse");
        assert_eq!(results[1], "Ol-Strasse");
    }
}
