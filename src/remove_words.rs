//! Per-language words stripped from slugs on request.
use crate::lang::get_lang_entry_by_code;
use log::{debug, warn};
use parking_lot::Mutex;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// Remove-word lists keyed by language code.
///
/// A language without an override uses its built-in defaults. Whole-word,
/// case-insensitive patterns are compiled lazily and cached per language.
#[derive(Debug, Default)]
pub struct RemoveWordList {
    overrides: HashMap<String, Vec<String>>,
    compiled: Mutex<HashMap<String, Option<Arc<Regex>>>>,
}

impl Clone for RemoveWordList {
    fn clone(&self) -> Self {
        Self {
            overrides: self.overrides.clone(),
            compiled: Mutex::new(self.compiled.lock().clone()),
        }
    }
}

impl RemoveWordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current words for `lang`; built-in defaults unless overridden.
    pub fn words(&self, lang: &str) -> Vec<&str> {
        if lang.is_empty() {
            return Vec::new();
        }
        match self.overrides.get(lang) {
            Some(words) => words.iter().map(String::as_str).collect(),
            None => get_lang_entry_by_code(lang)
                .map(|entry| entry.remove_words.to_vec())
                .unwrap_or_default(),
        }
    }

    /// Append `words` to the current list of `lang` (`merge = true`) or
    /// replace it.
    pub fn set<I, S>(&mut self, words: I, lang: &str, merge: bool)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = if merge {
            self.words(lang).into_iter().map(str::to_owned).collect()
        } else {
            Vec::new()
        };
        list.extend(words.into_iter().map(Into::into));
        self.overrides.insert(lang.to_owned(), list);
        self.compiled.get_mut().remove(lang);
    }

    /// Drop the override of `lang`, or of every language for `None`.
    pub fn reset(&mut self, lang: Option<&str>) {
        match lang {
            Some(lang) => {
                self.overrides.remove(lang);
                self.compiled.get_mut().remove(lang);
            }
            None => {
                self.overrides.clear();
                self.compiled.get_mut().clear();
            }
        }
    }

    /// Compiled `\b(?:w1|w2|…)\b` pattern for `lang`; `None` when the list
    /// is empty.
    ///
    /// `respell` may return a second spelling of a word (its downcoded form,
    /// since word removal runs on downcoded text); both are matched. Only
    /// languages with an override or a built-in table are cached.
    pub fn pattern<F>(&self, lang: &str, respell: F) -> Option<Arc<Regex>>
    where
        F: Fn(&str) -> Option<String>,
    {
        if !self.overrides.contains_key(lang) && get_lang_entry_by_code(lang).is_none() {
            return None;
        }
        let mut compiled = self.compiled.lock();
        if let Some(cached) = compiled.get(lang) {
            return cached.clone();
        }
        let pattern = self.build_pattern(lang, respell);
        compiled.insert(lang.to_owned(), pattern.clone());
        pattern
    }

    /// Number of languages with a compiled pattern (or a cached empty one).
    pub fn cached_len(&self) -> usize {
        self.compiled.lock().len()
    }

    /// Forget every compiled pattern; respellings depend on the mapping tables.
    pub(crate) fn invalidate(&mut self) {
        self.compiled.get_mut().clear();
    }

    fn build_pattern<F>(&self, lang: &str, respell: F) -> Option<Arc<Regex>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let words = self.words(lang);
        let mut alternatives: Vec<String> = Vec::with_capacity(words.len());
        for word in words.iter().filter(|w| !w.is_empty()) {
            alternatives.push(regex::escape(word));
            if let Some(other) = respell(word).filter(|o| !o.is_empty() && o != word) {
                alternatives.push(regex::escape(&other));
            }
        }
        if alternatives.is_empty() {
            return None;
        }
        let alternation = alternatives.join("|");
        match RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => {
                debug!("compiled {} remove words for `{lang}`", words.len());
                Some(Arc::new(re))
            }
            Err(err) => {
                warn!("remove words for `{lang}` disabled: {err}");
                None
            }
        }
    }
}

/// Strip every match of `pattern` from `text`.
pub fn strip_words<'a>(pattern: &Regex, text: &'a str) -> Cow<'a, str> {
    match pattern.replace_all(text, "") {
        Cow::Owned(s) => Cow::Owned(s),
        Cow::Borrowed(_) => Cow::Borrowed(text),
    }
}
