//! Configuration values for `filter` and `downcode`.
use crate::lang::DEFAULT_LANG;

/// Default slug length limit.
pub const DEFAULT_MAX_LENGTH: usize = 200;
pub const DEFAULT_SEPARATOR: &str = "-";

/// Everything `filter` can be told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    /// Truncate the slug to this many characters; `0` disables truncation.
    pub max_length: usize,
    /// Language code. An empty code makes `filter` return `""`.
    pub lang: String,
    /// Keep `.` so file extensions survive.
    pub keep_extension_dot: bool,
    pub remove_words: bool,
    pub lowercase: bool,
    /// `None` removes whitespace-like separators entirely; `Some("")` falls
    /// back to `-`.
    pub separator: Option<String>,
    /// Only use the mapping tables, skip the generic ASCII fallback.
    pub map_only: bool,
    /// Strip invalid and invisible characters first, and url-decode while
    /// downcoding.
    pub clean_utf8: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            lang: DEFAULT_LANG.code().to_owned(),
            keep_extension_dot: false,
            remove_words: false,
            lowercase: false,
            separator: Some(DEFAULT_SEPARATOR.to_owned()),
            map_only: false,
            clean_utf8: false,
        }
    }
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed configuration behind `slug`.
    pub fn slug(lang: impl Into<String>, separator: Option<&str>, lowercase: bool) -> Self {
        Self {
            lang: lang.into(),
            separator: separator.map(str::to_owned),
            lowercase,
            clean_utf8: true,
            ..Self::default()
        }
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Like [`max_length`](Self::max_length); negative values disable
    /// truncation.
    pub fn signed_max_length(mut self, max_length: i64) -> Self {
        self.max_length = usize::try_from(max_length).unwrap_or(0);
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn keep_extension_dot(mut self, keep: bool) -> Self {
        self.keep_extension_dot = keep;
        self
    }

    pub fn remove_words(mut self, remove: bool) -> Self {
        self.remove_words = remove;
        self
    }

    pub fn lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn no_separator(mut self) -> Self {
        self.separator = None;
        self
    }

    pub fn map_only(mut self, map_only: bool) -> Self {
        self.map_only = map_only;
        self
    }

    pub fn clean_utf8(mut self, clean: bool) -> Self {
        self.clean_utf8 = clean;
        self
    }

    /// Separator actually inserted: `None` → `""`, `Some("")` → `"-"`.
    #[inline]
    pub fn effective_separator(&self) -> &str {
        match self.separator.as_deref() {
            None => "",
            Some("") => DEFAULT_SEPARATOR,
            Some(sep) => sep,
        }
    }
}

/// Options of a standalone `downcode` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DowncodeOptions {
    /// Skip the generic ASCII fallback; unmapped characters pass through.
    pub map_only: bool,
    /// Replacement for characters the fallback cannot transliterate.
    pub unknown: String,
    /// Url-decode `%XX` escapes and HTML entities first.
    pub clean_utf8: bool,
}

impl Default for DowncodeOptions {
    fn default() -> Self {
        Self {
            map_only: false,
            unknown: String::new(),
            clean_utf8: true,
        }
    }
}

impl DowncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn map_only(mut self, map_only: bool) -> Self {
        self.map_only = map_only;
        self
    }

    pub fn unknown(mut self, unknown: impl Into<String>) -> Self {
        self.unknown = unknown.into();
        self
    }

    pub fn clean_utf8(mut self, clean: bool) -> Self {
        self.clean_utf8 = clean;
        self
    }
}

impl From<&FilterOptions> for DowncodeOptions {
    fn from(options: &FilterOptions) -> Self {
        Self {
            map_only: options.map_only,
            unknown: String::new(),
            clean_utf8: options.clean_utf8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults() {
        let o = FilterOptions::default();
        assert_eq!(o.max_length, 200);
        assert_eq!(o.lang, "de");
        assert_eq!(o.effective_separator(), "-");
        assert!(!o.clean_utf8 && !o.lowercase && !o.remove_words && !o.map_only);
    }

    #[test]
    fn separator_normalization() {
        assert_eq!(FilterOptions::new().no_separator().effective_separator(), "");
        assert_eq!(FilterOptions::new().separator("").effective_separator(), "-");
        assert_eq!(FilterOptions::new().separator("_").effective_separator(), "_");
    }

    #[test]
    fn negative_length_disables_truncation() {
        assert_eq!(FilterOptions::new().signed_max_length(-1).max_length, 0);
        assert_eq!(FilterOptions::new().signed_max_length(60).max_length, 60);
    }

    #[test]
    fn slug_preset() {
        let o = FilterOptions::slug("fr", Some("_"), true);
        assert_eq!(o.max_length, 200);
        assert!(o.clean_utf8 && o.lowercase);
        assert!(!o.keep_extension_dot && !o.remove_words);
        assert_eq!(o.effective_separator(), "_");
    }

    #[test]
    fn downcode_defaults() {
        let o = DowncodeOptions::default();
        assert!(o.clean_utf8 && !o.map_only && o.unknown.is_empty());
        let from_filter = DowncodeOptions::from(&FilterOptions::new().map_only(true));
        assert!(from_filter.map_only && !from_filter.clean_utf8);
    }
}
