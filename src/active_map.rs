//! The flattened, language-prioritized lookup used by the downcoder.
use crate::registry::Registry;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::collections::HashMap;

// Every built-in table together stays well below this.
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Flattened view of a [`Registry`] for one language.
///
/// Holds the merged `source → replacement` lookup, the concatenation of every
/// source key (`chars`) and a pattern matching any mapped key. Multi-character
/// keys are tried longest first, then a single character class.
#[derive(Debug, Clone)]
pub struct ActiveMap {
    lang: String,
    lookup: HashMap<String, String>,
    chars: String,
    pattern: Regex,
    // First bytes of the keys that start with an ASCII character.
    ascii_keys: [bool; 128],
}

impl ActiveMap {
    /// Flatten `registry` with the table named `lang` moved to the end.
    pub fn build(registry: &Registry, lang: &str) -> Result<Self, regex::Error> {
        let mut lookup = HashMap::new();
        let mut chars = String::new();
        let mut ascii_keys = [false; 128];
        for table in registry.prioritized(lang) {
            for (from, to) in table.iter() {
                if let Some(&first) = from.as_bytes().first().filter(|b| b.is_ascii()) {
                    ascii_keys[usize::from(first)] = true;
                }
                lookup.insert(from.to_owned(), to.to_owned());
                chars.push_str(from);
            }
        }
        let pattern = build_pattern(&lookup, &chars)?;
        Ok(Self {
            lang: lang.to_owned(),
            lookup,
            chars,
            pattern,
            ascii_keys,
        })
    }

    #[inline]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    #[inline]
    pub fn get(&self, from: &str) -> Option<&str> {
        self.lookup.get(from).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Every source key concatenated in flattening order.
    #[inline]
    pub fn chars(&self) -> &str {
        &self.chars
    }

    #[inline]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Whether `text` holds an ASCII byte some key starts with. A `false`
    /// answer on ASCII text means [`apply`](Self::apply) borrows it unchanged.
    #[inline]
    pub fn has_ascii_key(&self, text: &str) -> bool {
        text.bytes()
            .any(|b| b.is_ascii() && self.ascii_keys[usize::from(b)])
    }

    /// Replace every mapped sequence of `text` in one scan. Replacement text
    /// is never scanned again.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if text.is_empty() || self.lookup.is_empty() {
            return Cow::Borrowed(text);
        }

        let mut out: Option<String> = None;
        let mut last = 0;
        for m in self.pattern.find_iter(text) {
            let Some(replacement) = self.lookup.get(m.as_str()) else {
                continue;
            };
            let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + (text.len() >> 2)));
            buf.push_str(&text[last..m.start()]);
            buf.push_str(replacement);
            last = m.end();
        }

        match out {
            Some(mut buf) => {
                buf.push_str(&text[last..]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(text),
        }
    }
}

fn build_pattern(lookup: &HashMap<String, String>, chars: &str) -> Result<Regex, regex::Error> {
    let mut sequences: Vec<&str> = lookup
        .keys()
        .map(String::as_str)
        .filter(|k| k.chars().nth(1).is_some())
        .collect();
    // Longest first, then lexical so the pattern is stable across builds.
    sequences.sort_unstable_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let mut pattern = String::with_capacity(chars.len() * 2);
    for seq in &sequences {
        pattern.push_str(&regex::escape(seq));
        pattern.push('|');
    }

    let mut seen = std::collections::HashSet::new();
    let mut class = String::new();
    for c in chars.chars() {
        if seen.insert(c) {
            let mut buf = [0u8; 4];
            class.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        }
    }
    if class.is_empty() {
        // Matches nothing.
        pattern.push_str(r"\b\B");
    } else {
        pattern.push('[');
        pattern.push_str(&class);
        pattern.push(']');
    }

    RegexBuilder::new(&pattern)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MappingTable;

    fn registry() -> Registry {
        let mut r = Registry::empty();
        r.register_table("de", [("ö", "oe"), ("ß", "ss")].into_iter().collect());
        r.register_table("tr", [("ö", "o"), ("ş", "s")].into_iter().collect());
        r
    }

    #[test]
    fn requested_language_wins() {
        let r = registry();
        assert_eq!(ActiveMap::build(&r, "de").unwrap().get("ö"), Some("oe"));
        assert_eq!(ActiveMap::build(&r, "tr").unwrap().get("ö"), Some("o"));
        // Unknown language keeps the registry order: the last table wins.
        assert_eq!(ActiveMap::build(&r, "xx").unwrap().get("ö"), Some("o"));
    }

    #[test]
    fn chars_concatenates_every_key() {
        let map = ActiveMap::build(&registry(), "de").unwrap();
        assert_eq!(map.chars(), "öşöß");
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn apply_is_single_pass() {
        let mut r = Registry::empty();
        r.register_table("x", [("a", "b"), ("b", "c")].into_iter().collect());
        let map = ActiveMap::build(&r, "x").unwrap();
        assert_eq!(map.apply("ab"), "bc");
    }

    #[test]
    fn sequences_take_precedence_over_single_chars() {
        let mut r = Registry::empty();
        r.register_table(
            "el",
            [("Α", "A"), ("Υ", "Y"), ("ΑΥ", "AU")].into_iter().collect(),
        );
        let map = ActiveMap::build(&r, "el").unwrap();
        assert_eq!(map.apply("ΑΥΑ Υ"), "AUA Y");
    }

    #[test]
    fn zero_copy_without_matches() {
        let map = ActiveMap::build(&registry(), "de").unwrap();
        assert!(matches!(map.apply("plain ascii"), Cow::Borrowed(_)));
    }

    #[test]
    fn empty_registry_matches_nothing() {
        let map = ActiveMap::build(&Registry::empty(), "de").unwrap();
        assert!(map.is_empty());
        assert!(!map.pattern().is_match("anything"));
        assert_eq!(map.apply("anything"), "anything");
    }

    #[test]
    fn metacharacters_are_escaped() {
        let mut r = Registry::empty();
        let table: MappingTable = [("$", " Dollar "), ("-", "_"), ("]", "x"), ("^", "y")]
            .into_iter()
            .collect();
        r.register_table("sym", table);
        let map = ActiveMap::build(&r, "sym").unwrap();
        assert_eq!(map.apply("$-]^"), " Dollar _xy");
    }

    #[test]
    fn ascii_keys_are_tracked() {
        let mut r = registry();
        assert!(!ActiveMap::build(&r, "de").unwrap().has_ascii_key("C# + c++"));

        r.add_ad_hoc_table([("#", " sharp "), ("++", " plus plus ")].into_iter().collect());
        let map = ActiveMap::build(&r, "de").unwrap();
        assert!(map.has_ascii_key("C#"));
        assert!(map.has_ascii_key("c++"));
        assert!(!map.has_ascii_key("plain"));
        assert!(!map.has_ascii_key(""));
        assert_eq!(map.apply("C# c++"), "C sharp  c plus plus ");
    }

    #[test]
    fn full_builtin_registry_compiles() {
        let map = ActiveMap::build(&Registry::builtin(), "de").unwrap();
        assert_eq!(map.get("ö"), Some("oe"));
        assert_eq!(map.apply("ΦΞΠΏΣ"), "F3PWS");
    }
}
