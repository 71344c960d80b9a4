//! Pre-processing pass of the downcoder: currency amounts and standalone
//! symbols are spelled out as words before characters get mapped.
//!
//! Each table of rules is applied in order over the whole text; decimal
//! amounts come before bare amounts so `22.99 €` is never split.
use crate::registry::{MappingTable, Registry};
use lazy_static::lazy_static;
use memchr::{memchr2, memchr3};
use regex::{NoExpand, Regex};
use std::borrow::Cow;

/// The one language with its own currency grammar.
const GERMAN: &str = "de";

const COPYRIGHT: &str = " (c) ";
const REGISTERED: &str = " (r) ";
const AT: &str = " (at) ";

macro_rules! rules {
    ($( $pattern:literal => $replacement:literal ),* $(,)?) => {
        vec![ $( (Regex::new($pattern).unwrap(), $replacement) ),* ]
    };
}

lazy_static! {
    static ref CURRENCY_DE: Vec<(Regex, &'static str)> = rules![
        r"(?:\s|^)([0-9]+)[.|,]([0-9]+) *€(?:\s|$)" => " ${1} Euro ${2} Cent ",
        r"(?:\s|^)\$ *([0-9]+)[.|,]([0-9]+)(?:\s|$)" => " ${1} Dollar ${2} Cent ",
        r"(?:\s|^)£ *([0-9]+)[.|,]([0-9]+)(?:\s|$)" => " ${1} Pound ${2} Pence ",
        r"(?:\s|^)([0-9]+) *€(?:\s|$)" => " ${1} Euro ",
        r"(?:\s|^)\$ *([0-9]+)(?:\s|$)" => " ${1} Dollar ",
        r"(?:\s|^)£ *([0-9]+)(?:\s|$)" => " ${1} Pound ",
        r"(?:\s|^)¥ *([0-9]+)(?:\s|$)" => " ${1} Yen ",
    ];

    static ref CURRENCY_OTHER: Vec<(Regex, &'static str)> = rules![
        r"(?:\s|^)1[.|,]([0-9]+) *€(?:\s|$)" => " 1 Euros ${1} Cents ",
        r"(?:\s|^)([0-9]+)[.|,]([0-9]+) *€(?:\s|$)" => " ${1} Euros ${2} Cents ",
        r"(?:\s|^)\$ *1[.|,]([0-9]+)(?:\s|$)" => " 1 Dollars ${1} Cents ",
        r"(?:\s|^)\$ *([0-9]+)[.|,]([0-9]+)(?:\s|$)" => " ${1} Dollars ${2} Cents ",
        r"(?:\s|^)1[.|,]([0-9]+) *£(?:\s|$)" => " 1 Pounds ${1} Pence ",
        r"(?:\s|^)£ *([0-9]+)[.|,]([0-9]+)(?:\s|$)" => " ${1} Pounds ${2} Pence ",
        r"(?:\s|^)1 *€(?:\s|$)" => " 1 Euro ",
        r"(?:\s|^)([0-9]+) *€(?:\s|$)" => " ${1} Euros ",
        r"(?:\s|^)\$ *1(?:\s|$)" => " 1 Dollar ",
        r"(?:\s|^)\$ *([0-9]+)(?:\s|$)" => " ${1} Dollars ",
        r"(?:\s|^)£ *1(?:\s|$)" => " 1 Pound ",
        r"(?:\s|^)£ *([0-9]+)(?:\s|$)" => " ${1} Pounds ",
        r"(?:\s|^)¥ *([0-9]+)(?:\s|$)" => " ${1} Yen ",
    ];

    static ref COPYRIGHT_RE: Regex = Regex::new(r"\s*©\s*").unwrap();
    static ref REGISTERED_RE: Regex = Regex::new(r"\s*®\s*").unwrap();
    static ref AT_RE: Regex = Regex::new(r"\s*@\s*").unwrap();
    static ref AMPERSAND_RE: Regex = Regex::new(r"\s*&\s*").unwrap();
    static ref PERCENT_RE: Regex = Regex::new(r"\s*%\s*").unwrap();
    static ref EQUALS_RE: Regex = Regex::new(r"\s*=\s*").unwrap();
}

/// Run both expansion passes for `lang`.
pub fn expand<'a>(text: &'a str, lang: &str, registry: &Registry) -> Cow<'a, str> {
    let text = expand_currencies(text, lang);
    let symbols = match expand_symbols(&text, lang, registry) {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    };
    match symbols {
        Some(s) => Cow::Owned(s),
        None => text,
    }
}

/// Spell out amounts next to `€`, `$`, `£` and `¥`.
///
/// German gets singular forms only; every other language gets the
/// pluralizing rule set.
pub fn expand_currencies<'a>(text: &'a str, lang: &str) -> Cow<'a, str> {
    if !text.bytes().any(|b| b.is_ascii_digit()) || !has_currency_sign(text) {
        return Cow::Borrowed(text);
    }
    let rules = if lang == GERMAN {
        CURRENCY_DE.as_slice()
    } else {
        CURRENCY_OTHER.as_slice()
    };

    let mut current = Cow::Borrowed(text);
    for (re, replacement) in rules {
        let replaced = match re.replace_all(&current, *replacement) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = replaced {
            current = Cow::Owned(s);
        }
    }
    current
}

/// Replace `©`, `®`, `@` with bracketed words and `&`, `%`, `=` with the
/// word of `lang`'s own table. Surrounding whitespace collapses into the
/// single spaces the replacement carries.
pub fn expand_symbols<'a>(text: &'a str, lang: &str, registry: &Registry) -> Cow<'a, str> {
    let bytes = text.as_bytes();
    // © and ® both start with 0xC2.
    if memchr3(b'&', b'%', b'=', bytes).is_none() && memchr2(b'@', 0xC2, bytes).is_none() {
        return Cow::Borrowed(text);
    }

    let table = registry.table(lang);
    let ampersand = symbol_word(table, "&");
    let percent = symbol_word(table, "%");
    let equals = symbol_word(table, "=");
    let rules: [(&Regex, &str); 6] = [
        (&COPYRIGHT_RE, COPYRIGHT),
        (&REGISTERED_RE, REGISTERED),
        (&AT_RE, AT),
        (&AMPERSAND_RE, &ampersand),
        (&PERCENT_RE, &percent),
        (&EQUALS_RE, &equals),
    ];

    let mut current = Cow::Borrowed(text);
    for (re, replacement) in rules {
        let replaced = match re.replace_all(&current, NoExpand(replacement)) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = replaced {
            current = Cow::Owned(s);
        }
    }
    current
}

/// `lang`'s word for `symbol`, or the bare symbol padded with spaces.
fn symbol_word<'t>(table: Option<&'t MappingTable>, symbol: &str) -> Cow<'t, str> {
    match table.and_then(|t| t.get(symbol)) {
        Some(word) => Cow::Borrowed(word),
        None => Cow::Owned(format!(" {symbol} ")),
    }
}

fn has_currency_sign(text: &str) -> bool {
    text.contains(['€', '$', '£', '¥'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::builtin()
    }

    #[test]
    fn german_currencies() {
        assert_eq!(expand_currencies("1 €", "de"), " 1 Euro ");
        assert_eq!(expand_currencies("22.99 €", "de"), " 22 Euro 99 Cent ");
        assert_eq!(expand_currencies("kostet $ 5", "de"), "kostet 5 Dollar ");
        assert_eq!(expand_currencies("£3,50", "de"), " 3 Pound 50 Pence ");
        assert_eq!(expand_currencies("¥ 100", "de"), " 100 Yen ");
    }

    #[test]
    fn pluralized_currencies() {
        assert_eq!(expand_currencies("1 €", "en"), " 1 Euro ");
        assert_eq!(expand_currencies("5 €", "en"), " 5 Euros ");
        assert_eq!(expand_currencies("$1", "en"), " 1 Dollar ");
        assert_eq!(expand_currencies("$12", "fr"), " 12 Dollars ");
        assert_eq!(expand_currencies("22.99 €", "en"), " 22 Euros 99 Cents ");
        assert_eq!(expand_currencies("1.50 €", "en"), " 1 Euros 50 Cents ");
        assert_eq!(expand_currencies("£ 2.10", "en"), " 2 Pounds 10 Pence ");
    }

    #[test]
    fn dollar_decimals_need_the_sign() {
        assert_eq!(expand_currencies("$1.50", "en"), " 1 Dollars 50 Cents ");
        assert_eq!(expand_currencies("$ 7,25", "fr"), " 7 Dollars 25 Cents ");
        assert!(matches!(expand_currencies("total 1.50", "en"), Cow::Borrowed(_)));
    }

    #[test]
    fn currency_needs_boundaries() {
        assert_eq!(expand_currencies("a5 €", "en"), "a5 €");
        assert!(matches!(expand_currencies("no money", "en"), Cow::Borrowed(_)));
        assert!(matches!(expand_currencies("€ only", "en"), Cow::Borrowed(_)));
    }

    #[test]
    fn fixed_symbols() {
        let r = registry();
        assert_eq!(expand_symbols("a © b", "de", &r), "a (c) b");
        assert_eq!(expand_symbols("x®", "en", &r), "x (r) ");
        assert_eq!(expand_symbols("me@host", "tr", &r), "me (at) host");
    }

    #[test]
    fn language_symbol_words() {
        let r = registry();
        assert_eq!(expand_symbols("a & b", "de", &r), "a und b");
        assert_eq!(expand_symbols("a&b", "en", &r), "a and b");
        assert_eq!(expand_symbols("50%", "fr", &r), "50 Pourcentage ");
        assert_eq!(expand_symbols("1 = 1", "de", &r), "1 gleich 1");
    }

    #[test]
    fn unknown_language_keeps_symbol() {
        let r = registry();
        assert_eq!(expand_symbols("a   &b", "xx", &r), "a & b");
        assert_eq!(expand_symbols("a&b", "latin", &r), "a & b");
    }

    #[test]
    fn expand_runs_both_passes() {
        let r = registry();
        assert_eq!(expand("1 € & mehr", "de", &r), " 1 Euro und mehr");
        assert!(matches!(expand("plain", "de", &r), Cow::Borrowed(_)));
    }
}
