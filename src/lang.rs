pub mod data;

pub use data::{
    ARA, AZE, BUL, CES, CURRENCY, DAN, DEU, DEU_AT, DEU_CH, ELL, ENG, EPO, EST, FAS, FIN, FRA,
    FRA_AT, FRA_CH, HIN, HRV, KAT, LATIN, LATIN_SYMBOLS, LAV, LIT, MYA, NOR, POL, RON, RUS, SRP,
    SWE, TUR, UKR, VIE,
};

/// Identifier of a built-in mapping table: a language or a generic category
/// such as `latin` or `currency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Resolve a built-in table by its code (`"de"`, `"fr_ch"`, …).
    pub fn from_code(code: &str) -> Option<Lang> {
        data::from_code(code)
    }

    /// Static data of this table; `None` only for hand-built identifiers.
    #[inline]
    pub fn entry(&self) -> Option<&'static LangEntry> {
        data::LANG_TABLE.get(self.code)
    }
}

impl AsRef<str> for Lang {
    fn as_ref(&self) -> &str {
        self.code
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

pub const DEFAULT_LANG: Lang = DEU;

#[derive(Clone, Copy, Debug)]
pub struct LangEntry {
    pub lang: Lang,
    /// Source sequence → replacement, in declaration order.
    pub map: &'static [(&'static str, &'static str)],
    /// Words stripped by `filter` when word removal is requested.
    pub remove_words: &'static [&'static str],
}

impl LangEntry {
    /// Replacement for a single source sequence declared by this table.
    #[inline]
    pub fn lookup(&self, from: &str) -> Option<&'static str> {
        self.map.iter().find(|(k, _)| *k == from).map(|(_, v)| *v)
    }
}

/// Built-in entry for `code`, if any.
#[inline]
pub fn get_lang_entry_by_code(code: &str) -> Option<&'static LangEntry> {
    data::LANG_TABLE.get(code)
}

/// All built-in tables in registry order.
#[inline]
pub fn all_langs() -> &'static [Lang] {
    data::REGISTRY_ORDER
}
