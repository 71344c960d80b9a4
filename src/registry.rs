//! Mapping tables and the ordered registry they live in.
//!
//! A [`MappingTable`] maps a source character (or a short fixed sequence) to
//! its replacement. The [`Registry`] keeps tables in insertion order; when
//! flattened, later tables win for duplicate keys.
use crate::lang::{Lang, all_langs};
use std::borrow::Cow;

/// Source sequence → replacement, insertion ordered.
///
/// Built-in tables borrow `'static` data, runtime tables own their strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_static(map: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            entries: map
                .iter()
                .map(|&(from, to)| (Cow::Borrowed(from), Cow::Borrowed(to)))
                .collect(),
        }
    }

    /// Insert or overwrite `from`. An overwritten key keeps its position.
    /// Empty keys are ignored, they would match everywhere.
    pub fn insert(
        &mut self,
        from: impl Into<Cow<'static, str>>,
        to: impl Into<Cow<'static, str>>,
    ) {
        let from = from.into();
        if from.is_empty() {
            return;
        }
        let to = to.into();
        match self.entries.iter_mut().find(|(k, _)| *k == from) {
            Some(slot) => slot.1 = to,
            None => self.entries.push((from, to)),
        }
    }

    #[inline]
    pub fn get(&self, from: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == from)
            .map(|(_, v)| v.as_ref())
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v.as_ref()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MappingTable
where
    K: Into<Cow<'static, str>>,
    V: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = MappingTable::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

/// One registry slot. Ad-hoc tables have no name.
#[derive(Debug, Clone)]
struct Slot {
    name: Option<Cow<'static, str>>,
    table: MappingTable,
}

/// Ordered collection of mapping tables.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    slots: Vec<Slot>,
}

impl Registry {
    /// A registry holding no tables at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in language and category tables in their canonical order.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for lang in all_langs() {
            registry.register_lang(*lang);
        }
        registry
    }

    fn register_lang(&mut self, lang: Lang) {
        if let Some(entry) = lang.entry() {
            self.register_table(lang.code(), MappingTable::from_static(entry.map));
        }
    }

    /// Insert `table` under `name` at the end of the registry. A table
    /// already registered under that name is removed first.
    pub fn register_table(&mut self, name: impl Into<Cow<'static, str>>, table: MappingTable) {
        let name = name.into();
        self.slots
            .retain(|slot| slot.name.as_deref() != Some(name.as_ref()));
        self.slots.push(Slot {
            name: Some(name),
            table,
        });
    }

    /// Append an unnamed table. It takes part in flattening at the position
    /// it was added and can never be re-prioritized.
    pub fn add_ad_hoc_table(&mut self, table: MappingTable) {
        self.slots.push(Slot { name: None, table });
    }

    /// The table registered under `name`.
    pub fn table(&self, name: &str) -> Option<&MappingTable> {
        self.slots
            .iter()
            .find(|slot| slot.name.as_deref() == Some(name))
            .map(|slot| &slot.table)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.table(name).is_some()
    }

    /// Names of the registered tables in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|slot| slot.name.as_deref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate tables in effective priority order for `lang`: registry
    /// order, except that the table named `lang` (if any) comes last. An
    /// unknown `lang` leaves the order untouched.
    pub fn prioritized<'a>(&'a self, lang: &'a str) -> impl Iterator<Item = &'a MappingTable> {
        let is_lang = move |slot: &&Slot| !lang.is_empty() && slot.name.as_deref() == Some(lang);
        self.slots
            .iter()
            .filter(move |slot| !is_lang(slot))
            .chain(self.slots.iter().filter(is_lang))
            .map(|slot| &slot.table)
    }
}
