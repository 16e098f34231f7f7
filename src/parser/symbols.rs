//! Declaration tables for accounts and payees.

use indexmap::IndexMap;
use serde::Serialize;
use text_size::TextRange;

/// Name → span of the first declaration, in declaration order.
///
/// The first writer wins: [`add`](SymbolTable::add) is a no-op for a name
/// that is already present, so lookups always return where a name was first
/// seen. Keys borrow from the source buffer.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SymbolTable<'src> {
    entries: IndexMap<&'src str, TextRange>,
}

impl<'src> SymbolTable<'src> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` at `span` unless it is already declared.
    pub fn add(&mut self, name: &'src str, span: TextRange) {
        self.entries.entry(name).or_insert(span);
    }

    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Span of the first declaration of `name`.
    pub fn get(&self, name: &str) -> Option<TextRange> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'src str, TextRange)> + '_ {
        self.entries.iter().map(|(name, span)| (*name, *span))
    }

    pub fn names(&self) -> impl Iterator<Item = &'src str> + '_ {
        self.entries.keys().copied()
    }
}
