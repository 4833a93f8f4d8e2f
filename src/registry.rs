//! Accumulator for classified symbols across all input documents.

use std::collections::BTreeSet;

/// Marker substituted for `~` in destructor names so symbols sort and match
/// consistently in version-script text.
pub const DESTRUCTOR_MARKER: char = '?';

/// The two disjoint-by-intent symbol sets: published and suppressed.
///
/// Insertion is idempotent; a symbol recorded twice with the same disposition
/// is stored once. Conflicting dispositions across documents leave the symbol
/// in both sets; rendering consults only the published set and the conflict
/// is surfaced through [`SymbolRegistry::conflicts`] rather than resolved.
#[derive(Debug, Default)]
pub struct SymbolRegistry {
    published: BTreeSet<String>,
    suppressed: BTreeSet<String>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one symbol with its publish decision, normalizing destructor
    /// names on the way in.
    pub fn record(&mut self, symbol: &str, publish: bool) {
        let symbol = symbol.replace('~', &DESTRUCTOR_MARKER.to_string());
        if publish {
            self.published.insert(symbol);
        } else {
            self.suppressed.insert(symbol);
        }
    }

    /// Published symbols in lexicographic order.
    pub fn published_symbols(&self) -> impl Iterator<Item = &str> {
        self.published.iter().map(String::as_str)
    }

    /// Suppressed symbols in lexicographic order.
    pub fn suppressed_symbols(&self) -> impl Iterator<Item = &str> {
        self.suppressed.iter().map(String::as_str)
    }

    /// Symbols recorded as published by one document and suppressed by
    /// another. Kept for diagnostics; rendering ignores the suppressed entry.
    pub fn conflicts(&self) -> impl Iterator<Item = &str> {
        self.published
            .intersection(&self.suppressed)
            .map(String::as_str)
    }

    pub fn published_len(&self) -> usize {
        self.published.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
