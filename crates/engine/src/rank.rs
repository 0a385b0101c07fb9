use std::cmp::Ordering;
use std::collections::HashSet;

use symbolect_protocol::SymbolEntry;

/// Deduplicate by icon identity (first occurrence wins, in stage order:
/// direct, pattern, contextual), then stable-sort descending by confidence
/// so ties preserve dedup order.
pub(crate) fn dedup_and_rank(symbols: Vec<SymbolEntry>) -> Vec<SymbolEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique: Vec<SymbolEntry> = symbols
        .into_iter()
        .filter(|symbol| seen.insert(symbol.icon.clone()))
        .collect();

    unique.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    unique
}
