use serde::Serialize;
use symbolect_protocol::Category;

use crate::{symbol_entries, CONTEXT_RULES, FLOW_PATTERNS};

#[derive(Debug, Serialize, Clone, Copy)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// Snapshot of the static catalogs, for diagnostics and the CLI `stats`
/// subcommand.
#[derive(Debug, Serialize, Clone)]
pub struct CatalogStats {
    pub total_symbols: usize,
    pub categories: Vec<CategoryCount>,
    pub flow_patterns: usize,
    pub contextual_rules: usize,
}

#[must_use]
pub fn catalog_stats() -> CatalogStats {
    let categories = Category::all()
        .into_iter()
        .map(|category| CategoryCount {
            category,
            count: symbol_entries()
                .filter(|(_, entry)| entry.category == category)
                .count(),
        })
        .filter(|count| count.count > 0)
        .collect();

    CatalogStats {
        total_symbols: symbol_entries().count(),
        categories,
        flow_patterns: FLOW_PATTERNS.len(),
        contextual_rules: CONTEXT_RULES.len(),
    }
}
