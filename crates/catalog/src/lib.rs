mod context;
mod flows;
mod stats;
mod symbols;

pub use context::{ContextRule, CONTEXT_RULES};
pub use flows::{FlowPattern, FLOW_SEPARATOR, FLOW_PATTERNS};
pub use stats::{catalog_stats, CatalogStats, CategoryCount};
pub use symbols::{
    lookup, meaning_for_icon, meaning_for_icon_fragment, symbol_entries, SymbolDef,
};
