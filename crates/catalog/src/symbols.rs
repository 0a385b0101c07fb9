use once_cell::sync::Lazy;
use std::collections::HashMap;
use symbolect_protocol::Category;

/// One catalog row: the icon emitted for a keyword, its semantic category,
/// and the base confidence weight before jitter.
#[derive(Debug, Clone, Copy)]
pub struct SymbolDef {
    pub icon: &'static str,
    pub category: Category,
    pub weight: f32,
}

const fn def(icon: &'static str, category: Category, weight: f32) -> SymbolDef {
    SymbolDef {
        icon,
        category,
        weight,
    }
}

use Category::{Communication, Data, Operation, Security, System, Ui, Validation};

/// Catalog rows in declaration order. Reverse lookups scan this slice so
/// keyword resolution for shared icons is stable across runs.
static SYMBOL_ROWS: &[(&str, SymbolDef)] = &[
    // Authentication & security
    ("authentication", def("🔐", Security, 0.9)),
    ("login", def("🚪", Security, 0.8)),
    ("password", def("🔑", Security, 0.8)),
    ("security", def("🛡️", Security, 0.9)),
    ("encryption", def("🔒", Security, 0.8)),
    ("token", def("🎫", Security, 0.7)),
    ("oauth", def("🔗🔐", Security, 0.8)),
    ("jwt", def("🎫🔐", Security, 0.8)),
    // User interface
    ("user", def("👤", Ui, 0.7)),
    ("form", def("📝", Ui, 0.8)),
    ("button", def("🔘", Ui, 0.6)),
    ("modal", def("🪟", Ui, 0.7)),
    ("dropdown", def("🔽", Ui, 0.6)),
    ("navigation", def("🧭", Ui, 0.7)),
    ("menu", def("☰", Ui, 0.6)),
    ("dashboard", def("📊", Ui, 0.8)),
    ("sidebar", def("📋", Ui, 0.6)),
    ("header", def("🏷️", Ui, 0.6)),
    ("footer", def("📄", Ui, 0.6)),
    // Data & storage
    ("database", def("🗄️", Data, 0.9)),
    ("api", def("🔌", Data, 0.8)),
    ("storage", def("💾", Data, 0.7)),
    ("cache", def("⚡", Data, 0.6)),
    ("backup", def("💿", Data, 0.7)),
    ("sync", def("🔄", Data, 0.7)),
    ("migration", def("🚚", Data, 0.8)),
    // Operations
    ("create", def("➕", Operation, 0.8)),
    ("read", def("👁️", Operation, 0.7)),
    ("update", def("🔄", Operation, 0.8)),
    ("delete", def("🗑️", Operation, 0.8)),
    ("search", def("🔍", Operation, 0.7)),
    ("filter", def("🔽", Operation, 0.6)),
    ("sort", def("📊", Operation, 0.6)),
    ("export", def("📤", Operation, 0.7)),
    ("import", def("📥", Operation, 0.7)),
    ("payment", def("💳", Operation, 0.8)),
    ("order", def("🛒", Operation, 0.7)),
    ("invoice", def("🧾", Operation, 0.7)),
    ("report", def("📈", Operation, 0.7)),
    ("analytics", def("📊", Operation, 0.8)),
    // System & architecture
    ("frontend", def("🖥️", System, 0.8)),
    ("backend", def("⚙️", System, 0.8)),
    ("server", def("🖥️", System, 0.7)),
    ("client", def("💻", System, 0.7)),
    ("microservice", def("🔗", System, 0.8)),
    ("container", def("📦", System, 0.7)),
    ("deployment", def("🚀", System, 0.8)),
    // Validation & testing
    ("validation", def("✅", Validation, 0.7)),
    ("test", def("🧪", Validation, 0.8)),
    ("error", def("❌", Validation, 0.6)),
    ("success", def("✨", Validation, 0.6)),
    ("loading", def("⏳", Validation, 0.5)),
    ("warning", def("⚠️", Validation, 0.6)),
    // Communication
    ("email", def("📧", Communication, 0.7)),
    ("notification", def("🔔", Communication, 0.7)),
    ("message", def("💬", Communication, 0.6)),
    ("chat", def("💭", Communication, 0.7)),
    ("webhook", def("🪝", Communication, 0.8)),
];

/// Keyword -> symbol index over [`SYMBOL_ROWS`]. Lowercase keywords only;
/// lookups are exact, no stemming or fuzzy matching.
static SYMBOL_CATALOG: Lazy<HashMap<&'static str, &'static SymbolDef>> =
    Lazy::new(|| SYMBOL_ROWS.iter().map(|(word, entry)| (*word, entry)).collect());

/// Exact lookup of a cleaned lowercase token.
#[must_use]
pub fn lookup(word: &str) -> Option<&'static SymbolDef> {
    SYMBOL_CATALOG.get(word).copied()
}

/// Reverse lookup used by decompression: the keyword whose icon equals the
/// given icon exactly. Several keywords share an icon (e.g. `dashboard`,
/// `sort` and `analytics` all render 📊); the first declared row wins, so
/// the answer is deterministic.
#[must_use]
pub fn meaning_for_icon(icon: &str) -> Option<&'static str> {
    SYMBOL_ROWS
        .iter()
        .find(|(_, entry)| entry.icon == icon)
        .map(|(word, _)| *word)
}

/// Fallback reverse lookup: the first declared keyword whose icon contains
/// the fragment. Catches stray pieces of multi-glyph icons.
#[must_use]
pub fn meaning_for_icon_fragment(fragment: &str) -> Option<&'static str> {
    SYMBOL_ROWS
        .iter()
        .find(|(_, entry)| entry.icon.contains(fragment))
        .map(|(word, _)| *word)
}

/// Iterate all catalog rows in declaration order. Used for statistics.
pub fn symbol_entries() -> impl Iterator<Item = (&'static str, &'static SymbolDef)> {
    SYMBOL_ROWS.iter().map(|(word, entry)| (*word, entry))
}
