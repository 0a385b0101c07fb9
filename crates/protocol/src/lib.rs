use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Maximum number of input characters preserved in a history entry preview.
pub const HISTORY_PREVIEW_CHARS: usize = 50;

/// Closed set of semantic categories recognized by the symbol catalog.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Security,
    Ui,
    Data,
    Operation,
    System,
    Validation,
    Communication,
    Flow,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Security => "security",
            Category::Ui => "ui",
            Category::Data => "data",
            Category::Operation => "operation",
            Category::System => "system",
            Category::Validation => "validation",
            Category::Communication => "communication",
            Category::Flow => "flow",
        }
    }

    /// Every category, in catalog order. Used for statistics reporting.
    #[must_use]
    pub const fn all() -> [Category; 8] {
        [
            Category::Security,
            Category::Ui,
            Category::Data,
            Category::Operation,
            Category::System,
            Category::Validation,
            Category::Communication,
            Category::Flow,
        ]
    }
}

/// Which pipeline stage produced a symbol.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SymbolSource {
    Direct,
    Pattern,
    Contextual,
}

/// A single detected symbol. Immutable once created by a stage.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SymbolEntry {
    pub icon: String,
    pub meaning: String,
    pub category: Category,
    pub confidence: f32,
    pub source: SymbolSource,
    pub is_flow: bool,
}

/// Compression metrics derived from a ranked symbol set.
///
/// `compression_ratio` is signed: a compressed form longer than the input
/// yields a negative ratio. Lengths count Unicode scalar values.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompressionStats {
    pub original_length: usize,
    pub compressed_length: usize,
    pub compression_ratio: i32,
    pub symbol_count: usize,
    pub category_count: usize,
}

/// Final pipeline output handed to the caller.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PipelineResult {
    pub compressed: String,
    pub symbols: Vec<SymbolEntry>,
    pub confidence: f32,
    pub stats: CompressionStats,
    /// Subsequence of `symbols` where `is_flow` is set; routing hint for
    /// downstream workflow orchestration.
    pub flows: Vec<SymbolEntry>,
}

impl PipelineResult {
    /// Sentinel returned for too-short input and for stage failures.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            compressed: String::new(),
            symbols: Vec::new(),
            confidence: 0.0,
            stats: CompressionStats::default(),
            flows: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// One entry of the bounded compression history (most recent first).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Input preview, truncated to [`HISTORY_PREVIEW_CHARS`] characters.
    pub input: String,
    pub symbols: Vec<SymbolEntry>,
    pub compressed: String,
    pub timestamp: SystemTime,
    pub confidence: f32,
}

/// Truncate an input string for history display: at most
/// [`HISTORY_PREVIEW_CHARS`] characters, with an ellipsis marker when
/// anything was cut. Counts characters, not bytes, so multi-byte input
/// never splits mid-scalar.
#[must_use]
pub fn truncate_preview(input: &str) -> String {
    let mut chars = input.chars();
    let preview: String = chars.by_ref().take(HISTORY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{preview}...")
    } else {
        preview
    }
}
