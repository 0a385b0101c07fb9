use symbolect_protocol::{SymbolEntry, SymbolSource};

use crate::jitter::JitterSource;

/// What a producing stage hands the orchestrator: the symbols it emitted
/// plus the sum of their base weights.
///
/// The weight sum is accumulated before deduplication on purpose: the
/// aggregate confidence divides a pre-dedup numerator by the post-dedup
/// symbol count. Observed behavior of the system being reproduced; do not
/// make the two consistent without product direction.
#[derive(Debug, Default)]
pub(crate) struct StageOutput {
    pub symbols: Vec<SymbolEntry>,
    pub weight_sum: f32,
}

impl StageOutput {
    pub(crate) fn merge(mut self, other: StageOutput) -> StageOutput {
        self.symbols.extend(other.symbols);
        self.weight_sum += other.weight_sum;
        self
    }
}

/// Tokenize the input and look each cleaned word up in the symbol catalog.
///
/// Lowercases, splits on whitespace, strips non-word characters, then does
/// an exact catalog lookup per token. Repeated keywords emit repeated
/// symbols here; deduplication happens downstream.
pub(crate) fn detect_direct(text: &str, jitter: &dyn JitterSource) -> StageOutput {
    let lowered = text.to_lowercase();
    let mut out = StageOutput::default();

    for word in lowered.split_whitespace() {
        let clean: String = word
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        if clean.is_empty() {
            continue;
        }
        let Some(def) = symbolect_catalog::lookup(&clean) else {
            continue;
        };
        out.symbols.push(SymbolEntry {
            icon: def.icon.to_string(),
            meaning: clean,
            category: def.category,
            confidence: (def.weight + jitter.jitter()).min(1.0),
            source: SymbolSource::Direct,
            is_flow: false,
        });
        out.weight_sum += def.weight;
    }

    out
}
