use symbolect_catalog::CONTEXT_RULES;
use symbolect_protocol::{Category, SymbolEntry, SymbolSource};

use crate::detect::StageOutput;

/// Apply the co-occurrence rule table over the lowercase input (substring
/// containment, not tokenized). Each rule whose required substrings are all
/// present injects one composite system symbol with a fixed confidence.
pub(crate) fn enhance_context(text: &str) -> StageOutput {
    let lowered = text.to_lowercase();
    let mut out = StageOutput::default();

    for rule in CONTEXT_RULES {
        if !rule.required.iter().all(|needle| lowered.contains(needle)) {
            continue;
        }
        out.symbols.push(SymbolEntry {
            icon: rule.icon.to_string(),
            meaning: rule.meaning.to_string(),
            category: Category::System,
            confidence: rule.confidence,
            source: SymbolSource::Contextual,
            is_flow: false,
        });
        out.weight_sum += rule.confidence;
    }

    out
}
