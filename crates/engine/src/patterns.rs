use symbolect_catalog::FLOW_PATTERNS;
use symbolect_protocol::{Category, SymbolEntry, SymbolSource};

use crate::detect::StageOutput;
use crate::jitter::JitterSource;

/// Base confidence of a matched flow, before jitter.
const FLOW_CONFIDENCE: f32 = 0.85;

/// Stage constant contributed to the pre-dedup weight sum per match.
const FLOW_WEIGHT: f32 = 0.8;

/// Test every flow pattern against the raw (untokenized) input. Each match
/// contributes one composite flow symbol; there is no early exit, so
/// several patterns may fire on the same input.
pub(crate) fn detect_flows(text: &str, jitter: &dyn JitterSource) -> StageOutput {
    let mut out = StageOutput::default();

    for pattern in FLOW_PATTERNS.iter() {
        if !pattern.matcher.is_match(text) {
            continue;
        }
        out.symbols.push(SymbolEntry {
            icon: pattern.rendered_flow(),
            meaning: pattern.description.to_string(),
            category: Category::Flow,
            confidence: (FLOW_CONFIDENCE + jitter.jitter()).min(1.0),
            source: SymbolSource::Pattern,
            is_flow: true,
        });
        out.weight_sum += FLOW_WEIGHT;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jitter::NoJitter;
    use pretty_assertions::assert_eq;

    #[test]
    fn authentication_input_matches_auth_flow() {
        let out = detect_flows("let users sign in with a password", &NoJitter);
        assert!(out
            .symbols
            .iter()
            .any(|s| s.meaning == "Authentication Flow"));
        assert!(out.symbols.iter().all(|s| s.is_flow));
        assert!(out.symbols.iter().all(|s| s.category == Category::Flow));
    }

    #[test]
    fn multiple_patterns_fire_independently() {
        let out = detect_flows("login page with search box", &NoJitter);
        let meanings: Vec<&str> = out.symbols.iter().map(|s| s.meaning.as_str()).collect();
        assert!(meanings.contains(&"Authentication Flow"));
        assert!(meanings.contains(&"Search & Retrieval Flow"));
    }

    #[test]
    fn weight_sum_uses_stage_constant_not_confidence() {
        let out = detect_flows("search for documents", &NoJitter);
        // Matches search and upload/file/document patterns.
        assert_eq!(out.symbols.len(), 2);
        assert!((out.weight_sum - 2.0 * FLOW_WEIGHT).abs() < 1e-6);
        assert!(out.symbols.iter().all(|s| s.confidence == FLOW_CONFIDENCE));
    }

    #[test]
    fn no_match_means_empty_output() {
        let out = detect_flows("hello there", &NoJitter);
        assert!(out.symbols.is_empty());
        assert_eq!(out.weight_sum, 0.0);
    }
}
