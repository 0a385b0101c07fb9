use symbolect_protocol::{CompressionStats, SymbolEntry};

/// Separator between icons in the compressed representation.
pub const ICON_SEPARATOR: char = '⨹';

/// Join the ranked icons into the compressed representation.
pub(crate) fn compressed_representation(symbols: &[SymbolEntry]) -> String {
    let icons: Vec<&str> = symbols.iter().map(|s| s.icon.as_str()).collect();
    icons.join(&ICON_SEPARATOR.to_string())
}

/// Compute compression metrics for a ranked symbol set.
///
/// Lengths count Unicode scalar values; the separator characters count
/// toward the compressed length. The ratio is a floored percentage and may
/// go negative when the compressed form is longer than the input.
pub(crate) fn compression_stats(
    original: &str,
    compressed: &str,
    symbols: &[SymbolEntry],
) -> CompressionStats {
    if symbols.is_empty() {
        return CompressionStats::default();
    }

    let original_length = original.chars().count();
    let compressed_length = compressed.chars().count();
    let compression_ratio =
        ((1.0 - compressed_length as f64 / original_length as f64) * 100.0).floor() as i32;

    let mut categories: Vec<_> = symbols.iter().map(|s| s.category).collect();
    categories.sort_by_key(|c| c.as_str());
    categories.dedup();

    CompressionStats {
        original_length,
        compressed_length,
        compression_ratio,
        symbol_count: symbols.len(),
        category_count: categories.len(),
    }
}

/// Aggregate confidence: pre-dedup weight sum over post-dedup count,
/// capped at 1.0. Returns 0 for an empty symbol set — the divide is
/// explicitly guarded.
pub(crate) fn aggregate_confidence(weight_sum: f32, symbol_count: usize) -> f32 {
    if symbol_count == 0 {
        return 0.0;
    }
    (weight_sum / symbol_count as f32).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use symbolect_protocol::{Category, SymbolSource};

    fn entry(icon: &str, category: Category) -> SymbolEntry {
        SymbolEntry {
            icon: icon.to_string(),
            meaning: icon.to_string(),
            category,
            confidence: 0.8,
            source: SymbolSource::Direct,
            is_flow: false,
        }
    }

    #[test]
    fn representation_joins_icons_with_separator() {
        let symbols = vec![entry("🔐", Category::Security), entry("📝", Category::Ui)];
        assert_eq!(compressed_representation(&symbols), "🔐⨹📝");
    }

    #[test]
    fn separator_counts_toward_compressed_length() {
        let symbols = vec![entry("🔐", Category::Security), entry("📝", Category::Ui)];
        let compressed = compressed_representation(&symbols);
        let stats = compression_stats("a twenty char input!", &compressed, &symbols);
        assert_eq!(stats.compressed_length, 3);
        assert_eq!(stats.original_length, 20);
        // floor((1 - 3/20) * 100) = 85
        assert_eq!(stats.compression_ratio, 85);
    }

    #[test]
    fn ratio_goes_negative_when_compressed_is_longer() {
        let symbols = vec![entry("➕→👁️→🔄→🗑️", Category::Flow)];
        let compressed = compressed_representation(&symbols);
        let stats = compression_stats("crud app", &compressed, &symbols);
        assert!(stats.compressed_length > stats.original_length);
        assert!(stats.compression_ratio < 0);
    }

    #[test]
    fn category_count_is_distinct_categories() {
        let symbols = vec![
            entry("🔐", Category::Security),
            entry("🚪", Category::Security),
            entry("📝", Category::Ui),
        ];
        let stats = compression_stats("some input text", "🔐⨹🚪⨹📝", &symbols);
        assert_eq!(stats.symbol_count, 3);
        assert_eq!(stats.category_count, 2);
    }

    #[test]
    fn empty_symbols_yield_zeroed_stats() {
        let stats = compression_stats("anything at all", "", &[]);
        assert_eq!(stats, CompressionStats::default());
    }

    #[test]
    fn aggregate_confidence_caps_at_one() {
        assert_eq!(aggregate_confidence(5.0, 2), 1.0);
    }

    #[test]
    fn aggregate_confidence_guards_divide_by_zero() {
        assert_eq!(aggregate_confidence(1.5, 0), 0.0);
    }

    #[test]
    fn aggregate_confidence_divides_by_post_dedup_count() {
        // Numerator may include weights of symbols later deduplicated away.
        let confidence = aggregate_confidence(1.6, 1);
        assert_eq!(confidence, 1.0);
        let confidence = aggregate_confidence(0.7 + 0.8, 2);
        assert!((confidence - 0.75).abs() < 1e-6);
    }
}
