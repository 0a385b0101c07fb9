use symbolect_catalog::{meaning_for_icon, meaning_for_icon_fragment, FLOW_SEPARATOR};

use crate::scorer::ICON_SEPARATOR;

/// Best-effort expansion of a compressed representation back into keywords.
///
/// Flow composites (anything containing the arrow separator) are rendered
/// as-is with a `Flow:` prefix; plain icons reverse-lookup the catalog,
/// exact match first and then fragment containment, the latter marked
/// `(partial)`. Lossy by design: several keywords can share an icon.
#[must_use]
pub fn decompress(compressed: &str) -> String {
    if compressed.is_empty() {
        return String::new();
    }

    compressed
        .split(ICON_SEPARATOR)
        .map(|part| {
            if part.contains(FLOW_SEPARATOR) {
                format!("Flow: {part}")
            } else if let Some(meaning) = meaning_for_icon(part) {
                meaning.to_string()
            } else if let Some(meaning) = meaning_for_icon_fragment(part) {
                format!("{meaning} (partial)")
            } else {
                format!("Unknown: {part}")
            }
        })
        .collect::<Vec<_>>()
        .join(" + ")
}
