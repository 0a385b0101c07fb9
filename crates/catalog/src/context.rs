/// A co-occurrence rule: when every required substring appears in the
/// lowercase input, the rule contributes one composite symbol.
///
/// The table is data-only so new combinations can be added without touching
/// the enhancer's control flow. All composites are system-level concepts
/// with a fixed confidence and no jitter.
#[derive(Debug, Clone, Copy)]
pub struct ContextRule {
    pub required: &'static [&'static str],
    pub icon: &'static str,
    pub meaning: &'static str,
    pub confidence: f32,
}

pub static CONTEXT_RULES: &[ContextRule] = &[
    ContextRule {
        required: &["user", "management"],
        icon: "👥→⚙️",
        meaning: "user_management_system",
        confidence: 0.9,
    },
    ContextRule {
        required: &["real", "time"],
        icon: "⚡→🔄",
        meaning: "real_time_updates",
        confidence: 0.85,
    },
    ContextRule {
        required: &["dark", "mode"],
        icon: "🌙→🎨",
        meaning: "dark_mode_theme",
        confidence: 0.8,
    },
    ContextRule {
        required: &["file", "upload"],
        icon: "📤→📁",
        meaning: "file_upload_system",
        confidence: 0.8,
    },
    ContextRule {
        required: &["data", "visualization"],
        icon: "📊→📈",
        meaning: "data_visualization",
        confidence: 0.8,
    },
    ContextRule {
        required: &["shopping", "cart"],
        icon: "🛒→💳",
        meaning: "shopping_cart_system",
        confidence: 0.85,
    },
    ContextRule {
        required: &["two", "factor", "auth"],
        icon: "🔐→📱",
        meaning: "two_factor_authentication",
        confidence: 0.9,
    },
    ContextRule {
        required: &["machine", "learning"],
        icon: "🤖→🧠",
        meaning: "machine_learning_system",
        confidence: 0.9,
    },
];
