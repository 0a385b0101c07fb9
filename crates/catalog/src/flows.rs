use once_cell::sync::Lazy;
use regex::Regex;

/// Arrow separator between steps of a rendered flow.
pub const FLOW_SEPARATOR: &str = "→";

/// A recognizable multi-step concept flow: a case-insensitive trigger
/// matched against the raw input, and the icon sequence it compresses to.
#[derive(Debug, Clone)]
pub struct FlowPattern {
    pub matcher: Regex,
    pub steps: &'static [&'static str],
    pub description: &'static str,
}

impl FlowPattern {
    fn new(pattern: &str, steps: &'static [&'static str], description: &'static str) -> Self {
        // Catalog regexes are static literals; a failure here is a
        // programming error caught by the catalog tests.
        let matcher = Regex::new(pattern).unwrap_or_else(|err| {
            panic!("invalid flow pattern {pattern:?}: {err}");
        });
        Self {
            matcher,
            steps,
            description,
        }
    }

    /// The composite icon for this flow: steps joined by [`FLOW_SEPARATOR`].
    #[must_use]
    pub fn rendered_flow(&self) -> String {
        self.steps.join(FLOW_SEPARATOR)
    }
}

/// Flow pattern catalog, tested in declaration order with no early exit.
pub static FLOW_PATTERNS: Lazy<Vec<FlowPattern>> = Lazy::new(|| {
    vec![
        FlowPattern::new(
            r"(?i)login|auth|sign.?in",
            &["🔐", "👤", "✅"],
            "Authentication Flow",
        ),
        FlowPattern::new(
            r"(?i)form|submit|save",
            &["📝", "💾", "✅"],
            "Form Submission Flow",
        ),
        FlowPattern::new(
            r"(?i)search|find|query",
            &["🔍", "🗄️", "📊"],
            "Search & Retrieval Flow",
        ),
        FlowPattern::new(
            r"(?i)crud|create|read|update|delete",
            &["➕", "👁️", "🔄", "🗑️"],
            "CRUD Operations Flow",
        ),
        FlowPattern::new(
            r"(?i)payment|checkout|purchase",
            &["💳", "🛒", "✅"],
            "Payment Flow",
        ),
        FlowPattern::new(
            r"(?i)upload|file|document",
            &["📤", "📁", "💾"],
            "File Upload Flow",
        ),
        FlowPattern::new(
            r"(?i)real.?time|live|streaming|websocket",
            &["⚡", "🔄", "📡"],
            "Real-time Communication Flow",
        ),
        FlowPattern::new(
            r"(?i)user.?management|admin|permissions",
            &["👥", "⚙️", "🛡️"],
            "User Management Flow",
        ),
        FlowPattern::new(
            r"(?i)notification|alert|email|message",
            &["🔔", "📧", "💬"],
            "Notification Flow",
        ),
        FlowPattern::new(
            r"(?i)api|endpoint|service|microservice",
            &["🔌", "⚙️", "🌐"],
            "API Service Flow",
        ),
    ]
});
