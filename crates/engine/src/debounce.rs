use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use symbolect_protocol::PipelineResult;

use crate::pipeline::SymbolectEngine;

/// Default quiet period before a submission is compressed.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_secs(1);

/// Debounces pipeline invocations for interactive callers: a submission is
/// compressed only after the input has been stable for the quiet period,
/// and only if it materially changed since the previous submission. A newer
/// submission supersedes any submission still waiting.
pub struct Debouncer {
    engine: Arc<SymbolectEngine>,
    quiet_period: Duration,
    seq: AtomicU64,
    last_input: Mutex<Option<String>>,
}

impl Debouncer {
    #[must_use]
    pub fn new(engine: Arc<SymbolectEngine>, quiet_period: Duration) -> Self {
        Self {
            engine,
            quiet_period,
            seq: AtomicU64::new(0),
            last_input: Mutex::new(None),
        }
    }

    /// Submit input for debounced compression. Returns `None` when the
    /// input matches the previous submission or when a newer submission
    /// arrived during the quiet period; the caller should simply discard
    /// such stale invocations.
    pub async fn submit(&self, text: &str) -> Option<PipelineResult> {
        {
            let mut last = self
                .last_input
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if last.as_deref() == Some(text) {
                log::debug!("input unchanged; skipping compression");
                return None;
            }
            *last = Some(text.to_string());
        }

        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.quiet_period).await;

        if self.seq.load(Ordering::SeqCst) != ticket {
            log::debug!("submission superseded during quiet period");
            return None;
        }

        Some(self.engine.compress(text))
    }
}
