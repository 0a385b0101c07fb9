use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use symbolect_protocol::HistoryEntry;

/// Default capacity of the compression history.
pub const HISTORY_CAPACITY: usize = 5;

/// Bounded, most-recent-first record of successful compressions. The only
/// mutable shared state in the engine; push-and-evict happens under a
/// single lock so concurrent callers can neither lose entries nor exceed
/// capacity.
#[derive(Debug)]
pub struct CompressionHistory {
    entries: Mutex<VecDeque<HistoryEntry>>,
    capacity: usize,
}

impl CompressionHistory {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Atomic add-and-evict: push to the front, drop the oldest once full.
    pub fn push(&self, entry: HistoryEntry) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.push_front(entry);
        entries.truncate(self.capacity);
    }

    /// Current entries, most recent first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CompressionHistory {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::time::SystemTime;

    fn entry(input: &str) -> HistoryEntry {
        HistoryEntry {
            input: input.to_string(),
            symbols: Vec::new(),
            compressed: String::new(),
            timestamp: SystemTime::now(),
            confidence: 0.5,
        }
    }

    #[test]
    fn most_recent_entry_comes_first() {
        let history = CompressionHistory::default();
        history.push(entry("first"));
        history.push(entry("second"));
        let entries = history.snapshot();
        assert_eq!(entries[0].input, "second");
        assert_eq!(entries[1].input, "first");
    }

    #[test]
    fn capacity_evicts_oldest() {
        let history = CompressionHistory::default();
        for i in 0..6 {
            history.push(entry(&format!("input {i}")));
        }
        let entries = history.snapshot();
        assert_eq!(entries.len(), HISTORY_CAPACITY);
        assert_eq!(entries[0].input, "input 5");
        assert!(entries.iter().all(|e| e.input != "input 0"));
    }

    #[test]
    fn concurrent_pushes_never_exceed_capacity() {
        let history = Arc::new(CompressionHistory::default());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let history = Arc::clone(&history);
                std::thread::spawn(move || {
                    for j in 0..20 {
                        history.push(entry(&format!("{i}-{j}")));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("pusher thread panicked");
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let history = CompressionHistory::new(0);
        history.push(entry("ignored"));
        assert!(history.is_empty());
    }
}
