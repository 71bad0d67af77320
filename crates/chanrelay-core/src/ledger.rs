use std::collections::HashMap;

/// Occurrence counts per extracted text since the last clear.
#[derive(Debug, Default)]
pub struct DedupLedger {
    counts: HashMap<String, u64>,
}

impl DedupLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `text` and return the new total (1 when unseen).
    ///
    /// Equality is exact; no normalization happens here.
    pub fn record(&mut self, text: &str) -> u64 {
        let count = self.counts.entry(text.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn count(&self, text: &str) -> u64 {
        self.counts.get(text).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

/// Every formatted notification produced so far, oldest first.
#[derive(Debug, Default)]
pub struct ProcessedLog {
    entries: Vec<String>,
}

impl ProcessedLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, formatted: String) {
        self.entries.push(formatted);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nth_record_returns_n() {
        let mut ledger = DedupLedger::new();
        for n in 1..=4 {
            assert_eq!(ledger.record("Ca: hi"), n);
        }
        assert_eq!(ledger.record("Ca: other"), 1);
        assert_eq!(ledger.count("Ca: hi"), 4);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn record_restarts_at_one_after_clear() {
        let mut ledger = DedupLedger::new();
        ledger.record("Ca: hi");
        ledger.record("Ca: hi");
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger.count("Ca: hi"), 0);
        assert_eq!(ledger.record("Ca: hi"), 1);
    }

    #[test]
    fn record_is_whitespace_sensitive() {
        let mut ledger = DedupLedger::new();
        assert_eq!(ledger.record("Ca: hi"), 1);
        assert_eq!(ledger.record("Ca: hi "), 1);
        assert_eq!(ledger.record("Ca:  hi"), 1);
    }

    #[test]
    fn processed_log_keeps_insertion_order() {
        let mut log = ProcessedLog::new();
        log.push("b".to_string());
        log.push("a".to_string());
        log.push("b".to_string());
        assert_eq!(log.entries(), ["b", "a", "b"]);
        assert_eq!(log.len(), 3);

        log.clear();
        assert!(log.is_empty());
    }
}
