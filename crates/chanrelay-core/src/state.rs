use tokio::sync::Mutex;

use crate::{
    ledger::{DedupLedger, ProcessedLog},
    registry::MonitorRegistry,
};

/// Suffix appended to a relayed text that has been seen before.
pub fn duplicate_suffix(count: u64) -> String {
    format!("\n(Duplikat #{count})")
}

/// Extracted text as it is stored and sent: unchanged on first sight, with a
/// duplicate counter afterwards.
pub fn format_relayed(extracted: &str, count: u64) -> String {
    if count > 1 {
        format!("{extracted}{}", duplicate_suffix(count))
    } else {
        extracted.to_string()
    }
}

/// Dedup ledger and processed log. They are cleared together, so they share a lock.
#[derive(Debug, Default)]
pub struct MessageStore {
    pub ledger: DedupLedger,
    pub log: ProcessedLog,
}

/// Result of recording one extracted text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recorded {
    pub count: u64,
    pub formatted: String,
}

impl MessageStore {
    /// Count `extracted`, format it and append the formatted text to the log.
    pub fn record(&mut self, extracted: &str) -> Recorded {
        let count = self.ledger.record(extracted);
        let formatted = format_relayed(extracted, count);
        self.log.push(formatted.clone());
        Recorded { count, formatted }
    }

    pub fn clear(&mut self) {
        self.ledger.clear();
        self.log.clear();
    }
}

/// All process-wide relay state. Built once at startup and shared by `Arc`.
///
/// Handlers may run concurrently (one task per update), so each part sits behind
/// its own async mutex.
#[derive(Debug, Default)]
pub struct RelayState {
    pub store: Mutex<MessageStore>,
    pub registry: Mutex<MonitorRegistry>,
}

impl RelayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the processed log, oldest first.
    pub async fn processed(&self) -> Vec<String> {
        self.store.lock().await.log.entries().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_duplicates_with_counter() {
        assert_eq!(format_relayed("Ca: hi", 1), "Ca: hi");
        assert_eq!(format_relayed("Ca: hi", 2), "Ca: hi\n(Duplikat #2)");
        assert_eq!(format_relayed("Ca: hi", 11), "Ca: hi\n(Duplikat #11)");
    }

    #[test]
    fn store_records_counts_and_appends_formatted() {
        let mut store = MessageStore::default();
        assert_eq!(store.record("Ca: hi").formatted, "Ca: hi");
        let second = store.record("Ca: hi");
        assert_eq!(second.count, 2);
        assert_eq!(second.formatted, "Ca: hi\n(Duplikat #2)");
        assert_eq!(store.log.entries(), ["Ca: hi", "Ca: hi\n(Duplikat #2)"]);

        store.clear();
        assert!(store.log.is_empty());
        assert!(store.ledger.is_empty());
        assert_eq!(store.record("Ca: hi").count, 1);
    }
}
