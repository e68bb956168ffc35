//! Recent-query history and its persistence

use std::cell::RefCell;

use gloo_storage::{errors::StorageError, LocalStorage, Storage};

/// Most-recent-first list of distinct queries, capped at `limit` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: Vec<String>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Build from possibly untrusted persisted data. Blank entries and
    /// duplicates are dropped, first occurrence wins, then the list is capped.
    pub fn from_entries(entries: impl IntoIterator<Item = String>, limit: usize) -> Self {
        let mut history = Self::new(limit);
        for entry in entries {
            let entry = entry.trim();
            if entry.is_empty() || history.entries.iter().any(|e| e == entry) {
                continue;
            }
            if history.entries.len() == limit {
                break;
            }
            history.entries.push(entry.to_string());
        }
        history
    }

    /// Move `query` to the front, inserting it if new. Returns false for blank input.
    pub fn record(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() || self.limit == 0 {
            return false;
        }
        self.entries.retain(|e| e != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(self.limit);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
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

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// Where the history lives between page loads
pub trait HistoryStore {
    /// Load persisted entries; missing or unreadable data yields an empty list
    fn load(&self) -> Vec<String>;
    fn save(&self, entries: &[String]);
    fn remove(&self);
}

/// Browser localStorage under a fixed key, JSON-encoded array of strings
#[derive(Debug, Clone)]
pub struct LocalHistoryStore {
    key: String,
}

impl LocalHistoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl HistoryStore for LocalHistoryStore {
    fn load(&self) -> Vec<String> {
        match LocalStorage::get::<Vec<String>>(&self.key) {
            Ok(entries) => entries,
            Err(StorageError::KeyNotFound(_)) => Vec::new(),
            Err(e) => {
                tracing::warn!("Discarding unreadable query history: {}", e);
                Vec::new()
            }
        }
    }

    fn save(&self, entries: &[String]) {
        if let Err(e) = LocalStorage::set(&self.key, entries) {
            tracing::warn!("Failed to persist query history: {}", e);
        }
    }

    fn remove(&self) {
        LocalStorage::delete(&self.key);
    }
}

/// In-memory store, for tests and for hosts without localStorage
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    entries: RefCell<Option<Vec<String>>>,
}

impl MemoryHistoryStore {
    pub fn with_entries(entries: Vec<String>) -> Self {
        Self {
            entries: RefCell::new(Some(entries)),
        }
    }

    /// Whether anything is currently stored
    pub fn is_stored(&self) -> bool {
        self.entries.borrow().is_some()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> Vec<String> {
        self.entries.borrow().clone().unwrap_or_default()
    }

    fn save(&self, entries: &[String]) {
        *self.entries.borrow_mut() = Some(entries.to_vec());
    }

    fn remove(&self) {
        *self.entries.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_moves_existing_to_front() {
        let mut history = History::new(20);
        history.record("food pantry");
        history.record("shelter");
        history.record("food pantry");

        assert_eq!(history.entries(), ["food pantry", "shelter"]);
    }

    #[test]
    fn test_record_caps_at_limit() {
        let mut history = History::new(20);
        for i in 0..25 {
            history.record(&format!("query {}", i));
        }

        assert_eq!(history.len(), 20);
        assert_eq!(history.entries()[0], "query 24");
        assert_eq!(history.entries()[19], "query 5");
    }

    #[test]
    fn test_record_ignores_blank() {
        let mut history = History::new(20);
        assert!(!history.record("   "));
        assert!(history.is_empty());
    }

    #[test]
    fn test_from_entries_sanitizes() {
        let raw = vec![
            "a".to_string(),
            "".to_string(),
            "b".to_string(),
            "a".to_string(),
            "c".to_string(),
        ];
        let history = History::from_entries(raw, 2);
        assert_eq!(history.entries(), ["a", "b"]);
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryHistoryStore::default();
        assert!(store.load().is_empty());

        store.save(&["x".to_string()]);
        assert!(store.is_stored());
        assert_eq!(store.load(), vec!["x".to_string()]);

        store.remove();
        assert!(!store.is_stored());
        assert!(store.load().is_empty());
    }
}
