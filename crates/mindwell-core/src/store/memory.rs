//! In-memory record store backend.
//!
//! Keeps both record kinds in insertion-ordered vectors behind
//! mutexes. Used by the test suites and available to embedders that
//! do not need durability.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::error::{MindwellError, Result};
use crate::store::traits::RecordStore;
use crate::store::types::{JournalEntry, MoodEntry};

/// Non-durable record store holding everything in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    journals: Mutex<Vec<JournalEntry>>,
    moods: Mutex<Vec<MoodEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock<'a, T>(&self, mutex: &'a Mutex<Vec<T>>) -> Result<MutexGuard<'a, Vec<T>>> {
        mutex
            .lock()
            .map_err(|_| MindwellError::StoreUnavailable("Memory store poisoned".to_string()))
    }
}

impl RecordStore for MemoryStore {
    fn insert_journal(&self, user_id: &str, ciphertext: &str) -> Result<JournalEntry> {
        let mut journals = self.lock(&self.journals)?;
        // Timestamp under the lock so vec order stays ascending.
        let entry = JournalEntry {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            ciphertext: ciphertext.to_string(),
            created_at: Utc::now(),
        };
        journals.push(entry.clone());
        Ok(entry)
    }

    fn journals_for_user(&self, user_id: &str) -> Result<Vec<JournalEntry>> {
        // Insertion order doubles as ascending created_at order.
        Ok(self
            .lock(&self.journals)?
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect())
    }

    fn insert_mood(&self, user_id: &str, mood: i32) -> Result<MoodEntry> {
        let mut moods = self.lock(&self.moods)?;
        let entry = MoodEntry {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            mood,
            created_at: Utc::now(),
        };
        moods.push(entry.clone());
        Ok(entry)
    }

    fn moods_for_user(&self, user_id: &str) -> Result<Vec<MoodEntry>> {
        Ok(self
            .lock(&self.moods)?
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assigns_id_and_timestamp() {
        let store = MemoryStore::new();

        let entry = store.insert_journal("u1", "cipher-a").unwrap();
        assert!(!entry.id.is_nil());
        assert_eq!(entry.user_id, "u1");
        assert_eq!(entry.ciphertext, "cipher-a");
    }

    #[test]
    fn test_journals_ascending_order() {
        let store = MemoryStore::new();

        let first = store.insert_journal("u1", "cipher-a").unwrap();
        let second = store.insert_journal("u1", "cipher-b").unwrap();

        let entries = store.journals_for_user("u1").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, first.id);
        assert_eq!(entries[1].id, second.id);
        assert!(entries[0].created_at <= entries[1].created_at);
    }

    #[test]
    fn test_user_isolation() {
        let store = MemoryStore::new();

        store.insert_journal("a", "cipher-a").unwrap();
        store.insert_mood("a", 5).unwrap();

        assert!(store.journals_for_user("b").unwrap().is_empty());
        assert!(store.moods_for_user("b").unwrap().is_empty());
    }

    #[test]
    fn test_empty_history_is_ok() {
        let store = MemoryStore::new();
        assert!(store.moods_for_user("nobody").unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_inserts() {
        use std::sync::Arc;

        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                for mood in 1..=10 {
                    store.insert_mood("u1", mood).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let moods = store.moods_for_user("u1").unwrap();
        assert_eq!(moods.len(), 80);
        assert!(moods.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }
}
