//! Journal service.
//!
//! Turns plaintext into persisted ciphertext and back. The secret is a
//! transient input to each call: it is never persisted, cached, or
//! logged, on success or failure.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::crypto::{decrypt_text, encrypt_text};
use crate::error::{MindwellError, Result};
use crate::store::{JournalEntry, RecordStore};

/// A journal entry decrypted for the duration of a read call.
#[derive(Debug, Clone, Serialize)]
pub struct DecryptedEntry {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Service for creating and reading encrypted journal entries.
///
/// Entries are append-only: there is no update or delete operation,
/// by design.
pub struct JournalService<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> JournalService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Encrypt `plaintext` under `secret` and persist it for `user_id`.
    ///
    /// Returns the stored entry in its ciphertext form.
    ///
    /// # Errors
    ///
    /// Returns `MindwellError::InvalidInput` if any input is empty.
    pub fn create_entry(&self, user_id: &str, plaintext: &str, secret: &str) -> Result<JournalEntry> {
        validate_user_id(user_id)?;

        let ciphertext = encrypt_text(plaintext, secret)?;
        let entry = self.store.insert_journal(user_id, &ciphertext)?;

        debug!(user_id, entry_id = %entry.id, "journal entry created");
        Ok(entry)
    }

    /// All journal entries for `user_id`, decrypted with `secret`,
    /// ascending by `created_at`.
    ///
    /// Decryption is all-or-nothing: if any entry fails to decrypt the
    /// whole call fails with `MindwellError::Decryption`, so a wrong
    /// secret never yields partial or garbled output. An empty vec
    /// means the user has no entries and is not an error.
    pub fn list_entries(&self, user_id: &str, secret: &str) -> Result<Vec<DecryptedEntry>> {
        validate_user_id(user_id)?;
        if secret.trim().is_empty() {
            return Err(MindwellError::InvalidInput(
                "Secret cannot be empty".to_string(),
            ));
        }

        let stored = self.store.journals_for_user(user_id)?;

        let mut entries = Vec::with_capacity(stored.len());
        for entry in stored {
            let text = decrypt_text(&entry.ciphertext, secret)?;
            entries.push(DecryptedEntry {
                id: entry.id,
                text,
                created_at: entry.created_at,
            });
        }

        debug!(user_id, count = entries.len(), "journal entries listed");
        Ok(entries)
    }
}

fn validate_user_id(user_id: &str) -> Result<()> {
    if user_id.trim().is_empty() {
        return Err(MindwellError::InvalidInput(
            "User id cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service() -> JournalService<MemoryStore> {
        JournalService::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_create_and_list_round_trip() {
        let journal = service();

        journal.create_entry("u1", "hello", "k1").unwrap();

        let entries = journal.list_entries("u1", "k1").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "hello");
    }

    #[test]
    fn test_wrong_secret_fails_whole_call() {
        let journal = service();

        journal.create_entry("u1", "hello", "k1").unwrap();
        journal.create_entry("u1", "world", "k1").unwrap();

        let result = journal.list_entries("u1", "wrong");
        assert!(matches!(result, Err(MindwellError::Decryption(_))));
    }

    #[test]
    fn test_stored_form_is_ciphertext() {
        let store = Arc::new(MemoryStore::new());
        let journal = JournalService::new(Arc::clone(&store));

        let entry = journal.create_entry("u1", "hello", "k1").unwrap();
        assert_ne!(entry.ciphertext, "hello");

        let raw = store.journals_for_user("u1").unwrap();
        assert_ne!(raw[0].ciphertext, "hello");
    }

    #[test]
    fn test_entries_ascending_order() {
        let journal = service();

        journal.create_entry("u1", "first", "k1").unwrap();
        journal.create_entry("u1", "second", "k1").unwrap();
        journal.create_entry("u1", "third", "k1").unwrap();

        let entries = journal.list_entries("u1", "k1").unwrap();
        let texts: Vec<_> = entries.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["first", "second", "third"]);
        assert!(entries.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[test]
    fn test_user_isolation() {
        let journal = service();

        journal.create_entry("a", "private", "k1").unwrap();

        assert!(journal.list_entries("b", "k1").unwrap().is_empty());
    }

    #[test]
    fn test_empty_inputs_rejected() {
        let journal = service();

        assert!(matches!(
            journal.create_entry("", "hello", "k1"),
            Err(MindwellError::InvalidInput(_))
        ));
        assert!(matches!(
            journal.create_entry("u1", "", "k1"),
            Err(MindwellError::InvalidInput(_))
        ));
        assert!(matches!(
            journal.create_entry("u1", "hello", ""),
            Err(MindwellError::InvalidInput(_))
        ));
        assert!(matches!(
            journal.list_entries("u1", ""),
            Err(MindwellError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_history_is_not_an_error() {
        let journal = service();
        assert!(journal.list_entries("u1", "k1").unwrap().is_empty());
    }
}
