//! Export service.
//!
//! Assembles one combined document per user from the journal and mood
//! stores. No secret is requested or used: exported journal entries
//! stay in their at-rest ciphertext form, because the server never
//! holds the secret. Callers decrypt client-side after export. This is
//! a deliberate confidentiality property, not an oversight.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::store::{JournalEntry, MoodEntry, RecordStore};

/// One user's complete data: ciphertext journals plus mood history.
#[derive(Debug, Clone, Serialize)]
pub struct UserExport {
    pub journals: Vec<JournalEntry>,
    pub moods: Vec<MoodEntry>,
}

/// Service assembling per-user export documents.
pub struct ExportService<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> ExportService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All of `user_id`'s records as a single document. Reads only; no
    /// filtering or redaction beyond the ciphertext-only journal
    /// policy.
    pub fn export_user(&self, user_id: &str) -> Result<UserExport> {
        let journals = self.store.journals_for_user(user_id)?;
        let moods = self.store.moods_for_user(user_id)?;

        debug!(
            user_id,
            journals = journals.len(),
            moods = moods.len(),
            "user data exported"
        );
        Ok(UserExport { journals, moods })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::JournalService;
    use crate::mood::MoodService;
    use crate::store::MemoryStore;

    #[test]
    fn test_export_combines_both_kinds() {
        let store = Arc::new(MemoryStore::new());
        let journal = JournalService::new(Arc::clone(&store));
        let moods = MoodService::new(Arc::clone(&store));
        let export = ExportService::new(Arc::clone(&store));

        journal.create_entry("u1", "hello", "k1").unwrap();
        moods.save_mood("u1", 7).unwrap();

        let doc = export.export_user("u1").unwrap();
        assert_eq!(doc.journals.len(), 1);
        assert_eq!(doc.moods.len(), 1);
        assert_eq!(doc.moods[0].mood, 7);
    }

    #[test]
    fn test_journals_stay_encrypted() {
        let store = Arc::new(MemoryStore::new());
        let journal = JournalService::new(Arc::clone(&store));
        let export = ExportService::new(Arc::clone(&store));

        journal.create_entry("u1", "very private thought", "k1").unwrap();

        let doc = export.export_user("u1").unwrap();
        assert_ne!(doc.journals[0].ciphertext, "very private thought");
        assert!(!doc.journals[0].ciphertext.contains("private"));
    }

    #[test]
    fn test_export_scoped_to_user() {
        let store = Arc::new(MemoryStore::new());
        let journal = JournalService::new(Arc::clone(&store));
        let export = ExportService::new(Arc::clone(&store));

        journal.create_entry("a", "hello", "k1").unwrap();

        let doc = export.export_user("b").unwrap();
        assert!(doc.journals.is_empty());
        assert!(doc.moods.is_empty());
    }

    #[test]
    fn test_export_serializes_to_json() {
        let store = Arc::new(MemoryStore::new());
        let moods = MoodService::new(Arc::clone(&store));
        let export = ExportService::new(Arc::clone(&store));

        moods.save_mood("u1", 4).unwrap();

        let doc = export.export_user("u1").unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["journals"].as_array().unwrap().is_empty());
        assert_eq!(json["moods"][0]["mood"], 4);
    }
}
