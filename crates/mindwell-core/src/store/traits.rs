//! Record store trait definition.
//!
//! The `RecordStore` trait defines the interface that all persistence
//! backends must implement. This abstraction lets the services run
//! against SQLite, memory, or any future backend without changing the
//! core logic, and keeps the store an explicitly constructed
//! collaborator rather than an ambient global.

use crate::error::Result;
use crate::store::types::{JournalEntry, MoodEntry};

/// Persistence interface for journal and mood records.
///
/// All implementations must ensure:
/// - Append-only semantics: no update or delete operation exists
/// - Ids and timestamps are assigned by the store at insert time
/// - User-scoped queries return records in ascending `created_at`
///   order (insertion order for same-timestamp records)
/// - Reads racing with inserts observe a consistent prefix of
///   completed inserts, never a partially written record
///
/// Backend failures (timeouts, lock contention, I/O) surface as
/// `MindwellError::StoreUnavailable`; the caller decides whether to
/// retry.
pub trait RecordStore: Send + Sync {
    /// Persist a new journal entry for `user_id`.
    ///
    /// The ciphertext is stored opaquely; the store never inspects or
    /// transforms it.
    fn insert_journal(&self, user_id: &str, ciphertext: &str) -> Result<JournalEntry>;

    /// All journal entries for `user_id`, ascending by `created_at`.
    ///
    /// Returns an empty vec when the user has no entries.
    fn journals_for_user(&self, user_id: &str) -> Result<Vec<JournalEntry>>;

    /// Persist a new mood sample for `user_id`.
    ///
    /// Range validation happens in the mood service before this call;
    /// the store treats the value as opaque.
    fn insert_mood(&self, user_id: &str, mood: i32) -> Result<MoodEntry>;

    /// All mood samples for `user_id`, ascending by `created_at`.
    ///
    /// Returns an empty vec when the user has no samples.
    fn moods_for_user(&self, user_id: &str) -> Result<Vec<MoodEntry>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // The trait contract itself is exercised against each backend in
    // its own module; this only pins down object safety and bounds.

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn_store(_store: &dyn RecordStore) {}
        fn _accepts_shared_store<T: RecordStore>(_store: std::sync::Arc<T>) {}
    }
}
