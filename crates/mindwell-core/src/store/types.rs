//! Persisted record types.
//!
//! Both record kinds are immutable once created: the store assigns the
//! id and timestamp, and no update or delete path exists anywhere in
//! the core. Each record belongs exclusively to the `user_id` that
//! created it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted journal entry.
///
/// The body is ciphertext only. Plaintext never reaches the store:
/// encryption happens in the journal service before insertion, and
/// decryption happens transiently at read time when the caller
/// supplies a secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier, assigned by the store on creation
    pub id: Uuid,

    /// Opaque owner id; not validated against any user registry
    pub user_id: String,

    /// Encrypted entry body (base64-encoded Age payload)
    pub ciphertext: String,

    /// When this entry was created, assigned by the store
    pub created_at: DateTime<Utc>,
}

/// A persisted mood sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Unique identifier, assigned by the store on creation
    pub id: Uuid,

    /// Opaque owner id; not validated against any user registry
    pub user_id: String,

    /// Mood rating, constrained to 1..=10 at creation
    pub mood: i32,

    /// When this sample was created, assigned by the store
    pub created_at: DateTime<Utc>,
}
