//! Record store abstraction and backends.
//!
//! The store is the only shared mutable resource in the system. It is
//! an abstract keyed collection of two record kinds, journal entries
//! and mood entries, scoped by user id and append-only: records are
//! created once and never updated or deleted.

pub mod memory;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::RecordStore;
pub use types::{JournalEntry, MoodEntry};
