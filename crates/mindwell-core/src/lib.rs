//! # MindWell Core
//!
//! Core library for MindWell - an encrypted personal journal and mood
//! tracker.
//!
//! This crate provides the encrypted-record storage and retrieval
//! subsystem independent of any transport: the cipher, the record
//! store abstraction, the journal/mood/export services, and pure mood
//! analytics. HTTP routing, page rendering, and other presentation
//! concerns live outside this crate.
//!
//! ## Architecture
//!
//! - **crypto**: Text cipher (Age passphrase encryption, authenticated)
//! - **store**: Record store trait plus SQLite and in-memory backends
//! - **journal**: Encrypted journal entry service
//! - **mood**: Mood sample service with range validation
//! - **analytics**: Pure time-windowed statistics over mood histories
//! - **export**: Per-user combined export (journals stay ciphertext)
//!
//! ## Confidentiality model
//!
//! The caller supplies a secret with every journal call; the server
//! side never persists, caches, or logs it. At rest and in exports,
//! journal bodies exist only as ciphertext.

pub mod analytics;
pub mod crypto;
pub mod error;
pub mod export;
pub mod journal;
pub mod mood;
pub mod store;

pub use error::{MindwellError, Result};
pub use export::{ExportService, UserExport};
pub use journal::{DecryptedEntry, JournalService};
pub use mood::{MoodService, MOOD_MAX, MOOD_MIN};
pub use store::{JournalEntry, MemoryStore, MoodEntry, RecordStore, SqliteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
