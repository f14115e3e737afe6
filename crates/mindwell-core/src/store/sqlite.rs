//! SQLite record store backend.
//!
//! Durable backend over rusqlite. The connection is opened once at
//! process start and handed to the services as an explicit dependency;
//! there is no ambient global. The schema is append-only by
//! construction: no UPDATE or DELETE statement exists in this module.
//!
//! Journal ciphertext is stored opaquely; encryption happens in the
//! journal service, so the database file never sees plaintext entry
//! bodies.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row};
use uuid::Uuid;

use crate::error::{MindwellError, Result};
use crate::store::traits::RecordStore;
use crate::store::types::{JournalEntry, MoodEntry};

/// Default busy timeout before a contended store call fails with
/// `StoreUnavailable`.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite-backed record store.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) a store at `path` with the default busy timeout.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_timeout(path, DEFAULT_BUSY_TIMEOUT)
    }

    /// Open (or create) a store at `path` with a caller-chosen busy
    /// timeout. Calls that still cannot acquire the database after the
    /// timeout fail with `StoreUnavailable`.
    pub fn open_with_timeout(path: &Path, busy_timeout: Duration) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(busy_timeout)?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a private in-memory store. Used by tests and embedders
    /// that do not need durability.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Close the store, releasing the underlying connection.
    pub fn close(self) -> Result<()> {
        let conn = self
            .conn
            .into_inner()
            .map_err(|_| MindwellError::StoreUnavailable("SQLite connection poisoned".to_string()))?;
        conn.close()
            .map_err(|(_, e)| MindwellError::StoreUnavailable(format!("Close failed: {}", e)))
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS journal_entries (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                ciphertext TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS journal_entries_user
            ON journal_entries (user_id, created_at);

            CREATE TABLE IF NOT EXISTS mood_entries (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                mood INTEGER NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS mood_entries_user
            ON mood_entries (user_id, created_at);
            "#,
        )?;
        Ok(())
    }

    /// Lock the database connection, returning an error if the mutex
    /// is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| MindwellError::StoreUnavailable("SQLite connection poisoned".to_string()))
    }
}

fn parse_id(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| MindwellError::StoreUnavailable(format!("Invalid record id: {}", e)))
}

fn parse_created_at(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .map_err(|e| MindwellError::StoreUnavailable(format!("Invalid created_at: {}", e)))?
        .with_timezone(&Utc))
}

fn journal_from_row(row: &Row<'_>) -> rusqlite::Result<(String, String, String, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn mood_from_row(row: &Row<'_>) -> rusqlite::Result<(String, String, i32, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

impl RecordStore for SqliteStore {
    fn insert_journal(&self, user_id: &str, ciphertext: &str) -> Result<JournalEntry> {
        let conn = self.lock_conn()?;

        let id = Uuid::new_v4();
        let created_at = Utc::now();
        conn.execute(
            "INSERT INTO journal_entries (id, user_id, ciphertext, created_at) VALUES (?, ?, ?, ?)",
            (
                id.to_string(),
                user_id,
                ciphertext,
                created_at.to_rfc3339(),
            ),
        )?;

        Ok(JournalEntry {
            id,
            user_id: user_id.to_string(),
            ciphertext: ciphertext.to_string(),
            created_at,
        })
    }

    fn journals_for_user(&self, user_id: &str) -> Result<Vec<JournalEntry>> {
        let conn = self.lock_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT id, user_id, ciphertext, created_at
            FROM journal_entries
            WHERE user_id = ?
            ORDER BY created_at ASC, rowid ASC
            "#,
        )?;
        let rows = stmt.query_map([user_id], journal_from_row)?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, user_id, ciphertext, created_at) = row?;
            entries.push(JournalEntry {
                id: parse_id(&id)?,
                user_id,
                ciphertext,
                created_at: parse_created_at(&created_at)?,
            });
        }
        Ok(entries)
    }

    fn insert_mood(&self, user_id: &str, mood: i32) -> Result<MoodEntry> {
        let conn = self.lock_conn()?;

        let id = Uuid::new_v4();
        let created_at = Utc::now();
        conn.execute(
            "INSERT INTO mood_entries (id, user_id, mood, created_at) VALUES (?, ?, ?, ?)",
            (id.to_string(), user_id, mood, created_at.to_rfc3339()),
        )?;

        Ok(MoodEntry {
            id,
            user_id: user_id.to_string(),
            mood,
            created_at,
        })
    }

    fn moods_for_user(&self, user_id: &str) -> Result<Vec<MoodEntry>> {
        let conn = self.lock_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT id, user_id, mood, created_at
            FROM mood_entries
            WHERE user_id = ?
            ORDER BY created_at ASC, rowid ASC
            "#,
        )?;
        let rows = stmt.query_map([user_id], mood_from_row)?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, user_id, mood, created_at) = row?;
            entries.push(MoodEntry {
                id: parse_id(&id)?,
                user_id,
                mood,
                created_at: parse_created_at(&created_at)?,
            });
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_list_round_trip() {
        let store = SqliteStore::open_in_memory().unwrap();

        let inserted = store.insert_journal("u1", "cipher-a").unwrap();
        let entries = store.journals_for_user("u1").unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, inserted.id);
        assert_eq!(entries[0].ciphertext, "cipher-a");
        assert_eq!(entries[0].created_at, inserted.created_at);
    }

    #[test]
    fn test_moods_ascending_order() {
        let store = SqliteStore::open_in_memory().unwrap();

        let first = store.insert_mood("u1", 3).unwrap();
        let second = store.insert_mood("u1", 9).unwrap();

        let moods = store.moods_for_user("u1").unwrap();
        assert_eq!(moods.len(), 2);
        assert_eq!(moods[0].id, first.id);
        assert_eq!(moods[1].id, second.id);
        assert_eq!(moods[0].mood, 3);
        assert_eq!(moods[1].mood, 9);
    }

    #[test]
    fn test_user_isolation() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.insert_journal("a", "cipher-a").unwrap();
        store.insert_mood("a", 7).unwrap();

        assert!(store.journals_for_user("b").unwrap().is_empty());
        assert!(store.moods_for_user("b").unwrap().is_empty());
    }

    #[test]
    fn test_timestamps_survive_round_trip() {
        let store = SqliteStore::open_in_memory().unwrap();

        let inserted = store.insert_mood("u1", 5).unwrap();
        let fetched = &store.moods_for_user("u1").unwrap()[0];

        // RFC 3339 keeps full sub-second precision across the write/read cycle.
        assert_eq!(fetched.created_at, inserted.created_at);
    }

    #[test]
    fn test_close_releases_connection() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.insert_mood("u1", 5).unwrap();
        store.close().unwrap();
    }
}
