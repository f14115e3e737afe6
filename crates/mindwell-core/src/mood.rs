//! Mood service.
//!
//! Persists and retrieves numeric mood samples. Moods are plain
//! integers in the closed range 1..=10; they are not encrypted.

use std::sync::Arc;

use tracing::debug;

use crate::error::{MindwellError, Result};
use crate::store::{MoodEntry, RecordStore};

/// Lowest accepted mood rating.
pub const MOOD_MIN: i32 = 1;

/// Highest accepted mood rating.
pub const MOOD_MAX: i32 = 10;

/// Service for recording and reading mood samples.
pub struct MoodService<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> MoodService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate and persist a mood sample for `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `MindwellError::InvalidInput` if `user_id` is empty or
    /// `mood` falls outside `1..=10`. Out-of-range values are rejected
    /// before anything reaches the store.
    pub fn save_mood(&self, user_id: &str, mood: i32) -> Result<MoodEntry> {
        if user_id.trim().is_empty() {
            return Err(MindwellError::InvalidInput(
                "User id cannot be empty".to_string(),
            ));
        }
        if !(MOOD_MIN..=MOOD_MAX).contains(&mood) {
            return Err(MindwellError::InvalidInput(format!(
                "Mood must be between {} and {} (got {})",
                MOOD_MIN, MOOD_MAX, mood
            )));
        }

        let entry = self.store.insert_mood(user_id, mood)?;
        debug!(user_id, entry_id = %entry.id, mood, "mood recorded");
        Ok(entry)
    }

    /// All mood samples for `user_id`, ascending by `created_at`.
    ///
    /// An empty history is a valid result, not an error.
    pub fn history(&self, user_id: &str) -> Result<Vec<MoodEntry>> {
        self.store.moods_for_user(user_id)
    }
}
