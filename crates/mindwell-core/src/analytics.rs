//! Mood analytics.
//!
//! Pure functions over an in-memory mood history; no store access.
//! Callers (or a presentation layer) apply these to the output of the
//! mood service. Window sizes are arbitrary, so the same functions
//! serve 7-day, 30-day, or any other trailing span.

use chrono::{DateTime, NaiveTime, Utc};

use crate::store::MoodEntry;

/// The trailing-window suffix of an ascending mood history.
///
/// Returns all entries with `created_at` on or after midnight UTC of
/// the day `days - 1` days before `now`: the window spans the current
/// day plus the previous `days - 1` days. Only the lower bound is
/// truncated to whole-day granularity; entries stamped after `now`
/// pass through. A zero-day window is empty.
///
/// `history` must already be ascending by `created_at`, which is the
/// order every store query returns.
pub fn recent_window(history: &[MoodEntry], days: u32, now: DateTime<Utc>) -> &[MoodEntry] {
    if days == 0 {
        return &history[..0];
    }

    let start_day = now.date_naive() - chrono::Days::new(u64::from(days - 1));
    let cutoff = start_day.and_time(NaiveTime::MIN).and_utc();

    let idx = history.partition_point(|entry| entry.created_at < cutoff);
    &history[idx..]
}

/// Arithmetic mean of the mood ratings, rounded half-up to one
/// decimal place.
///
/// Returns `None` for an empty slice; the "no data" sentinel is
/// deliberately distinct from a zero average.
pub fn average(entries: &[MoodEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }

    let sum: i64 = entries.iter().map(|entry| i64::from(entry.mood)).sum();
    let mean = sum as f64 / entries.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

/// Average mood over the trailing `days`-day window ending at `now`.
pub fn windowed_average(history: &[MoodEntry], days: u32, now: DateTime<Utc>) -> Option<f64> {
    average(recent_window(history, days, now))
}

/// Render an average for presentation, using "N/A" for the no-data
/// sentinel.
pub fn format_average(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("{:.1}", value),
        None => "N/A".to_string(),
    }
}
