//! Output formatting helpers for the CLI.

use chrono::{DateTime, Utc};
use comfy_table::{presets, Table};
use mindwell_core::MoodEntry;
use uuid::Uuid;

/// Abbreviated id for display.
pub fn short_id(id: &Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

/// Timestamp rendering used across commands.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Render a mood history as a table.
pub fn mood_history_table(history: &[MoodEntry]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_header(["Date", "Mood"]);
    for entry in history {
        table.add_row([format_timestamp(entry.created_at), entry.mood.to_string()]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_short_id_is_eight_chars() {
        let id = Uuid::new_v4();
        assert_eq!(short_id(&id).len(), 8);
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2024-06-15 09:30");
    }

    #[test]
    fn test_mood_history_table_has_rows() {
        let history = vec![MoodEntry {
            id: Uuid::new_v4(),
            user_id: "u1".to_string(),
            mood: 7,
            created_at: Utc.with_ymd_and_hms(2024, 6, 15, 9, 30, 0).unwrap(),
        }];
        let rendered = mood_history_table(&history).to_string();
        assert!(rendered.contains("7"));
        assert!(rendered.contains("2024-06-15"));
    }
}
