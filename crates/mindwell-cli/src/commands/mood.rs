//! Mood command handlers.

use chrono::Utc;
use mindwell_core::{analytics, MoodService, RecordStore};

use crate::cli::MoodHistoryArgs;
use crate::output::{format_timestamp, mood_history_table, short_id};

pub fn handle_add<S: RecordStore>(
    moods: &MoodService<S>,
    user: &str,
    mood: i32,
) -> anyhow::Result<()> {
    let entry = moods.save_mood(user, mood)?;
    println!(
        "Recorded mood {} ({}) at {}",
        entry.mood,
        short_id(&entry.id),
        format_timestamp(entry.created_at)
    );
    Ok(())
}

pub fn handle_history<S: RecordStore>(
    moods: &MoodService<S>,
    user: &str,
    args: &MoodHistoryArgs,
) -> anyhow::Result<()> {
    let history = moods.history(user)?;
    let now = Utc::now();

    if args.json {
        let averages: serde_json::Map<String, serde_json::Value> = args
            .window
            .iter()
            .map(|&days| {
                let avg = analytics::windowed_average(&history, days, now);
                (format!("{}d", days), serde_json::json!(avg))
            })
            .collect();
        let doc = serde_json::json!({
            "history": history,
            "averages": averages,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    if history.is_empty() {
        println!("No moods recorded.");
    } else {
        println!("{}", mood_history_table(&history));
    }

    for &days in &args.window {
        let avg = analytics::windowed_average(&history, days, now);
        println!("{}-day average: {}", days, analytics::format_average(avg));
    }
    Ok(())
}
