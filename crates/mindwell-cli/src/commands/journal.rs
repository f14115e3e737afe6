//! Journal command handlers.

use std::io::{IsTerminal, Read};

use mindwell_core::{JournalService, RecordStore};

use crate::cli::{JournalAddArgs, JournalListArgs};
use crate::commands::prompt_secret;
use crate::output::{format_timestamp, short_id};

pub fn handle_add<S: RecordStore>(
    journal: &JournalService<S>,
    user: &str,
    args: &JournalAddArgs,
) -> anyhow::Result<()> {
    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            if std::io::stdin().is_terminal() {
                anyhow::bail!("No entry body. Pass --text or pipe the body on stdin.");
            }
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf.trim_end().to_string()
        }
    };

    let secret = prompt_secret()?;
    let entry = journal.create_entry(user, &text, &secret)?;

    println!(
        "Saved encrypted entry {} at {}",
        short_id(&entry.id),
        format_timestamp(entry.created_at)
    );
    Ok(())
}

pub fn handle_list<S: RecordStore>(
    journal: &JournalService<S>,
    user: &str,
    args: &JournalListArgs,
) -> anyhow::Result<()> {
    let secret = prompt_secret()?;
    let entries = journal.list_entries(user, &secret)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No entries.");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{}  {}  {}",
            format_timestamp(entry.created_at),
            short_id(&entry.id),
            entry.text
        );
    }
    Ok(())
}
