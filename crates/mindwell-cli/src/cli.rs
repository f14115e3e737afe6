//! Command-line definitions.

use clap::{Args, Parser, Subcommand};

use mindwell_core::VERSION;

/// MindWell - an encrypted personal journal and mood tracker
#[derive(Parser)]
#[command(name = "mindwell")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Opaque user id scoping every operation
    #[arg(short, long, global = true, env = "MINDWELL_USER")]
    pub user: Option<String>,

    /// Path to the store database
    #[arg(short, long, global = true, env = "MINDWELL_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the store and write the default config
    Init {
        /// Path where the store database will live
        #[arg(value_name = "PATH")]
        path: Option<String>,
    },

    /// Journal entries (encrypted at rest)
    #[command(subcommand)]
    Journal(JournalCommands),

    /// Mood samples and rolling averages
    #[command(subcommand)]
    Mood(MoodCommands),

    /// Export all of a user's data as JSON (journals stay encrypted)
    Export,
}

#[derive(Subcommand)]
pub enum JournalCommands {
    /// Create a new encrypted entry
    Add(JournalAddArgs),

    /// List entries, decrypted with your secret
    List(JournalListArgs),
}

/// Arguments for `journal add`
#[derive(Args)]
pub struct JournalAddArgs {
    /// Entry body (reads piped stdin when omitted)
    #[arg(long)]
    pub text: Option<String>,
}

/// Arguments for `journal list`
#[derive(Args)]
pub struct JournalListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum MoodCommands {
    /// Record a mood rating from 1 to 10
    Add {
        /// Mood rating (1-10)
        #[arg(value_name = "MOOD")]
        mood: i32,
    },

    /// Show mood history with rolling averages
    History(MoodHistoryArgs),
}

/// Arguments for `mood history`
#[derive(Args)]
pub struct MoodHistoryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Rolling window sizes in days
    #[arg(long, value_name = "DAYS", default_values_t = [7, 30])]
    pub window: Vec<u32>,
}
