//! Command handlers.

pub mod export;
pub mod journal;
pub mod mood;

use dialoguer::Password;

/// Prompt for the user's secret without echoing it.
///
/// The secret lives on this call's stack only; it is never written to
/// config, the store, or the log stream.
pub fn prompt_secret() -> anyhow::Result<String> {
    Password::new()
        .with_prompt("Secret")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read secret: {}", e))
}
