//! Export command handler.

use mindwell_core::{ExportService, RecordStore};

pub fn handle_export<S: RecordStore>(export: &ExportService<S>, user: &str) -> anyhow::Result<()> {
    // No secret is requested: journal bodies leave as ciphertext and
    // are decrypted client-side by whoever holds the secret.
    let doc = export.export_user(user)?;
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
