use std::path::Path;

use anyhow::{Context, Result};
use loadcheck_core::submission::encode;
use loadcheck_infrastructure::load_record;

pub async fn run(sheet: &Path) -> Result<()> {
    let record = load_record(sheet)
        .await
        .with_context(|| format!("Failed to load answer sheet {}", sheet.display()))?;

    let payload = encode(&record);
    print!("{payload}");
    println!(
        "-- {} parts, {} files, {} bytes attached",
        payload.parts.len(),
        payload.file_count(),
        payload.attachment_bytes()
    );
    Ok(())
}
