//! Loading evidence files from disk.

use std::path::{Path, PathBuf};

use loadcheck_core::error::{LoadcheckError, Result};
use loadcheck_core::form::EvidenceFile;

/// Reads a file into an [`EvidenceFile`], guessing its MIME type from the extension.
pub async fn load_evidence(path: &Path) -> Result<EvidenceFile> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        LoadcheckError::io(format!(
            "Failed to read evidence file {}: {}",
            path.display(),
            e
        ))
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let file = EvidenceFile::new(name, bytes);
    Ok(match mime_guess::from_path(path).first_raw() {
        Some(mime) => file.with_content_type(mime),
        None => file,
    })
}

/// Loads several files, preserving their order.
///
/// Relative paths are resolved against `base_dir`.
pub async fn load_evidence_list(base_dir: &Path, paths: &[PathBuf]) -> Result<Vec<EvidenceFile>> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let resolved = base_dir.join(path);
        files.push(load_evidence(&resolved).await?);
    }
    Ok(files)
}
