//! Answer sheets: TOML files holding a filled-in inspection form.
//!
//! ```toml
//! [answers]
//! date = "2024-05-10"
//! carrier = "Transportes Silva"
//! vehicleConfig = "carreta_sider"
//! pbtCompliant = "Sim"
//!
//! [evidence]
//! generalRemarks = ["photos/front.jpg", "photos/rear.jpg"]
//! ```
//!
//! Keys are the wire keys of the field catalog. Evidence paths are resolved
//! relative to the directory holding the sheet.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use loadcheck_core::catalog::FieldKey;
use loadcheck_core::error::{LoadcheckError, Result};
use loadcheck_core::form::{FieldValue, FormRecord, FormStore};
use serde::{Deserialize, Serialize};

use crate::evidence::load_evidence_list;

/// On-disk representation of a filled-in form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerSheet {
    /// Scalar answers keyed by wire key.
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
    /// Evidence file paths keyed by wire key.
    #[serde(default)]
    pub evidence: BTreeMap<String, Vec<PathBuf>>,
}

impl AnswerSheet {
    /// Parses a sheet from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a sheet file.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            LoadcheckError::io(format!(
                "Failed to read answer sheet {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Writes every answer and evidence list into `store`.
    ///
    /// Stops at the first unknown key, misplaced kind, invalid literal, or
    /// unreadable file. Fields already written stay in the store.
    pub async fn apply(&self, base_dir: &Path, store: &FormStore) -> Result<()> {
        for (raw_key, raw_value) in &self.answers {
            let key = parse_key(raw_key)?;
            if key.kind().is_files() {
                return Err(LoadcheckError::field_kind(key, "text answer"));
            }
            store.set_field(key, FieldValue::parse(key, raw_value)?).await?;
        }

        for (raw_key, paths) in &self.evidence {
            let key = parse_key(raw_key)?;
            if !key.kind().is_files() {
                return Err(LoadcheckError::field_kind(key, "evidence files"));
            }
            let files = load_evidence_list(base_dir, paths).await?;
            tracing::debug!("[AnswerSheet] Loaded {} file(s) for {}", files.len(), key);
            store.set_field(key, files).await?;
        }

        Ok(())
    }
}

fn parse_key(raw: &str) -> Result<FieldKey> {
    FieldKey::from_str(raw).map_err(|_| LoadcheckError::UnknownField(raw.to_string()))
}

/// Loads the sheet at `path` into a fresh record.
pub async fn load_record(path: &Path) -> Result<FormRecord> {
    let store = FormStore::new();
    fill_store(path, &store).await?;
    Ok(store.get().await)
}

/// Loads the sheet at `path` into an existing store.
pub async fn fill_store(path: &Path, store: &FormStore) -> Result<()> {
    let sheet = AnswerSheet::load(path).await?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    sheet.apply(base_dir, store).await?;
    tracing::info!(
        "[AnswerSheet] Applied {} answer(s) and {} evidence field(s) from {}",
        sheet.answers.len(),
        sheet.evidence.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadcheck_core::catalog::{LoadType, YesNo};

    #[test]
    fn test_parse_sections() {
        let sheet = AnswerSheet::from_toml_str(
            r#"
            [answers]
            carrier = "Transportes Silva"

            [evidence]
            generalRemarks = ["a.jpg"]
            "#,
        )
        .unwrap();
        assert_eq!(sheet.answers["carrier"], "Transportes Silva");
        assert_eq!(sheet.evidence["generalRemarks"], vec![PathBuf::from("a.jpg")]);
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = AnswerSheet::from_toml_str("[extra]\nfoo = \"bar\"").unwrap_err();
        assert!(matches!(err, LoadcheckError::Serialization { .. }));
    }

    #[tokio::test]
    async fn test_apply_scalar_answers() {
        let sheet = AnswerSheet::from_toml_str(
            r#"
            [answers]
            loadType = "Batida"
            pbtCompliant = "Não"
            implement2Plate = ""
            "#,
        )
        .unwrap();
        let store = FormStore::new();
        sheet.apply(Path::new("."), &store).await.unwrap();

        let record = store.get().await;
        assert_eq!(record.get(FieldKey::LoadType), &FieldValue::LoadType(Some(LoadType::Loose)));
        assert_eq!(record.get(FieldKey::PbtCompliant), &FieldValue::YesNo(Some(YesNo::No)));
        assert_eq!(record.get(FieldKey::Implement2Plate), &FieldValue::Text(String::new()));
    }

    #[tokio::test]
    async fn test_apply_unknown_key() {
        let sheet = AnswerSheet::from_toml_str("[answers]\nfleet = \"x\"").unwrap();
        let err = sheet.apply(Path::new("."), &FormStore::new()).await.unwrap_err();
        assert!(matches!(err, LoadcheckError::UnknownField(ref key) if key == "fleet"));
    }

    #[tokio::test]
    async fn test_apply_rejects_files_as_answer() {
        let sheet = AnswerSheet::from_toml_str("[answers]\ngeneralRemarks = \"x\"").unwrap();
        let err = sheet.apply(Path::new("."), &FormStore::new()).await.unwrap_err();
        assert!(err.is_field_error());
    }

    #[tokio::test]
    async fn test_apply_rejects_evidence_for_scalar() {
        let sheet = AnswerSheet::from_toml_str("[evidence]\ncarrier = [\"a.jpg\"]").unwrap();
        let err = sheet.apply(Path::new("."), &FormStore::new()).await.unwrap_err();
        assert!(err.is_field_error());
    }
}
