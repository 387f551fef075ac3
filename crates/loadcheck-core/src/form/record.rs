//! Form record domain model.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::catalog::{FieldKey, FieldKind, LoadType, VehicleConfig, YesNo};
use crate::error::{LoadcheckError, Result};

/// An opaque file attached as evidence.
///
/// Contents are shared, so cloning a record never copies file bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct EvidenceFile {
    name: String,
    content_type: Option<String>,
    bytes: Arc<[u8]>,
}

impl EvidenceFile {
    /// Creates a new evidence file from its name and contents.
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    /// Sets the MIME type sent with the file part.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for EvidenceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvidenceFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// The value held by a single form field.
///
/// Each variant corresponds to one or more [`FieldKind`]s; a record only ever
/// stores a variant matching the field's declared kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text or date. The empty string means "not answered".
    Text(String),
    VehicleConfig(Option<VehicleConfig>),
    YesNo(Option<YesNo>),
    LoadType(Option<LoadType>),
    Files(Vec<EvidenceFile>),
}

impl FieldValue {
    /// Returns the empty/unset value for a kind.
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text | FieldKind::Date => FieldValue::Text(String::new()),
            FieldKind::VehicleConfig => FieldValue::VehicleConfig(None),
            FieldKind::YesNo => FieldValue::YesNo(None),
            FieldKind::LoadType => FieldValue::LoadType(None),
            FieldKind::Files => FieldValue::Files(Vec::new()),
        }
    }

    /// Parses a literal into a scalar value for `key`.
    ///
    /// Choice fields accept only their declared option literals; the empty
    /// string parses to the unset marker. File-list fields cannot be parsed
    /// from text.
    pub fn parse(key: FieldKey, raw: &str) -> Result<Self> {
        let kind = key.kind();
        if raw.is_empty() {
            return match kind {
                FieldKind::Files => Err(LoadcheckError::field_kind(key, "text")),
                _ => Ok(Self::empty(kind)),
            };
        }

        match kind {
            FieldKind::Text | FieldKind::Date => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::VehicleConfig => VehicleConfig::from_str(raw)
                .map(|v| FieldValue::VehicleConfig(Some(v)))
                .map_err(|_| LoadcheckError::invalid_value(key, raw)),
            FieldKind::YesNo => YesNo::from_str(raw)
                .map(|v| FieldValue::YesNo(Some(v)))
                .map_err(|_| LoadcheckError::invalid_value(key, raw)),
            FieldKind::LoadType => LoadType::from_str(raw)
                .map(|v| FieldValue::LoadType(Some(v)))
                .map_err(|_| LoadcheckError::invalid_value(key, raw)),
            FieldKind::Files => Err(LoadcheckError::field_kind(key, "text")),
        }
    }

    /// Whether this value may be stored in a field of `kind`.
    pub fn matches_kind(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (FieldValue::Text(_), FieldKind::Text | FieldKind::Date)
                | (FieldValue::VehicleConfig(_), FieldKind::VehicleConfig)
                | (FieldValue::YesNo(_), FieldKind::YesNo)
                | (FieldValue::LoadType(_), FieldKind::LoadType)
                | (FieldValue::Files(_), FieldKind::Files)
        )
    }

    /// Short name of the variant, used in kind-mismatch errors.
    pub fn variant_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::VehicleConfig(_) => "vehicle_config",
            FieldValue::YesNo(_) => "yes_no",
            FieldValue::LoadType(_) => "load_type",
            FieldValue::Files(_) => "files",
        }
    }

    /// Returns the wire literal of a scalar value, or `None` for file lists.
    ///
    /// Unset choices yield the empty string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.as_str()),
            FieldValue::VehicleConfig(v) => Some(v.map(VehicleConfig::as_str).unwrap_or("")),
            FieldValue::YesNo(v) => Some(v.map(YesNo::as_str).unwrap_or("")),
            FieldValue::LoadType(v) => Some(v.map(LoadType::as_str).unwrap_or("")),
            FieldValue::Files(_) => None,
        }
    }

    /// Returns the attached files, or `None` for scalar values.
    pub fn as_files(&self) -> Option<&[EvidenceFile]> {
        match self {
            FieldValue::Files(files) => Some(files),
            _ => None,
        }
    }

    /// Whether the value is the empty string, an unset choice or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Files(files) => files.is_empty(),
            other => other.as_text().is_none_or(str::is_empty),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<YesNo> for FieldValue {
    fn from(answer: YesNo) -> Self {
        FieldValue::YesNo(Some(answer))
    }
}

impl From<LoadType> for FieldValue {
    fn from(load_type: LoadType) -> Self {
        FieldValue::LoadType(Some(load_type))
    }
}

impl From<VehicleConfig> for FieldValue {
    fn from(config: VehicleConfig) -> Self {
        FieldValue::VehicleConfig(Some(config))
    }
}

impl From<Vec<EvidenceFile>> for FieldValue {
    fn from(files: Vec<EvidenceFile>) -> Self {
        FieldValue::Files(files)
    }
}

/// The complete set of answers and evidence for one inspection session.
///
/// A record holds exactly one value per [`FieldKey`], stored in declaration
/// order. Records are immutable snapshots: [`FormRecord::with_field`] returns a
/// new record with a single field replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRecord {
    values: Vec<FieldValue>,
}

impl FormRecord {
    /// Creates a record with every field empty or unset.
    pub fn new() -> Self {
        Self {
            values: FieldKey::all().map(|key| FieldValue::empty(key.kind())).collect(),
        }
    }

    /// Returns the value of a field.
    pub fn get(&self, key: FieldKey) -> &FieldValue {
        &self.values[key.index()]
    }

    /// Returns a copy of this record with `key` replaced by `value`.
    ///
    /// File lists are replaced wholesale. The value must match the field's
    /// declared kind; otherwise the record is left untouched and a
    /// `FieldKind` error is returned.
    pub fn with_field(&self, key: FieldKey, value: impl Into<FieldValue>) -> Result<Self> {
        let value = value.into();
        if !value.matches_kind(key.kind()) {
            return Err(LoadcheckError::field_kind(key, value.variant_name()));
        }

        let mut next = self.clone();
        next.values[key.index()] = value;
        Ok(next)
    }

    /// Iterates over `(key, value)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldKey, &FieldValue)> {
        FieldKey::all().zip(self.values.iter())
    }

    /// Returns the text of a scalar field, or `""` for file lists.
    pub fn text(&self, key: FieldKey) -> &str {
        self.get(key).as_text().unwrap_or("")
    }

    /// Returns the files attached to a file-list field, or an empty slice.
    pub fn files(&self, key: FieldKey) -> &[EvidenceFile] {
        self.get(key).as_files().unwrap_or(&[])
    }

    /// Whether every field is empty or unset.
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(FieldValue::is_empty)
    }
}

impl Default for FormRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(name: &str) -> EvidenceFile {
        EvidenceFile::new(name, vec![0xFF, 0xD8, 0xFF]).with_content_type("image/jpeg")
    }

    #[test]
    fn test_new_record_is_blank() {
        let record = FormRecord::new();
        assert!(record.is_blank());
        for (key, value) in record.fields() {
            if key.kind().is_files() {
                assert_eq!(value, &FieldValue::Files(Vec::new()));
            } else {
                assert_eq!(value.as_text(), Some(""));
            }
        }
    }

    #[test]
    fn test_with_field_preserves_other_fields() {
        let record = FormRecord::new()
            .with_field(FieldKey::Carrier, "Transportes Silva")
            .unwrap();
        let updated = record.with_field(FieldKey::PbtCompliant, YesNo::Yes).unwrap();

        assert_eq!(updated.text(FieldKey::Carrier), "Transportes Silva");
        assert_eq!(updated.text(FieldKey::PbtCompliant), "Sim");
        // The original snapshot is untouched
        assert_eq!(record.text(FieldKey::PbtCompliant), "");
    }

    #[test]
    fn test_with_field_rejects_wrong_kind() {
        let record = FormRecord::new();

        let err = record
            .with_field(FieldKey::GeneralRemarks, "not a file")
            .unwrap_err();
        assert!(matches!(
            err,
            LoadcheckError::FieldKind {
                key: FieldKey::GeneralRemarks,
                ..
            }
        ));

        let err = record
            .with_field(FieldKey::LoadType, YesNo::No)
            .unwrap_err();
        assert!(err.is_field_error());
    }

    #[test]
    fn test_file_lists_are_replaced_wholesale() {
        let record = FormRecord::new()
            .with_field(FieldKey::GeneralRemarks, vec![photo("a.jpg"), photo("b.jpg")])
            .unwrap()
            .with_field(FieldKey::GeneralRemarks, vec![photo("c.jpg")])
            .unwrap();

        let names: Vec<&str> = record
            .files(FieldKey::GeneralRemarks)
            .iter()
            .map(EvidenceFile::name)
            .collect();
        assert_eq!(names, vec!["c.jpg"]);
    }

    #[test]
    fn test_parse_choice_literals() {
        assert_eq!(
            FieldValue::parse(FieldKey::VehicleConfig, "bitrem_bau").unwrap(),
            FieldValue::VehicleConfig(Some(VehicleConfig::BitremBau))
        );
        assert_eq!(
            FieldValue::parse(FieldKey::UniformLoading, "").unwrap(),
            FieldValue::YesNo(None)
        );

        let err = FieldValue::parse(FieldKey::PalletsTipped, "yes").unwrap_err();
        assert!(matches!(err, LoadcheckError::InvalidValue { .. }));
    }

    #[test]
    fn test_parse_refuses_file_fields() {
        let err = FieldValue::parse(FieldKey::PbtEvidence, "photo.jpg").unwrap_err();
        assert!(matches!(err, LoadcheckError::FieldKind { .. }));
    }

    #[test]
    fn test_date_field_accepts_text() {
        let record = FormRecord::new()
            .with_field(FieldKey::Date, "2026-10-16")
            .unwrap();
        assert_eq!(record.text(FieldKey::Date), "2026-10-16");
    }

    #[test]
    fn test_evidence_debug_hides_contents() {
        let debug = format!("{:?}", photo("dock.jpg"));
        assert!(debug.contains("dock.jpg"));
        assert!(debug.contains("len: 3"));
    }
}
