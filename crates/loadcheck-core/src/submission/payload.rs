//! Transport payload and the encoder that builds it from a form record.

use std::fmt;

use crate::catalog::FieldKey;
use crate::form::{EvidenceFile, FormRecord};

/// Name of the synthetic subject part that always leads the payload.
pub const SUBJECT_FIELD: &str = "_subject";

/// Placeholder substituted for an empty carrier or date in the subject.
pub const SUBJECT_PLACEHOLDER: &str = "N/A";

/// Value carried by a single payload part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    File(EvidenceFile),
}

/// One key/value part of a multipart payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadPart {
    pub name: String,
    pub value: PartValue,
}

impl PayloadPart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: PartValue::Text(value.into()),
        }
    }

    pub fn file(name: impl Into<String>, file: EvidenceFile) -> Self {
        Self {
            name: name.into(),
            value: PartValue::File(file),
        }
    }
}

/// Ordered multipart payload, independent of any HTTP client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    pub parts: Vec<PayloadPart>,
}

impl Payload {
    /// Returns every part stored under `name`, in payload order.
    pub fn parts_named<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a PayloadPart> + use<'a, 'n> {
        self.parts.iter().filter(move |part| part.name == name)
    }

    /// Returns the text of the first part stored under `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts_named(name).find_map(|part| match &part.value {
            PartValue::Text(text) => Some(text.as_str()),
            PartValue::File(_) => None,
        })
    }

    /// Number of file parts in the payload.
    pub fn file_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|part| matches!(part.value, PartValue::File(_)))
            .count()
    }

    /// Total size of all attached files in bytes.
    pub fn attachment_bytes(&self) -> usize {
        self.parts
            .iter()
            .map(|part| match &part.value {
                PartValue::File(file) => file.len(),
                PartValue::Text(_) => 0,
            })
            .sum()
    }
}

/// Human-readable listing of the payload, one part per line.
impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match &part.value {
                PartValue::Text(text) => writeln!(f, "{} = {}", part.name, text)?,
                PartValue::File(file) => writeln!(
                    f,
                    "{} <- {} ({}, {} bytes)",
                    part.name,
                    file.name(),
                    file.content_type().unwrap_or("application/octet-stream"),
                    file.len()
                )?,
            }
        }
        Ok(())
    }
}

/// Builds the subject line from the carrier and date.
pub fn subject_line(record: &FormRecord) -> String {
    let or_placeholder = |text: &str| {
        if text.is_empty() {
            SUBJECT_PLACEHOLDER.to_string()
        } else {
            text.to_string()
        }
    };

    format!(
        "Novo Formulário de Adernamento - {} - {}",
        or_placeholder(record.text(FieldKey::Carrier)),
        or_placeholder(record.text(FieldKey::Date))
    )
}

/// Encodes a record into a transport payload.
///
/// The `_subject` part always comes first. Every field then follows in
/// declaration order:
/// - file lists contribute one part per file (none when the list is empty);
/// - scalars contribute one part only when their wire value is non-empty.
///
/// Encoding never fails and never validates.
pub fn encode(record: &FormRecord) -> Payload {
    let mut parts = vec![PayloadPart::text(SUBJECT_FIELD, subject_line(record))];

    for (key, value) in record.fields() {
        if let Some(files) = value.as_files() {
            parts.extend(
                files
                    .iter()
                    .map(|file| PayloadPart::file(key.as_str(), file.clone())),
            );
        } else if let Some(text) = value.as_text().filter(|text| !text.is_empty()) {
            parts.push(PayloadPart::text(key.as_str(), text));
        }
    }

    Payload { parts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LoadType, VehicleConfig, YesNo};

    fn photo(name: &str) -> EvidenceFile {
        EvidenceFile::new(name, vec![7u8; 16]).with_content_type("image/png")
    }

    fn filled_record() -> FormRecord {
        FormRecord::new()
            .with_field(FieldKey::Date, "2026-10-16")
            .unwrap()
            .with_field(FieldKey::Carrier, "Transportes Silva")
            .unwrap()
            .with_field(FieldKey::VehicleConfig, VehicleConfig::CarretaSider)
            .unwrap()
            .with_field(FieldKey::PbtCompliant, YesNo::Yes)
            .unwrap()
            .with_field(FieldKey::PbtEvidence, vec![photo("pbt-1.png"), photo("pbt-2.png")])
            .unwrap()
            .with_field(FieldKey::LoadType, LoadType::Palletized)
            .unwrap()
            .with_field(FieldKey::GeneralRemarks, vec![photo("overview.png")])
            .unwrap()
    }

    #[test]
    fn test_subject_is_always_first() {
        let payload = encode(&FormRecord::new());
        assert_eq!(payload.parts.len(), 1);
        assert_eq!(payload.parts[0].name, SUBJECT_FIELD);
        assert_eq!(
            payload.text(SUBJECT_FIELD),
            Some("Novo Formulário de Adernamento - N/A - N/A")
        );
    }

    #[test]
    fn test_subject_uses_carrier_and_date() {
        let payload = encode(&filled_record());
        assert_eq!(
            payload.text(SUBJECT_FIELD),
            Some("Novo Formulário de Adernamento - Transportes Silva - 2026-10-16")
        );
    }

    #[test]
    fn test_subject_substitutes_only_missing_value() {
        let record = FormRecord::new()
            .with_field(FieldKey::Date, "2026-01-02")
            .unwrap();
        assert_eq!(
            subject_line(&record),
            "Novo Formulário de Adernamento - N/A - 2026-01-02"
        );
    }

    #[test]
    fn test_empty_scalars_are_omitted() {
        let payload = encode(&filled_record());
        assert!(payload.text("globalProcessNumber").is_none());
        assert!(payload.text("implement1Plate").is_none());
        assert!(payload.text("palletSpaces").is_none());
        assert_eq!(payload.text("carrier"), Some("Transportes Silva"));
        assert_eq!(payload.text("vehicleConfig"), Some("carreta_sider"));
        assert_eq!(payload.text("pbtCompliant"), Some("Sim"));
        assert_eq!(payload.text("loadType"), Some("Paletizada"));
    }

    #[test]
    fn test_text_outlives_lookup_key() {
        let payload = encode(&filled_record());
        let carrier = {
            let key = FieldKey::Carrier.to_string();
            payload.text(&key)
        };
        assert_eq!(carrier, Some("Transportes Silva"));
    }

    #[test]
    fn test_one_part_per_file() {
        let record = filled_record();
        let payload = encode(&record);

        for (key, value) in record.fields() {
            if let Some(files) = value.as_files() {
                assert_eq!(payload.parts_named(key.as_str()).count(), files.len());
            }
        }
        assert_eq!(payload.file_count(), 3);
        assert_eq!(payload.attachment_bytes(), 48);
    }

    #[test]
    fn test_parts_follow_declaration_order() {
        let payload = encode(&filled_record());
        let names: Vec<&str> = payload.parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "_subject",
                "date",
                "carrier",
                "vehicleConfig",
                "pbtCompliant",
                "pbtEvidence",
                "pbtEvidence",
                "loadType",
                "generalRemarks",
            ]
        );
    }

    #[test]
    fn test_whitespace_is_not_treated_as_empty() {
        let record = FormRecord::new()
            .with_field(FieldKey::VehiclePlate, " ")
            .unwrap();
        assert_eq!(encode(&record).text("vehiclePlate"), Some(" "));
    }

    #[test]
    fn test_display_lists_files() {
        let rendered = encode(&filled_record()).to_string();
        assert!(rendered.contains("pbtEvidence <- pbt-1.png (image/png, 16 bytes)"));
        assert!(rendered.starts_with("_subject = Novo Formulário de Adernamento"));
    }
}
