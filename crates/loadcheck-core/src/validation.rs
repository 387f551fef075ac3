//! Presentation-layer checks for the "required" markers of the form.
//!
//! The store and the submission controller never call into this module. An
//! input-collection front end uses it to warn about (or refuse) incomplete
//! records before handing them to the controller.

use std::fmt;

use chrono::NaiveDate;

use crate::catalog::{FIELDS, FieldKey, FieldKind};
use crate::form::FormRecord;

/// Expected format of the `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single problem found in a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A required scalar is empty or a required file list has no files.
    Missing { key: FieldKey },
    /// A file list holds more files than allowed.
    TooManyFiles { key: FieldKey, max: usize, actual: usize },
    /// The date is not a `YYYY-MM-DD` calendar date.
    InvalidDate { value: String },
}

impl ValidationIssue {
    pub fn key(&self) -> FieldKey {
        match self {
            ValidationIssue::Missing { key } | ValidationIssue::TooManyFiles { key, .. } => *key,
            ValidationIssue::InvalidDate { .. } => FieldKey::Date,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::Missing { key } => {
                write!(f, "{}: required ({})", key, key.spec().label)
            }
            ValidationIssue::TooManyFiles { key, max, actual } => {
                write!(f, "{key}: {actual} files attached, at most {max} allowed")
            }
            ValidationIssue::InvalidDate { value } => {
                write!(f, "date: '{value}' is not a valid YYYY-MM-DD date")
            }
        }
    }
}

/// Checks a record against the catalog's required markers and file limits.
///
/// Issues are reported in field declaration order.
pub fn validate(record: &FormRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for spec in FIELDS.iter() {
        let value = record.get(spec.key);

        if spec.required && value.is_empty() {
            issues.push(ValidationIssue::Missing { key: spec.key });
            continue;
        }

        if let (Some(max), Some(files)) = (spec.max_files, value.as_files())
            && files.len() > max
        {
            issues.push(ValidationIssue::TooManyFiles {
                key: spec.key,
                max,
                actual: files.len(),
            });
        }

        if spec.kind == FieldKind::Date {
            let text = record.text(spec.key);
            if !text.is_empty() && NaiveDate::parse_from_str(text, DATE_FORMAT).is_err() {
                issues.push(ValidationIssue::InvalidDate {
                    value: text.to_string(),
                });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CHECKLIST, LoadType, VehicleConfig, YesNo};
    use crate::form::EvidenceFile;

    fn complete_record() -> FormRecord {
        let mut record = FormRecord::new()
            .with_field(FieldKey::Date, "2026-10-16")
            .unwrap()
            .with_field(FieldKey::Carrier, "Transportes Silva")
            .unwrap()
            .with_field(FieldKey::GlobalProcessNumber, "GP-0042")
            .unwrap()
            .with_field(FieldKey::VehiclePlate, "ABC1D23")
            .unwrap()
            .with_field(FieldKey::VehicleConfig, VehicleConfig::Truck)
            .unwrap()
            .with_field(FieldKey::LoadType, LoadType::Loose)
            .unwrap()
            .with_field(
                FieldKey::GeneralRemarks,
                vec![EvidenceFile::new("overview.jpg", vec![1u8])],
            )
            .unwrap();
        for question in &CHECKLIST {
            record = record.with_field(question.answer, YesNo::No).unwrap();
        }
        record
    }

    #[test]
    fn test_complete_record_has_no_issues() {
        assert!(validate(&complete_record()).is_empty());
    }

    #[test]
    fn test_blank_record_reports_every_required_field() {
        let issues = validate(&FormRecord::new());
        let required = FIELDS.iter().filter(|f| f.required).count();
        assert_eq!(issues.len(), required);
        assert_eq!(issues[0], ValidationIssue::Missing { key: FieldKey::Date });
        assert_eq!(
            issues.last(),
            Some(&ValidationIssue::Missing {
                key: FieldKey::GeneralRemarks
            })
        );
    }

    #[test]
    fn test_too_many_general_remarks() {
        let files: Vec<EvidenceFile> = (0..11)
            .map(|i| EvidenceFile::new(format!("{i}.jpg"), vec![0u8]))
            .collect();
        let record = complete_record()
            .with_field(FieldKey::GeneralRemarks, files)
            .unwrap();

        assert_eq!(
            validate(&record),
            vec![ValidationIssue::TooManyFiles {
                key: FieldKey::GeneralRemarks,
                max: 10,
                actual: 11
            }]
        );
    }

    #[test]
    fn test_invalid_date() {
        let record = complete_record()
            .with_field(FieldKey::Date, "2026-02-30")
            .unwrap();
        let issues = validate(&record);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].key(), FieldKey::Date);
        assert!(issues[0].to_string().contains("2026-02-30"));
    }

    #[test]
    fn test_optional_fields_may_stay_empty() {
        let issues = validate(&complete_record());
        assert!(
            !issues
                .iter()
                .any(|i| i.key() == FieldKey::Implement1Plate || i.key() == FieldKey::PbtEvidence)
        );
    }
}
