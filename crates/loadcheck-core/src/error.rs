//! Error types for the loadcheck workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{FieldKey, FieldKind};

/// A shared error type for the entire loadcheck client.
///
/// Remote rejections are not represented here: they are recovered into a
/// [`SubmissionFailure`](crate::submission::SubmissionFailure) and surfaced as a
/// banner instead of propagating as errors.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum LoadcheckError {
    /// A value of the wrong kind was offered for a field
    #[error("Field '{key}' expects {expected} but got {actual}")]
    FieldKind {
        key: FieldKey,
        expected: FieldKind,
        actual: String,
    },

    /// A wire key that is not part of the field catalog
    #[error("Unknown field: '{0}'")]
    UnknownField(String),

    /// A literal that is not one of the field's declared options
    #[error("Invalid value for '{key}': '{value}' (expected one of: {expected})")]
    InvalidValue {
        key: FieldKey,
        value: String,
        expected: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The transport could not obtain any response
    #[error("Transport error: {0}")]
    Transport(String),
}

impl LoadcheckError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a FieldKind error
    pub fn field_kind(key: FieldKey, actual: impl Into<String>) -> Self {
        Self::FieldKind {
            key,
            expected: key.kind(),
            actual: actual.into(),
        }
    }

    /// Creates an InvalidValue error listing the field's declared options
    pub fn invalid_value(key: FieldKey, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            value: value.into(),
            expected: key.kind().options().join(", "),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this error was caused by a mistyped or unknown field value
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            Self::FieldKind { .. } | Self::UnknownField(_) | Self::InvalidValue { .. }
        )
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for LoadcheckError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for LoadcheckError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for LoadcheckError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, LoadcheckError>`.
pub type Result<T> = std::result::Result<T, LoadcheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_lists_options() {
        let err = LoadcheckError::invalid_value(FieldKey::LoadType, "Granel");
        assert_eq!(
            err.to_string(),
            "Invalid value for 'loadType': 'Granel' (expected one of: Paletizada, Batida, Carregamento misto)"
        );
        assert!(err.is_field_error());
    }

    #[test]
    fn test_field_kind_uses_declared_kind() {
        let err = LoadcheckError::field_kind(FieldKey::GeneralRemarks, "text");
        match err {
            LoadcheckError::FieldKind { expected, .. } => assert_eq!(expected, FieldKind::Files),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.jpg");
        let err: LoadcheckError = io.into();
        assert!(err.is_io());
        assert!(err.to_string().contains("NotFound"));
    }
}
