//! Domain layer for loadcheck.
//!
//! Holds the static field catalog of the vehicle-loading inspection form, the
//! typed form record and its store, the payload encoder, and the seams
//! (`SubmissionTransport`, `Viewport`) implemented by outer crates.

pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod submission;
pub mod validation;

// Re-export common types
pub use catalog::{FieldKey, FieldKind};
pub use error::{LoadcheckError, Result};
pub use form::{EvidenceFile, FieldValue, FormRecord, FormStore};
pub use submission::{
    Payload, SubmissionResult, SubmissionState, SubmissionTransport, TransportResponse, Viewport,
    encode,
};
