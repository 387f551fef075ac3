//! Submission domain module.
//!
//! # Module Structure
//!
//! - `payload`: transport-neutral multipart payload and the `encode` function
//! - `outcome`: controller states, results and response interpretation
//! - `transport`: the `SubmissionTransport` seam implemented by HTTP adapters
//! - `viewport`: the `Viewport` seam implemented by presentation layers

mod outcome;
mod payload;
mod transport;
mod viewport;

pub use outcome::{
    Banner, MSG_CONNECTION_FAILED, MSG_SUBMIT_ERROR_TITLE, MSG_SUBMIT_FAILED,
    MSG_SUBMIT_SUCCEEDED, SubmissionFailure, SubmissionResult, SubmissionState, interpret,
};
pub use payload::{
    PartValue, Payload, PayloadPart, SUBJECT_FIELD, SUBJECT_PLACEHOLDER, encode, subject_line,
};
pub use transport::{SubmissionTransport, TransportResponse};
pub use viewport::Viewport;
