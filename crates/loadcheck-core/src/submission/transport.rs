//! The transport seam that delivers encoded payloads.

use async_trait::async_trait;

use super::payload::Payload;
use crate::error::Result;

/// Raw response returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivers an encoded payload to the form-processing endpoint.
///
/// Implementations return `Ok` whenever the endpoint answered, whatever the
/// status, and `Err` only when no response could be obtained.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn send(&self, payload: Payload) -> Result<TransportResponse>;
}
