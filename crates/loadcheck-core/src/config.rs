//! Application configuration model.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Form endpoint the inspection checklist is delivered to by default.
pub const DEFAULT_ENDPOINT: &str = "https://formspree.io/f/mgegygwy";

/// Delay before a successfully submitted form is cleared.
pub const DEFAULT_RESET_DELAY_SECS: u64 = 5;

/// Upper bound on a single submission request.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Root configuration (`config.toml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Form-processing endpoint receiving the multipart payload.
    pub endpoint: String,
    /// Seconds the success banner stays up before the form is cleared.
    pub reset_delay_secs: u64,
    /// Seconds before an in-flight request is abandoned.
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_secs(self.reset_delay_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            reset_delay_secs: DEFAULT_RESET_DELAY_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
