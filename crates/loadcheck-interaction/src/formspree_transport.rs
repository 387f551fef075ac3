//! FormspreeTransport - multipart HTTP delivery of inspection forms.
//!
//! Posts the encoded payload to a Formspree form endpoint and hands the raw
//! status and body back to the controller for interpretation.

use std::time::Duration;

use async_trait::async_trait;
use loadcheck_core::config::DEFAULT_ENDPOINT;
use loadcheck_core::error::{LoadcheckError, Result};
use loadcheck_core::form::EvidenceFile;
use loadcheck_core::submission::{PartValue, Payload, SubmissionTransport, TransportResponse};
use mime_guess::mime::Mime;
use reqwest::Client;
use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};

/// Transport implementation that talks to a Formspree endpoint.
#[derive(Debug, Clone)]
pub struct FormspreeTransport {
    client: Client,
    endpoint: String,
}

impl FormspreeTransport {
    /// Creates a transport posting to `endpoint` with a default HTTP client.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Creates a transport whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the HTTP client cannot be built.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| LoadcheckError::config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Returns the endpoint this transport posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(payload: Payload) -> Result<Form> {
        payload
            .parts
            .into_iter()
            .try_fold(Form::new(), |form, part| match part.value {
                PartValue::Text(text) => Ok(form.text(part.name, text)),
                PartValue::File(file) => Ok(form.part(part.name, file_part(&file)?)),
            })
    }
}

impl Default for FormspreeTransport {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

fn file_part(file: &EvidenceFile) -> Result<Part> {
    let content_type = file.content_type().filter(|content_type| {
        let valid = content_type.parse::<Mime>().is_ok();
        if !valid {
            tracing::warn!(
                "[FormspreeTransport] Ignoring invalid content type '{}' for {}",
                content_type,
                file.name()
            );
        }
        valid
    });

    let part = Part::bytes(file.bytes().to_vec()).file_name(file.name().to_string());
    match content_type {
        Some(content_type) => part.mime_str(content_type).map_err(|err| {
            LoadcheckError::transport(format!(
                "Failed to set content type for {}: {err}",
                file.name()
            ))
        }),
        None => Ok(part),
    }
}

#[async_trait]
impl SubmissionTransport for FormspreeTransport {
    async fn send(&self, payload: Payload) -> Result<TransportResponse> {
        tracing::debug!(
            "[FormspreeTransport] POST {} ({} parts, {} files, {} bytes attached)",
            self.endpoint,
            payload.parts.len(),
            payload.file_count(),
            payload.attachment_bytes()
        );

        let form = Self::build_form(payload)?;

        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                LoadcheckError::transport(format!("Form submission request failed: {err}"))
            })?;

        let status = response.status();
        tracing::debug!("[FormspreeTransport] Response status: {}", status);

        if status.is_success() {
            return Ok(TransportResponse {
                status: status.as_u16(),
                body: String::new(),
            });
        }

        let body = response.text().await.map_err(|err| {
            LoadcheckError::transport(format!("Failed to read error response body: {err}"))
        })?;

        Ok(TransportResponse {
            status: status.as_u16(),
            body,
        })
    }
}
