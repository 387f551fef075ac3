//! Submission states, results and the interpretation of transport responses.

use serde::{Deserialize, Serialize};

use super::transport::TransportResponse;
use crate::error::LoadcheckError;

/// Banner text shown after a successful submission.
pub const MSG_SUBMIT_SUCCEEDED: &str = "Formulário enviado com sucesso! Obrigado.";
/// Title of the error banner.
pub const MSG_SUBMIT_ERROR_TITLE: &str = "Erro no envio!";
/// Shown when the endpoint rejects the form without structured errors.
pub const MSG_SUBMIT_FAILED: &str = "Ocorreu um erro ao enviar o formulário. Tente novamente.";
/// Shown when no response could be obtained at all.
pub const MSG_CONNECTION_FAILED: &str =
    "Falha na conexão. Verifique sua internet e tente novamente.";

/// Lifecycle state of the submission controller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SubmissionState {
    /// Waiting for the user to submit.
    #[default]
    Idle,
    /// A transport call is in flight.
    Submitting,
    /// The last submission was accepted; the form resets shortly.
    Succeeded,
    /// The last submission failed.
    Failed {
        /// User-visible explanation.
        message: String,
    },
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Returns the banner to display for this state, if any.
    pub fn banner(&self) -> Option<Banner> {
        match self {
            SubmissionState::Succeeded => Some(Banner::Success {
                message: MSG_SUBMIT_SUCCEEDED,
            }),
            SubmissionState::Failed { message } => Some(Banner::Error {
                title: MSG_SUBMIT_ERROR_TITLE,
                detail: message.clone(),
            }),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }
}

/// A status banner rendered above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Success { message: &'static str },
    Error { title: &'static str, detail: String },
}

/// Result of a single submit action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionResult {
    /// Another submission is still in flight; nothing was sent.
    Pending,
    Success,
    /// The submission failed with the given user-visible message.
    Failure(String),
}

/// Why a submission failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionFailure {
    /// The endpoint answered with a list of field-level errors.
    Rejected { status: u16, messages: Vec<String> },
    /// The endpoint answered with a non-success status and no error detail.
    Unstructured { status: u16 },
    /// No response was obtained.
    Connection { reason: String },
}

impl SubmissionFailure {
    /// The single message surfaced to the user.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionFailure::Rejected { messages, .. } => messages.join(", "),
            SubmissionFailure::Unstructured { .. } => MSG_SUBMIT_FAILED.to_string(),
            SubmissionFailure::Connection { .. } => MSG_CONNECTION_FAILED.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Option<Vec<ErrorEntry>>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    message: String,
}

/// Interprets the outcome of a transport call.
///
/// Any 2xx status is a success and its body is ignored. A non-success status
/// whose JSON body carries a non-empty `errors` list is a structured
/// rejection; any other non-success status is unstructured. A transport error
/// means no response was obtained.
pub fn interpret(
    outcome: std::result::Result<TransportResponse, LoadcheckError>,
) -> std::result::Result<(), SubmissionFailure> {
    let response = outcome.map_err(|err| SubmissionFailure::Connection {
        reason: err.to_string(),
    })?;

    if response.is_success() {
        return Ok(());
    }

    let messages = serde_json::from_str::<ErrorResponse>(&response.body)
        .ok()
        .and_then(|body| body.errors)
        .filter(|errors| !errors.is_empty())
        .map(|errors| errors.into_iter().map(|e| e.message).collect::<Vec<_>>());

    Err(match messages {
        Some(messages) => SubmissionFailure::Rejected {
            status: response.status,
            messages,
        },
        None => SubmissionFailure::Unstructured {
            status: response.status,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> std::result::Result<TransportResponse, LoadcheckError> {
        Ok(TransportResponse {
            status,
            body: body.to_string(),
        })
    }

    #[test]
    fn test_success_ignores_body() {
        assert_eq!(interpret(response(200, "not json")), Ok(()));
        assert_eq!(interpret(response(204, "")), Ok(()));
    }

    #[test]
    fn test_structured_errors_are_joined_in_order() {
        let failure = interpret(response(
            422,
            r#"{"errors":[{"message":"Date required"},{"message":"Carrier required"}]}"#,
        ))
        .unwrap_err();

        assert_eq!(failure.user_message(), "Date required, Carrier required");
        assert!(matches!(failure, SubmissionFailure::Rejected { status: 422, .. }));
    }

    #[test]
    fn test_status_without_errors_is_generic() {
        let failure = interpret(response(500, "{}")).unwrap_err();
        assert_eq!(failure, SubmissionFailure::Unstructured { status: 500 });
        assert_eq!(failure.user_message(), MSG_SUBMIT_FAILED);
    }

    #[test]
    fn test_unparseable_or_empty_error_bodies_are_generic() {
        for body in ["<html>Bad Gateway</html>", "", r#"{"errors":[]}"#, r#"{"error":"x"}"#] {
            let failure = interpret(response(502, body)).unwrap_err();
            assert_eq!(failure.user_message(), MSG_SUBMIT_FAILED, "body: {body}");
        }
    }

    #[test]
    fn test_transport_error_is_connection_failure() {
        let failure = interpret(Err(LoadcheckError::transport("dns error"))).unwrap_err();
        assert!(matches!(failure, SubmissionFailure::Connection { .. }));
        assert_eq!(failure.user_message(), MSG_CONNECTION_FAILED);
    }

    #[test]
    fn test_banners() {
        assert_eq!(SubmissionState::Idle.banner(), None);
        assert_eq!(SubmissionState::Submitting.banner(), None);
        assert_eq!(
            SubmissionState::Succeeded.banner(),
            Some(Banner::Success {
                message: MSG_SUBMIT_SUCCEEDED
            })
        );
        assert_eq!(
            SubmissionState::Failed {
                message: "Date required".into()
            }
            .banner(),
            Some(Banner::Error {
                title: MSG_SUBMIT_ERROR_TITLE,
                detail: "Date required".into()
            })
        );
    }
}
