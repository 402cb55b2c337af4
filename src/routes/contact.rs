use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use novatech_contact::{Submission, ValidationErrors};
use serde::Serialize;

use crate::routes::AppState;

pub const SENT_MESSAGE: &str = "Message sent successfully! We will get back to you soon.";

/// The JSON answer to every submission attempt.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Envelope {
    fn sent() -> Self {
        Self {
            success: true,
            message: SENT_MESSAGE.to_owned(),
            errors: None,
            details: None,
        }
    }

    fn rejected(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            message: errors.to_string(),
            errors: Some(errors.into_messages()),
            details: None,
        }
    }

    fn failed(reason: String) -> Self {
        Self {
            success: false,
            message: reason.to_owned(),
            errors: None,
            details: Some(reason),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The body was not JSON at all.
    #[error("{0}")]
    Body(#[from] serde_json::Error),

    #[error(transparent)]
    Dispatch(#[from] novatech_notification::Error),
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        match self {
            ContactError::Validation(errors) => {
                tracing::info!(errors = ?errors.messages(), "contact submission rejected");

                (StatusCode::BAD_REQUEST, Json(Envelope::rejected(errors))).into_response()
            }
            err => {
                let reason = err.to_string();
                tracing::error!(err = %reason, "contact submission failed");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(Envelope::failed(reason)),
                )
                    .into_response()
            }
        }
    }
}

/// POST /api/contact
///
/// Rejected submissions never reach a provider; accepted ones are sent once,
/// without retry.
pub async fn action(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<Json<Envelope>, ContactError> {
    let body: serde_json::Value = serde_json::from_slice(&body)?;
    let submission = Submission::from_value(&body)?;

    app_state.dispatcher.dispatch(&submission).await?;

    Ok(Json(Envelope::sent()))
}

/// OPTIONS /api/contact
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_envelope_repeats_reason_as_details() {
        let value = serde_json::to_value(Envelope::failed("Unknown email service: x".into()))
            .unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "success": false,
                "message": "Unknown email service: x",
                "details": "Unknown email service: x",
            })
        );
    }

    #[test]
    fn test_rejected_envelope_lists_errors() {
        let errors = ValidationErrors::single(novatech_contact::INVALID_REQUEST_DATA);
        let value = serde_json::to_value(Envelope::rejected(errors)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "success": false,
                "message": "Validation failed",
                "errors": ["Invalid request data"],
            })
        );
    }

    #[test]
    fn test_sent_envelope_has_no_error_fields() {
        let value = serde_json::to_value(Envelope::sent()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "success": true, "message": SENT_MESSAGE })
        );
    }
}
