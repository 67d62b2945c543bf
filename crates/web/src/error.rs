use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use serve_stats::TrackerError;
use std::fmt;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Tracker(TrackerError),
    Validation(ValidationErrors),
    Unauthorized,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tracker(e) => write!(f, "Tracker error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::Unauthorized => write!(f, "Unauthorized"),
        }
    }
}

impl WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Tracker(TrackerError::InvalidServeOrder(_)) | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            // the command is valid but the match is not in a state to accept it
            Self::Tracker(TrackerError::ServerNotSet | TrackerError::SetInProgress { .. }) => {
                StatusCode::CONFLICT
            }
            Self::Tracker(TrackerError::Export(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

/// One `field: message` line per failed rule.
fn validation_details(errors: &ValidationErrors) -> Vec<String> {
    let mut details: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| match &e.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();
    details.sort();
    details
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::Tracker(e) if e.is_client_error() => {
                tracing::warn!("Rejected command: {}", e);
                json!({ "error": e.to_string() })
            }
            Self::Tracker(e) => {
                tracing::error!("Tracker error: {:?}", e);
                json!({ "error": "An internal error occurred" })
            }
            Self::Validation(errors) => json!({
                "error": "Validation failed",
                "details": validation_details(errors)
            }),
            Self::Unauthorized => json!({ "error": "Unauthorized" }),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<TrackerError> for WebError {
    fn from(error: TrackerError) -> Self {
        Self::Tracker(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}
