use crate::services::providers::ProviderError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),

    #[error("Upstream error: {0}")]
    Upstream(#[from] ProviderError),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        // The inbound contract fixes 400 for incomplete requests, so
        // validation failures map to BAD_REQUEST rather than 422.
        let (status, error_message) = match self {
            AppError::ValidationError(err) => {
                (StatusCode::BAD_REQUEST, validation_message(&err))
            }
            AppError::BadRequest(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method Not Allowed".to_string(),
            ),
            AppError::ConfigError(err) => {
                tracing::error!(error = %err, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Server configuration error: {}", err),
                )
            }
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "Upstream generation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::InternalError(err) => {
                tracing::error!(error = %err, "Unhandled error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
            }),
        )
            .into_response()
    }
}

/// Flatten validator output into the single-line message the error body
/// carries, e.g. "brand is required; industry is required".
fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            errs.first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "brand is required"))]
        brand: String,
        #[validate(length(min = 1, message = "industry is required"))]
        industry: String,
    }

    #[test]
    fn validation_message_lists_all_missing_fields() {
        let probe = Probe {
            brand: String::new(),
            industry: String::new(),
        };
        let errs = probe.validate().unwrap_err();
        assert_eq!(
            validation_message(&errs),
            "brand is required; industry is required"
        );
    }

    #[test]
    fn method_not_allowed_maps_to_405() {
        let response = AppError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
