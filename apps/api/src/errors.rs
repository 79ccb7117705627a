use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::parsing::ParseError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant is recoverable: the client retries the upload, re-selects a
/// template, or carries on editing by hand.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    FileTooLarge(String),

    #[error("{0}")]
    ParseFailure(String),

    #[error("No template selected")]
    MissingTemplateSelection,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        let message = err.to_string();
        match err {
            ParseError::UnsupportedFormat { .. } => AppError::UnsupportedFormat(message),
            ParseError::FileTooLarge { .. } => AppError::FileTooLarge(message),
            ParseError::ParseFailure(_) => AppError::ParseFailure(message),
        }
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::UnsupportedFormat(msg) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
                msg.clone(),
            ),
            AppError::FileTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "FILE_TOO_LARGE", msg.clone())
            }
            AppError::ParseFailure(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "PARSE_FAILURE",
                msg.clone(),
            ),
            AppError::MissingTemplateSelection => (
                StatusCode::BAD_REQUEST,
                "MISSING_TEMPLATE_SELECTION",
                "Please select a template before opening the editor".to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::MAX_UPLOAD_BYTES;

    #[test]
    fn test_parse_errors_map_to_distinct_statuses() {
        let cases = [
            (
                ParseError::UnsupportedFormat {
                    declared_type: "image/png".to_string(),
                },
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FORMAT",
            ),
            (
                ParseError::FileTooLarge {
                    size: MAX_UPLOAD_BYTES + 1,
                    limit: MAX_UPLOAD_BYTES,
                },
                StatusCode::PAYLOAD_TOO_LARGE,
                "FILE_TOO_LARGE",
            ),
            (
                ParseError::ParseFailure("bad".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
                "PARSE_FAILURE",
            ),
        ];

        for (err, status, code) in cases {
            let (actual_status, actual_code, _) = AppError::from(err).parts();
            assert_eq!(actual_status, status);
            assert_eq!(actual_code, code);
        }
    }

    #[test]
    fn test_unsupported_format_message_names_the_type() {
        let err = AppError::from(ParseError::UnsupportedFormat {
            declared_type: "image/png".to_string(),
        });
        assert!(err.to_string().contains("image/png"));
    }

    #[test]
    fn test_missing_template_is_bad_request() {
        let (status, code, _) = AppError::MissingTemplateSelection.parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(code, "MISSING_TEMPLATE_SELECTION");
    }
}
