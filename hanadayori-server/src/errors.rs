use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use hanadayori_core::api::types::ErrorBody;
use hanadayori_core::{FetchFailed, LinkError};
use hanadayori_model::ModelError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
        });

        (self.status, body).into_response()
    }
}

// The cause was already logged by the gateway.
impl From<FetchFailed> for AppError {
    fn from(err: FetchFailed) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<LinkError> for AppError {
    fn from(err: LinkError) -> Self {
        match err {
            LinkError::TooLarge { .. } => {
                Self::payload_too_large(err.to_string())
            }
            LinkError::EmptyImageUrl => Self::bad_request(err.to_string()),
            LinkError::InvalidBase(_) => {
                tracing::error!(
                    error = %err,
                    "viewer URL cannot carry a share link"
                );
                Self::internal("Failed to build share link")
            }
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_)
            | JsonRejection::JsonSyntaxError(_) => {
                Self::bad_request(rejection.body_text())
            }
            other => Self::new(other.status(), other.body_text()),
        }
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        Self::bad_request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_errors_map_to_client_statuses() {
        let too_large = AppError::from(LinkError::TooLarge {
            len: 9000,
            limit: 8000,
        });
        assert_eq!(too_large.status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(too_large.message.contains("8000"));

        let empty = AppError::from(LinkError::EmptyImageUrl);
        assert_eq!(empty.status, StatusCode::BAD_REQUEST);

        let base = AppError::from(LinkError::InvalidBase("data:x".into()));
        assert_eq!(base.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn fetch_failures_keep_the_public_message() {
        let err = AppError::from(FetchFailed);
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Failed to fetch images");
    }
}
