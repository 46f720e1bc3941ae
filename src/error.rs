use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::auth::dto::StatusResponse;

/// Every way a credential operation can fail.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("request payload is missing or malformed")]
    InvalidInput,

    #[error("email is outside the institutional domain")]
    DomainRejected,

    #[error("email already registered")]
    DuplicateEmail,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::InvalidInput | AuthError::DomainRejected | AuthError::DuplicateEmail => {
                StatusCode::BAD_REQUEST
            }
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Never includes driver text.
    pub fn public_message(&self) -> &'static str {
        match self {
            AuthError::InvalidInput => "Invalid JSON",
            AuthError::DomainRejected => "Please use your BMCC student email",
            AuthError::DuplicateEmail => "Email already registered",
            AuthError::InvalidCredentials => "Invalid credentials",
            AuthError::Database(_) | AuthError::Internal(_) => "Database error",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        if self.status().is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (
            self.status(),
            Json(StatusResponse::error(self.public_message())),
        )
            .into_response()
    }
}
