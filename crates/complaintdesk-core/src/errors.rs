//! Application error taxonomy and its HTTP mapping.
//!
//! Every fallible operation in the workspace returns [`AppError`]. Handlers
//! return it directly and axum turns it into a plain-text response through
//! the [`IntoResponse`] implementation below.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Signup with an email that is already registered.
    #[error("Student already exists")]
    DuplicateUser,

    /// Unknown account or password mismatch. `account` is the account kind
    /// shown to the caller ("student" or "admin").
    #[error("Invalid {account} credentials")]
    InvalidCredentials { account: &'static str },

    /// Caller's session does not carry the role the operation requires.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Internal(err.into())
    }

    pub fn invalid_student_credentials() -> Self {
        Self::InvalidCredentials { account: "student" }
    }

    pub fn invalid_admin_credentials() -> Self {
        Self::InvalidCredentials { account: "admin" }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::DuplicateUser => StatusCode::CONFLICT,
            Self::InvalidCredentials { .. } => StatusCode::UNAUTHORIZED,
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Database(_) | Self::Migration(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Whether the error is a server-side failure whose details must stay in the logs.
    pub fn is_internal(&self) -> bool {
        self.status().is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if self.is_internal() {
            tracing::error!(error = ?self, "request failed");
            return (status, "Internal Server Error").into_response();
        }

        (status, self.to_string()).into_response()
    }
}
