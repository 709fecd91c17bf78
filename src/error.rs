use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Authentication failed")]
    AuthError,
    #[error("Not found")]
    NotFound,
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

// Rejections carry no body: the original API contract distinguishes outcomes
// by status code alone. Storage failures surface like any other rejection.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Database(e) => {
                tracing::error!(error = %e, "Database error");
                StatusCode::BAD_REQUEST
            }
            Self::AuthError => {
                tracing::debug!("Authentication failed");
                StatusCode::UNAUTHORIZED
            }
            Self::NotFound => {
                tracing::debug!("Update target not found");
                StatusCode::BAD_REQUEST
            }
            Self::BadRequest(msg) => {
                tracing::debug!(message = %msg, "Bad request");
                StatusCode::BAD_REQUEST
            }
        };

        status.into_response()
    }
}
