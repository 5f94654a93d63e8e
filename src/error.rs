//! Domain error types for the administration center backend
//!
//! Errors are structured internally for logging/debugging but provide
//! generic responses to clients to avoid leaking sensitive information.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Top-level backend error type
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Session store error: {0}")]
    SessionStore(#[from] tower_sessions::session_store::Error),

    #[error("Background task error: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing {0} while parsing database uri")]
    MissingComponent(&'static str),

    #[error("Unknown database scheme: {0}")]
    UnknownScheme(String),

    #[error("Malformed database uri: {0}")]
    MalformedUri(String),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("User already exists: {0}")]
    UserExists(String),

    #[error("Password hash error: {0}")]
    Hash(#[from] argon2::password_hash::Error),

    #[error("Invalid hash parameters: {0}")]
    Params(#[from] argon2::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AdminError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminError::Auth(AuthError::UserExists(_)) => StatusCode::CONFLICT,
            AdminError::Auth(AuthError::UserNotFound(_)) => StatusCode::UNAUTHORIZED,
            AdminError::Auth(AuthError::Hash(_)) => StatusCode::UNAUTHORIZED,
            AdminError::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,

            AdminError::Database(_) | AdminError::Migrate(_) => StatusCode::SERVICE_UNAVAILABLE,

            AdminError::Config(_)
            | AdminError::Session(_)
            | AdminError::SessionStore(_)
            | AdminError::Task(_)
            | AdminError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a client-safe response message (generic, no internal details)
    pub fn client_message(&self) -> &'static str {
        match self {
            AdminError::Auth(AuthError::UserExists(_)) => "User already exists",
            AdminError::Auth(_) => "Authentication failed",

            AdminError::Database(_) | AdminError::Migrate(_) => "Service temporarily unavailable",

            AdminError::Config(_)
            | AdminError::Session(_)
            | AdminError::SessionStore(_)
            | AdminError::Task(_)
            | AdminError::Io(_) => "Internal server error",
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (self.status_code(), self.client_message()).into_response()
    }
}
