//! FinFlow is a web backend for tracking personal finances.
//!
//! This library provides a JSON REST API for recording expenses and incomes
//! per user, registering and logging in users, and summarising a user's
//! finances.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod auth;
mod database_id;
mod db;
pub mod endpoints;
mod entry;
mod extract;
mod logging;
mod not_found;
mod password;
mod routing;
mod stats;
#[cfg(test)]
mod test_utils;
mod timezone;
mod user;

pub use app_state::AppState;
pub use database_id::DatabaseId;
pub use db::initialize as initialize_db;
pub use entry::{Entry, EntryForm, EntryId, EntryKind, create_entry};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use password::PasswordHash;
pub use routing::build_router;
pub use timezone::{get_local_offset, get_local_today};
pub use user::{User, UserID, create_user, get_user_by_username};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The password did not match the stored password hash.
    #[error("invalid password")]
    InvalidCredentials,

    /// There is no user with the given username.
    ///
    /// The log-in route reports this the same way as [Error::InvalidCredentials].
    #[error("user not found")]
    UserNotFound,

    /// The username is already taken by another user.
    #[error("the username \"{0}\" is already taken")]
    DuplicateUsername(String),

    /// The client sent a value that cannot be used, e.g. an empty username.
    #[error("{0}")]
    InvalidArgument(String),

    /// The user ID given for an entry does not refer to a registered user.
    #[error("the user ID {0} does not refer to a registered user")]
    InvalidUser(UserID),

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    /// When communicating with the application client this error should be
    /// replaced with a general error type indicating an internal server error.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// The expense or income with the given ID does not exist.
    #[error("{0} not found with id: {1}")]
    EntryNotFound(EntryKind, EntryId),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::EntryNotFound(_, _) => StatusCode::NOT_FOUND,
            Error::InvalidCredentials | Error::UserNotFound => StatusCode::UNAUTHORIZED,
            Error::DuplicateUsername(_) | Error::InvalidArgument(_) | Error::InvalidUser(_) => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Internal errors are not intended to be shown to the client.
            tracing::error!("An unexpected error occurred: {}", self);
            "An internal error occurred, check the server logs for more details.".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
