//! Checking a user's credentials.
//!
//! A successful log-in simply returns the user; no session or token is issued.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error, User, auth::AuthState, db::lock_connection, extract::JsonBody, get_user_by_username,
};

/// The raw data entered by the user to log in.
///
/// The password is stored as a plain string. There is no need for validation here since
/// it will be compared against the password hash in the database.
#[derive(Clone, Serialize, Deserialize)]
pub struct LogInForm {
    pub username: String,
    pub password: String,
}

/// Return `user` if `raw_password` matches their password hash.
///
/// This does not touch the database, so the slow bcrypt check can run without
/// holding the connection lock.
///
/// # Errors
///
/// This function will return a:
/// - [Error::InvalidCredentials] if the password is wrong,
/// - [Error::HashingError] if the stored hash could not be checked.
pub fn check_password(user: User, raw_password: &str) -> Result<User, Error> {
    let is_password_valid = user
        .password_hash
        .verify(raw_password)
        .map_err(|error| Error::HashingError(error.to_string()))?;

    if !is_password_valid {
        return Err(Error::InvalidCredentials);
    }

    Ok(user)
}

/// Handler for log-in requests via the POST method.
///
/// Responds with the user on success. An unknown username or a wrong
/// password both respond with 401.
pub async fn post_log_in(
    State(state): State<AuthState>,
    JsonBody(form): JsonBody<LogInForm>,
) -> Response {
    let user = {
        let connection = match lock_connection(&state.db_connection) {
            Ok(connection) => connection,
            Err(error) => return error.into_response(),
        };

        get_user_by_username(&form.username, &connection)
    };

    match user.and_then(|user| check_password(user, &form.password)) {
        Ok(user) => {
            tracing::info!("User {} logged in", user.id);
            Json(user).into_response()
        }
        Err(error) => {
            tracing::info!("Log-in failed for {:?}: {error}", form.username);
            error.into_response()
        }
    }
}
