//! Registering new users.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::{
    Error, PasswordHash, auth::AuthState, create_user, db::lock_connection, extract::JsonBody,
};

/// The body returned after a user registers.
pub const REGISTRATION_SUCCESS_MESSAGE: &str = "User registered successfully!";

/// The data a client sends to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A checked registration with its password already hashed, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: PasswordHash,
}

/// Check `form` and hash its password.
///
/// This does not touch the database, so the slow hashing step can run without
/// holding the connection lock.
///
/// # Errors
///
/// This function will return a:
/// - [Error::InvalidArgument] if the username or password is empty,
/// - [Error::HashingError] if the password could not be hashed.
pub fn prepare_new_user(form: &RegisterForm, password_cost: u32) -> Result<NewUser, Error> {
    let username = form.username.trim();

    if username.is_empty() {
        return Err(Error::InvalidArgument("username cannot be empty".to_owned()));
    }

    if form.password.is_empty() {
        return Err(Error::InvalidArgument("password cannot be empty".to_owned()));
    }

    Ok(NewUser {
        username: username.to_owned(),
        email: form.email.clone(),
        password_hash: PasswordHash::new(&form.password, password_cost)?,
    })
}

/// A route handler for registering a new user.
///
/// Responds with a plain text success message. No session is started, the
/// client should log in afterwards.
pub async fn post_register(
    State(state): State<AuthState>,
    JsonBody(form): JsonBody<RegisterForm>,
) -> Response {
    let new_user = match prepare_new_user(&form, state.password_cost) {
        Ok(new_user) => new_user,
        Err(error) => {
            tracing::warn!("Could not register user {:?}: {error}", form.username);
            return error.into_response();
        }
    };

    let connection = match lock_connection(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_response(),
    };

    match create_user(
        &new_user.username,
        &new_user.email,
        new_user.password_hash,
        &connection,
    ) {
        Ok(user) => {
            tracing::info!("Registered user {} ({})", user.username, user.id);
            (StatusCode::OK, REGISTRATION_SUCCESS_MESSAGE).into_response()
        }
        Err(error) => {
            tracing::warn!("Could not register user {:?}: {error}", new_user.username);
            error.into_response()
        }
    }
}
