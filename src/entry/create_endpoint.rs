//! Defines the endpoint for creating an expense or income.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    db::lock_connection,
    entry::{EntryForm, EntryState, Ledger, create_entry},
    extract::JsonBody,
};

/// A route handler for creating a new entry in the ledger `L`.
///
/// Responds with 201 and the created entry, or 400 if `form.user_id` does
/// not refer to a registered user.
pub async fn create_entry_endpoint<L: Ledger>(
    State(state): State<EntryState>,
    JsonBody(form): JsonBody<EntryForm>,
) -> Response {
    let connection = match lock_connection(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_response(),
    };

    match create_entry(L::KIND, &form, &connection) {
        Ok(entry) => {
            tracing::debug!("Created {} {} for user {}", L::KIND, entry.id, entry.user_id);
            (StatusCode::CREATED, Json(entry)).into_response()
        }
        Err(error) => {
            tracing::warn!("Could not create {}: {error}", L::KIND);
            error.into_response()
        }
    }
}
