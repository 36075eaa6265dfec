//! Defines the endpoint for overwriting an expense or income.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    db::lock_connection,
    entry::{EntryForm, EntryId, EntryState, Ledger, update_entry},
    extract::JsonBody,
};

/// A route handler for overwriting every field of an entry in the ledger `L`.
///
/// Responds with the updated entry, or 404 if the entry does not exist.
pub async fn edit_entry_endpoint<L: Ledger>(
    State(state): State<EntryState>,
    Path(entry_id): Path<EntryId>,
    JsonBody(form): JsonBody<EntryForm>,
) -> Response {
    let connection = match lock_connection(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_response(),
    };

    match update_entry(L::KIND, entry_id, &form, &connection) {
        Ok(entry) => Json(entry).into_response(),
        Err(error) => {
            tracing::warn!("Could not update {} {entry_id}: {error}", L::KIND);
            error.into_response()
        }
    }
}
