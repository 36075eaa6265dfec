//! Defines the endpoint for deleting an expense or income.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    db::lock_connection,
    entry::{EntryId, EntryState, Ledger, delete_entry},
};

/// A route handler for deleting an entry in the ledger `L`.
///
/// Responds with an empty 200 on success, or 404 if the entry does not exist.
pub async fn delete_entry_endpoint<L: Ledger>(
    State(state): State<EntryState>,
    Path(entry_id): Path<EntryId>,
) -> Response {
    let connection = match lock_connection(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_response(),
    };

    match delete_entry(L::KIND, entry_id, &connection) {
        Ok(()) => {
            tracing::debug!("Deleted {} {entry_id}", L::KIND);
            StatusCode::OK.into_response()
        }
        Err(error) => {
            tracing::warn!("Could not delete {} {entry_id}: {error}", L::KIND);
            error.into_response()
        }
    }
}
