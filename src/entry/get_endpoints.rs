//! Defines the endpoints for fetching expenses and incomes.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    UserID,
    db::lock_connection,
    entry::{EntryId, EntryState, Ledger, get_all_entries, get_entries_by_user, get_entry},
};

/// A route handler for getting a single entry in the ledger `L` by its ID.
///
/// Responds with 404 if the entry does not exist.
pub async fn get_entry_endpoint<L: Ledger>(
    State(state): State<EntryState>,
    Path(entry_id): Path<EntryId>,
) -> Response {
    let connection = match lock_connection(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_response(),
    };

    get_entry(L::KIND, entry_id, &connection)
        .map(Json)
        .into_response()
}

/// A route handler for getting all of a user's entries in the ledger `L`,
/// newest first.
pub async fn get_entries_by_user_endpoint<L: Ledger>(
    State(state): State<EntryState>,
    Path(user_id): Path<UserID>,
) -> Response {
    let connection = match lock_connection(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_response(),
    };

    get_entries_by_user(L::KIND, user_id, &connection)
        .map(Json)
        .into_response()
}

/// A route handler for getting every entry in the ledger `L` across all
/// users, newest first.
pub async fn get_all_entries_endpoint<L: Ledger>(State(state): State<EntryState>) -> Response {
    let connection = match lock_connection(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_response(),
    };

    get_all_entries(L::KIND, &connection)
        .map(Json)
        .into_response()
}
