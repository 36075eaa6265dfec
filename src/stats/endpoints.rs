//! Defines the endpoints for a user's summary statistics and chart data.

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error, UserID,
    db::lock_connection,
    stats::{StatsState, get_chart_data, get_stats},
    timezone::get_local_today,
};

/// A route handler for the totals, balance, latest entries and min/max
/// amounts of a user.
pub async fn get_stats_endpoint(
    State(state): State<StatsState>,
    Path(user_id): Path<UserID>,
) -> Response {
    let connection = match lock_connection(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_response(),
    };

    tracing::info!("Fetching stats for user {user_id}");

    get_stats(user_id, &connection).map(Json).into_response()
}

/// A route handler for a user's expenses and incomes over the last four weeks.
///
/// "Today" is taken in the server's local timezone.
pub async fn get_chart_endpoint(
    State(state): State<StatsState>,
    Path(user_id): Path<UserID>,
) -> Response {
    let Some(today) = get_local_today(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Error::InvalidTimezoneError(state.local_timezone).into_response();
    };

    let connection = match lock_connection(&state.db_connection) {
        Ok(connection) => connection,
        Err(error) => return error.into_response(),
    };

    get_chart_data(user_id, today, &connection)
        .map(Json)
        .into_response()
}
