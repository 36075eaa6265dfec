//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/expense/{entry_id}', use [format_endpoint].

/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/api/coffee";
/// The route for registering a new user.
pub const REGISTER: &str = "/api/users/register";
/// The route for logging in a user.
pub const LOG_IN: &str = "/api/users/login";

/// The route to create an expense.
pub const EXPENSES: &str = "/api/expense";
/// The route to list every user's expenses.
pub const ALL_EXPENSES: &str = "/api/expense/all";
/// The route to get, update or delete a single expense.
pub const EXPENSE: &str = "/api/expense/{entry_id}";
/// The route to list a user's expenses.
pub const USER_EXPENSES: &str = "/api/expense/user/{user_id}";

/// The route to create an income.
pub const INCOMES: &str = "/api/income";
/// The route to list every user's incomes.
pub const ALL_INCOMES: &str = "/api/income/all";
/// The route to get, update or delete a single income.
pub const INCOME: &str = "/api/income/{entry_id}";
/// The route to list a user's incomes.
pub const USER_INCOMES: &str = "/api/income/user/{user_id}";

/// The route for a user's summary statistics.
pub const STATS: &str = "/api/stats/{user_id}";
/// The route for a user's chart data over the last four weeks.
pub const STATS_CHART: &str = "/api/stats/{user_id}/chart";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/stats/{user_id}', '{user_id}' is the parameter.
///
/// This function assumes that an endpoint path contains a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
