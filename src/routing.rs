//! Application router configuration.

use axum::{
    Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::{
    AppState,
    auth::{post_log_in, post_register},
    endpoints,
    entry::{
        Expenses, Incomes, create_entry_endpoint, delete_entry_endpoint, edit_entry_endpoint,
        get_all_entries_endpoint, get_entries_by_user_endpoint, get_entry_endpoint,
    },
    logging::logging_middleware,
    not_found::get_404_not_found,
    stats::{get_chart_endpoint, get_stats_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route(endpoints::REGISTER, post(post_register))
        .route(endpoints::LOG_IN, post(post_log_in));

    let expense_routes = Router::new()
        .route(endpoints::EXPENSES, post(create_entry_endpoint::<Expenses>))
        .route(endpoints::ALL_EXPENSES, get(get_all_entries_endpoint::<Expenses>))
        .route(
            endpoints::EXPENSE,
            get(get_entry_endpoint::<Expenses>)
                .put(edit_entry_endpoint::<Expenses>)
                .delete(delete_entry_endpoint::<Expenses>),
        )
        .route(
            endpoints::USER_EXPENSES,
            get(get_entries_by_user_endpoint::<Expenses>),
        );

    let income_routes = Router::new()
        .route(endpoints::INCOMES, post(create_entry_endpoint::<Incomes>))
        .route(endpoints::ALL_INCOMES, get(get_all_entries_endpoint::<Incomes>))
        .route(
            endpoints::INCOME,
            get(get_entry_endpoint::<Incomes>)
                .put(edit_entry_endpoint::<Incomes>)
                .delete(delete_entry_endpoint::<Incomes>),
        )
        .route(
            endpoints::USER_INCOMES,
            get(get_entries_by_user_endpoint::<Incomes>),
        );

    let stats_routes = Router::new()
        .route(endpoints::STATS, get(get_stats_endpoint))
        .route(endpoints::STATS_CHART, get(get_chart_endpoint));

    Router::new()
        .route(endpoints::COFFEE, get(get_coffee))
        .merge(user_routes)
        .merge(expense_routes)
        .merge(income_routes)
        .merge(stats_routes)
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, "I'm a teapot").into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        AppState, Entry, UserID, endpoints,
        endpoints::format_endpoint,
        stats::{ChartData, Stats},
    };

    use super::build_router;

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state =
            AppState::new(connection, "Etc/UTC", 4).expect("Could not create app state.");

        TestServer::new(build_router(state)).expect("Could not create test server.")
    }

    async fn register_and_log_in(server: &TestServer, username: &str) -> UserID {
        server
            .post(endpoints::REGISTER)
            .json(&json!({
                "username": username,
                "email": format!("{username}@example.com"),
                "password": "hunter2",
            }))
            .await
            .assert_status_ok();

        let response = server
            .post(endpoints::LOG_IN)
            .json(&json!({ "username": username, "password": "hunter2" }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["username"], username);
        assert!(body.get("password_hash").is_none());
        assert!(body.get("password").is_none());

        serde_json::from_value(body["id"].clone()).expect("Could not parse user ID.")
    }

    #[tokio::test]
    async fn coffee_is_teapot() {
        let server = get_test_server();

        server
            .get(endpoints::COFFEE)
            .await
            .assert_status(StatusCode::IM_A_TEAPOT);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        let response = server.get("/api/nope").await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn log_in_with_wrong_password_is_unauthorized() {
        let server = get_test_server();
        register_and_log_in(&server, "alice").await;

        server
            .post(endpoints::LOG_IN)
            .json(&json!({ "username": "alice", "password": "wrong" }))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn registering_taken_username_is_bad_request() {
        let server = get_test_server();
        register_and_log_in(&server, "alice").await;

        server
            .post(endpoints::REGISTER)
            .json(&json!({
                "username": "alice",
                "email": "other@example.com",
                "password": "hunter3",
            }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn creating_entry_for_unknown_user_is_bad_request() {
        let server = get_test_server();

        server
            .post(endpoints::EXPENSES)
            .json(&json!({
                "title": "Lunch",
                "category": "Food",
                "date": "2024-06-03",
                "amount": 15,
                "user_id": 42,
            }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn expense_with_missing_field_is_bad_request_with_json_error() {
        let server = get_test_server();
        let user_id = register_and_log_in(&server, "alice").await;

        let response = server
            .post(endpoints::EXPENSES)
            .json(&json!({
                "category": "Food",
                "date": "2024-06-03",
                "amount": 15,
                "user_id": user_id,
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("title"));
    }

    #[tokio::test]
    async fn income_with_invalid_date_is_bad_request_with_json_error() {
        let server = get_test_server();
        let user_id = register_and_log_in(&server, "alice").await;

        let response = server
            .post(endpoints::INCOMES)
            .json(&json!({
                "title": "Salary",
                "category": "Work",
                "date": "2024-13-01",
                "amount": 4000,
                "user_id": user_id,
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn amount_out_of_range_is_bad_request() {
        let server = get_test_server();
        let user_id = register_and_log_in(&server, "alice").await;

        let response = server
            .post(endpoints::EXPENSES)
            .json(&json!({
                "title": "Yacht",
                "category": "Leisure",
                "date": "2024-06-03",
                "amount": i64::MAX,
                "user_id": user_id,
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn edit_with_malformed_body_is_bad_request() {
        let server = get_test_server();
        let user_id = register_and_log_in(&server, "alice").await;
        let created: Entry = server
            .post(endpoints::EXPENSES)
            .json(&json!({
                "title": "Lunch",
                "category": "Food",
                "date": "2024-06-03",
                "amount": 15,
                "user_id": user_id,
            }))
            .await
            .json();

        let response = server
            .put(&format_endpoint(endpoints::EXPENSE, created.id))
            .json(&json!({ "title": "Dinner" }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn register_and_log_in_with_missing_fields_are_bad_request() {
        let server = get_test_server();

        let response = server
            .post(endpoints::REGISTER)
            .json(&json!({ "username": "alice" }))
            .await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("email"));

        let response = server
            .post(endpoints::LOG_IN)
            .json(&json!({ "username": "alice" }))
            .await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("password"));
    }

    #[tokio::test]
    async fn expense_crud_flow() {
        let server = get_test_server();
        let user_id = register_and_log_in(&server, "alice").await;

        let response = server
            .post(endpoints::EXPENSES)
            .json(&json!({
                "title": "Lunch",
                "description": "Sandwich",
                "category": "Food",
                "date": "2024-06-03",
                "amount": 15,
                "user_id": user_id,
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: Entry = response.json();
        assert_eq!(created.title, "Lunch");
        assert_eq!(created.user_id, user_id);

        let expense_uri = format_endpoint(endpoints::EXPENSE, created.id);
        let got: Entry = server.get(&expense_uri).await.json();
        assert_eq!(got, created);

        let response = server
            .put(&expense_uri)
            .json(&json!({
                "title": "Dinner",
                "category": "Food",
                "date": "2024-06-04",
                "amount": 40,
                "user_id": user_id,
            }))
            .await;
        response.assert_status_ok();
        let updated: Entry = response.json();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Dinner");
        assert_eq!(updated.description, None);
        assert_eq!(updated.amount, 40);

        let listed: Vec<Entry> = server
            .get(&format_endpoint(endpoints::USER_EXPENSES, user_id.as_i64()))
            .await
            .json();
        assert_eq!(listed, [updated.clone()]);
        let all: Vec<Entry> = server.get(endpoints::ALL_EXPENSES).await.json();
        assert_eq!(all, [updated]);

        server.delete(&expense_uri).await.assert_status_ok();

        let response = server.get(&expense_uri).await;
        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(
            body["error"],
            format!("Expense not found with id: {}", created.id)
        );
    }

    #[tokio::test]
    async fn income_and_expense_ids_are_separate() {
        let server = get_test_server();
        let user_id = register_and_log_in(&server, "alice").await;

        let income: Entry = server
            .post(endpoints::INCOMES)
            .json(&json!({
                "title": "Salary",
                "category": "Job",
                "date": "2024-06-01",
                "amount": 4000,
                "user_id": user_id,
            }))
            .await
            .json();

        server
            .get(&format_endpoint(endpoints::INCOME, income.id))
            .await
            .assert_status_ok();
        server
            .get(&format_endpoint(endpoints::EXPENSE, income.id))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn stats_and_chart_reflect_entries() {
        let server = get_test_server();
        let user_id = register_and_log_in(&server, "alice").await;
        for (uri, amount) in [(endpoints::INCOMES, 100), (endpoints::EXPENSES, 30)] {
            server
                .post(uri)
                .json(&json!({
                    "title": "Entry",
                    "category": "Misc",
                    "date": "2020-01-01",
                    "amount": amount,
                    "user_id": user_id,
                }))
                .await
                .assert_status(StatusCode::CREATED);
        }

        let stats: Stats = server
            .get(&format_endpoint(endpoints::STATS, user_id.as_i64()))
            .await
            .json();
        assert_eq!(stats.income, 100);
        assert_eq!(stats.expense, 30);
        assert_eq!(stats.balance, 70);
        assert_eq!(stats.min_income, Some(100));
        assert_eq!(stats.max_expense, Some(30));

        // The entries are dated long before the chart window.
        let chart: ChartData = server
            .get(&format_endpoint(endpoints::STATS_CHART, user_id.as_i64()))
            .await
            .json();
        assert!(chart.expense_list.is_empty());
        assert!(chart.income_list.is_empty());
    }
}
