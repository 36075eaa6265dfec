//! The state shared by the expense and income route handlers.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::AppState;

/// The state needed to manage expenses and incomes.
#[derive(Debug, Clone)]
pub struct EntryState {
    /// The database connection for managing entries.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for EntryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}
