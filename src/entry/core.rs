//! The expense and income records, and the queries that store and fetch them.
//!
//! Expenses and incomes have exactly the same shape, so both are stored as an
//! [Entry] in their own table, selected by [EntryKind].

use std::{fmt::Display, ops::RangeInclusive};

use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{DatabaseId, Error, UserID};

/// Alias for the integer type used for expense and income IDs.
pub type EntryId = DatabaseId;

/// Which of the two ledgers an [Entry] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Money spent.
    Expense,
    /// Money received.
    Income,
}

impl EntryKind {
    fn table_name(self) -> &'static str {
        match self {
            EntryKind::Expense => "expense",
            EntryKind::Income => "income",
        }
    }
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Expense => write!(f, "Expense"),
            EntryKind::Income => write!(f, "Income"),
        }
    }
}

/// Selects an [EntryKind] at the type level so that one set of route handlers
/// can serve both the expense and the income routes.
pub trait Ledger: Send + Sync + 'static {
    /// The kind of entry the handlers operate on.
    const KIND: EntryKind;
}

/// The expense ledger.
pub struct Expenses;

impl Ledger for Expenses {
    const KIND: EntryKind = EntryKind::Expense;
}

/// The income ledger.
pub struct Incomes;

impl Ledger for Incomes {
    const KIND: EntryKind = EntryKind::Income;
}

/// A dated, categorised amount of money spent or received by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The ID of the entry within its ledger.
    pub id: EntryId,
    /// A short name for the entry.
    pub title: String,
    /// Optional free text.
    pub description: Option<String>,
    /// The category name, e.g. "Groceries".
    pub category: String,
    /// When the money was spent or received.
    pub date: Date,
    /// The amount of money. No sign convention is enforced.
    ///
    /// Stored as a 32-bit integer so that totals can be summed into an `i64`
    /// without overflowing.
    pub amount: i32,
    /// The user that owns the entry.
    pub user_id: UserID,
}

/// The client-facing data for creating or overwriting an [Entry].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryForm {
    /// A short name for the entry.
    pub title: String,
    /// Optional free text.
    #[serde(default)]
    pub description: Option<String>,
    /// The category name.
    pub category: String,
    /// When the money was spent or received.
    pub date: Date,
    /// The amount of money.
    pub amount: i32,
    /// The user that owns the entry.
    pub user_id: UserID,
}

/// Create the table for `kind`.
///
/// The user table must exist first.
///
/// # Errors
///
/// This function will return an error if the SQL query failed.
pub fn create_entry_table(
    kind: EntryKind,
    connection: &Connection,
) -> Result<(), rusqlite::Error> {
    let table = kind.table_name();

    connection.execute(
        &format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT,
                category TEXT NOT NULL,
                date TEXT NOT NULL,
                amount INTEGER NOT NULL,
                user_id INTEGER NOT NULL,
                FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
            )"
        ),
        (),
    )?;

    connection.execute(
        &format!("CREATE INDEX IF NOT EXISTS idx_{table}_user_date ON {table}(user_id, date)"),
        (),
    )?;

    Ok(())
}

fn map_row_to_entry(row: &Row) -> Result<Entry, rusqlite::Error> {
    Ok(Entry {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        category: row.get(3)?,
        date: row.get(4)?,
        amount: row.get(5)?,
        user_id: UserID::new(row.get(6)?),
    })
}

const COLUMNS: &str = "id, title, description, category, date, amount, user_id";

/// Map a failed foreign key constraint on `user_id` to [Error::InvalidUser].
fn map_write_error(error: rusqlite::Error, user_id: UserID) -> Error {
    match error {
        // Code 787 occurs when a FOREIGN KEY constraint failed.
        rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 787 => {
            Error::InvalidUser(user_id)
        }
        error => error.into(),
    }
}

/// Create a new entry of `kind` from `form`.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidUser] if `form.user_id` does not refer to a registered user,
/// - [Error::SqlError] if there is some other SQL error.
pub fn create_entry(
    kind: EntryKind,
    form: &EntryForm,
    connection: &Connection,
) -> Result<Entry, Error> {
    connection
        .prepare(&format!(
            "INSERT INTO {} (title, description, category, date, amount, user_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {COLUMNS}",
            kind.table_name()
        ))?
        .query_row(
            params![
                form.title,
                form.description,
                form.category,
                form.date,
                form.amount,
                form.user_id.as_i64(),
            ],
            map_row_to_entry,
        )
        .map_err(|error| map_write_error(error, form.user_id))
}

/// Retrieve the entry of `kind` with the given `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::EntryNotFound] if `id` does not refer to a stored entry,
/// - [Error::SqlError] if there is some other SQL error.
pub fn get_entry(kind: EntryKind, id: EntryId, connection: &Connection) -> Result<Entry, Error> {
    connection
        .prepare(&format!(
            "SELECT {COLUMNS} FROM {} WHERE id = :id",
            kind.table_name()
        ))?
        .query_row(&[(":id", &id)], map_row_to_entry)
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::EntryNotFound(kind, id),
            error => error.into(),
        })
}

/// Retrieve every entry of `kind` owned by `user_id`, newest first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is a SQL error.
pub fn get_entries_by_user(
    kind: EntryKind,
    user_id: UserID,
    connection: &Connection,
) -> Result<Vec<Entry>, Error> {
    connection
        .prepare(&format!(
            "SELECT {COLUMNS} FROM {} WHERE user_id = :user_id ORDER BY date DESC, id DESC",
            kind.table_name()
        ))?
        .query_map(&[(":user_id", &user_id.as_i64())], map_row_to_entry)?
        .map(|maybe_entry| maybe_entry.map_err(Error::from))
        .collect()
}

/// Retrieve every entry of `kind` across all users, newest first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is a SQL error.
pub fn get_all_entries(kind: EntryKind, connection: &Connection) -> Result<Vec<Entry>, Error> {
    connection
        .prepare(&format!(
            "SELECT {COLUMNS} FROM {} ORDER BY date DESC, id DESC",
            kind.table_name()
        ))?
        .query_map([], map_row_to_entry)?
        .map(|maybe_entry| maybe_entry.map_err(Error::from))
        .collect()
}

/// Retrieve the entries of `kind` owned by `user_id` that fall within
/// `date_range` (inclusive), oldest first.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is a SQL error.
pub fn get_entries_in_date_range(
    kind: EntryKind,
    user_id: UserID,
    date_range: RangeInclusive<Date>,
    connection: &Connection,
) -> Result<Vec<Entry>, Error> {
    connection
        .prepare(&format!(
            "SELECT {COLUMNS} FROM {}
             WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
             ORDER BY date ASC, id ASC",
            kind.table_name()
        ))?
        .query_map(
            params![user_id.as_i64(), date_range.start(), date_range.end()],
            map_row_to_entry,
        )?
        .map(|maybe_entry| maybe_entry.map_err(Error::from))
        .collect()
}

/// Overwrite every field of the entry of `kind` with the given `id` with the
/// values in `form`.
///
/// # Errors
/// This function will return a:
/// - [Error::EntryNotFound] if `id` does not refer to a stored entry,
/// - [Error::InvalidUser] if `form.user_id` does not refer to a registered user,
/// - [Error::SqlError] if there is some other SQL error.
pub fn update_entry(
    kind: EntryKind,
    id: EntryId,
    form: &EntryForm,
    connection: &Connection,
) -> Result<Entry, Error> {
    connection
        .prepare(&format!(
            "UPDATE {}
             SET title = ?1, description = ?2, category = ?3, date = ?4, amount = ?5, user_id = ?6
             WHERE id = ?7
             RETURNING {COLUMNS}",
            kind.table_name()
        ))?
        .query_row(
            params![
                form.title,
                form.description,
                form.category,
                form.date,
                form.amount,
                form.user_id.as_i64(),
                id,
            ],
            map_row_to_entry,
        )
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::EntryNotFound(kind, id),
            error => map_write_error(error, form.user_id),
        })
}

/// Delete the entry of `kind` with the given `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::EntryNotFound] if `id` does not refer to a stored entry,
/// - [Error::SqlError] if there is some other SQL error.
pub fn delete_entry(kind: EntryKind, id: EntryId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute(
        &format!("DELETE FROM {} WHERE id = :id", kind.table_name()),
        &[(":id", &id)],
    )?;

    if rows_affected == 0 {
        return Err(Error::EntryNotFound(kind, id));
    }

    Ok(())
}
