//! Summaries of a user's expenses and incomes.

use std::ops::RangeInclusive;

use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use time::{Date, Duration};

use crate::{
    Entry, EntryKind, Error, UserID,
    entry::{get_all_entries, get_entries_by_user, get_entries_in_date_range},
};

/// The number of days, including today, covered by the chart data.
pub const CHART_WINDOW_DAYS: i64 = 28;

/// The expenses and incomes to plot for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// The user's expenses in the chart window, oldest first.
    pub expense_list: Vec<Entry>,
    /// The user's incomes in the chart window, oldest first.
    pub income_list: Vec<Entry>,
}

/// Totals and extremes for a user's finances.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// The sum of the user's incomes.
    pub income: i64,
    /// The sum of the user's expenses.
    pub expense: i64,
    /// `income - expense`.
    pub balance: i64,
    /// The user's most recent income.
    pub latest_income: Option<Entry>,
    /// The user's most recent expense.
    pub latest_expense: Option<Entry>,
    /// The smallest income amount across all users.
    pub min_income: Option<i32>,
    /// The largest income amount across all users.
    pub max_income: Option<i32>,
    /// The smallest expense amount across all users.
    pub min_expense: Option<i32>,
    /// The largest expense amount across all users.
    pub max_expense: Option<i32>,
}

/// The dates covered by the chart: the [CHART_WINDOW_DAYS] days up to and including `today`.
pub fn chart_window(today: Date) -> RangeInclusive<Date> {
    today.saturating_sub(Duration::days(CHART_WINDOW_DAYS - 1))..=today
}

/// Get the user's expenses and incomes dated within [chart_window] of `today`.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is a SQL error.
pub fn get_chart_data(
    user_id: UserID,
    today: Date,
    connection: &Connection,
) -> Result<ChartData, Error> {
    let window = chart_window(today);
    tracing::debug!(
        "Fetching chart data for user {user_id} from {} to {}",
        window.start(),
        window.end()
    );

    Ok(ChartData {
        expense_list: get_entries_in_date_range(
            EntryKind::Expense,
            user_id,
            window.clone(),
            connection,
        )?,
        income_list: get_entries_in_date_range(EntryKind::Income, user_id, window, connection)?,
    })
}

/// Get the summary statistics for `user_id`.
///
/// The minimum and maximum amounts are taken over every user's entries, not
/// just those of `user_id`. See [summarize].
///
/// # Errors
/// This function will return a [Error::SqlError] if there is a SQL error.
pub fn get_stats(user_id: UserID, connection: &Connection) -> Result<Stats, Error> {
    let user_incomes = get_entries_by_user(EntryKind::Income, user_id, connection)?;
    let user_expenses = get_entries_by_user(EntryKind::Expense, user_id, connection)?;
    let all_incomes = get_all_entries(EntryKind::Income, connection)?;
    let all_expenses = get_all_entries(EntryKind::Expense, connection)?;

    let stats = summarize(&user_incomes, &user_expenses, &all_incomes, &all_expenses);

    tracing::debug!(
        "Total income: {}, Total expense: {}, Balance: {}",
        stats.income,
        stats.expense,
        stats.balance
    );
    tracing::debug!("Min/Max Income: {:?}/{:?}", stats.min_income, stats.max_income);
    tracing::debug!("Min/Max Expense: {:?}/{:?}", stats.min_expense, stats.max_expense);

    Ok(stats)
}

/// Compute [Stats] from a user's entries and every user's entries.
///
/// The totals, balance and latest entries come from `user_incomes` and
/// `user_expenses`. The min/max amounts come from `all_incomes` and
/// `all_expenses`, so they describe every user's entries.
pub fn summarize(
    user_incomes: &[Entry],
    user_expenses: &[Entry],
    all_incomes: &[Entry],
    all_expenses: &[Entry],
) -> Stats {
    let income = total(user_incomes);
    let expense = total(user_expenses);

    Stats {
        income,
        expense,
        balance: income - expense,
        latest_income: latest(user_incomes),
        latest_expense: latest(user_expenses),
        min_income: all_incomes.iter().map(|entry| entry.amount).min(),
        max_income: all_incomes.iter().map(|entry| entry.amount).max(),
        min_expense: all_expenses.iter().map(|entry| entry.amount).min(),
        max_expense: all_expenses.iter().map(|entry| entry.amount).max(),
    }
}

/// Amounts are `i32`, so an `i64` total cannot overflow.
fn total(entries: &[Entry]) -> i64 {
    entries.iter().map(|entry| i64::from(entry.amount)).sum()
}

/// The entry with the latest date. Ties go to the entry created last.
fn latest(entries: &[Entry]) -> Option<Entry> {
    entries
        .iter()
        .max_by_key(|entry| (entry.date, entry.id))
        .cloned()
}
