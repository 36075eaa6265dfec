//! Summary statistics and chart data for a user's expenses and incomes.

mod core;
mod endpoints;
mod state;

pub use core::{
    CHART_WINDOW_DAYS, ChartData, Stats, chart_window, get_chart_data, get_stats, summarize,
};
pub use endpoints::{get_chart_endpoint, get_stats_endpoint};
pub use state::StatsState;
