mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoints;
mod state;

pub use core::{
    Entry, EntryForm, EntryId, EntryKind, Expenses, Incomes, Ledger, create_entry,
    create_entry_table, delete_entry, get_all_entries, get_entries_by_user,
    get_entries_in_date_range, get_entry, update_entry,
};
pub use create_endpoint::create_entry_endpoint;
pub use delete_endpoint::delete_entry_endpoint;
pub use edit_endpoint::edit_entry_endpoint;
pub use get_endpoints::{
    get_all_entries_endpoint, get_entries_by_user_endpoint, get_entry_endpoint,
};
pub use state::EntryState;
