use rusqlite::Connection;
use time::Date;

use crate::{EntryForm, PasswordHash, User, UserID, create_user, initialize_db};

pub(crate) fn must_create_test_connection() -> Connection {
    let connection =
        Connection::open_in_memory().expect("could not create in-memory SQLite database");
    initialize_db(&connection).expect("could not initialize test DB");

    connection
}

#[track_caller]
pub(crate) fn must_create_test_user(username: &str, connection: &Connection) -> User {
    create_user(
        username,
        &format!("{username}@example.com"),
        PasswordHash::new_unchecked("hunter2"),
        connection,
    )
    .expect("could not create test user")
}

pub(crate) fn form(title: &str, date: Date, amount: i32, user_id: UserID) -> EntryForm {
    EntryForm {
        title: title.to_owned(),
        description: None,
        category: "Misc".to_owned(),
        date,
        amount,
        user_id,
    }
}
