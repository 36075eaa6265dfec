use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use finflow::{EntryForm, EntryKind, PasswordHash, create_entry, create_user, initialize_db};

/// A utility for creating a test database for the REST API server of FinFlow.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test user 'demo' with the password 'test'...");

    let password_hash = PasswordHash::new("test", PasswordHash::DEFAULT_COST)?;
    let user = create_user("demo", "demo@example.com", password_hash, &conn)?;

    println!("Creating sample expenses and incomes...");

    let today = OffsetDateTime::now_utc().date();
    let samples = [
        (EntryKind::Income, "Salary", "Job", 0, 4200),
        (EntryKind::Income, "Salary", "Job", 30, 4200),
        (EntryKind::Income, "Birthday money", "Gift", 12, 100),
        (EntryKind::Expense, "Rent", "Housing", 1, 1800),
        (EntryKind::Expense, "Rent", "Housing", 31, 1800),
        (EntryKind::Expense, "Groceries", "Food", 3, 145),
        (EntryKind::Expense, "Groceries", "Food", 10, 162),
        (EntryKind::Expense, "Power bill", "Utilities", 15, 120),
        (EntryKind::Expense, "Movie tickets", "Entertainment", 20, 35),
    ];

    for (kind, title, category, days_ago, amount) in samples {
        create_entry(
            kind,
            &EntryForm {
                title: title.to_owned(),
                description: None,
                category: category.to_owned(),
                date: today - Duration::days(days_ago),
                amount,
                user_id: user.id,
            },
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}
