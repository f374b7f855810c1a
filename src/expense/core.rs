//! Defines the core data model and database queries for expenses.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{Error, database_id::ExpenseId};

// ============================================================================
// MODELS
// ============================================================================

/// A single spending record.
///
/// To create a new `Expense`, use [Expense::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense. Assigned by the store, unique, and immutable.
    pub id: ExpenseId,
    /// A short text describing what the money was spent on.
    pub title: String,
    /// The amount of money spent.
    pub amount: f64,
    /// The user defined category, e.g. "Food". Free-form.
    pub category: Option<String>,
    /// When the expense happened.
    pub date: Date,
}

impl Expense {
    /// Create a new expense.
    ///
    /// Shortcut for [ExpenseBuilder] for discoverability.
    pub fn build(title: &str, amount: f64) -> ExpenseBuilder {
        ExpenseBuilder {
            title: title.to_owned(),
            amount,
            category: None,
            date: OffsetDateTime::now_utc().date(),
        }
    }
}

/// A builder for creating [Expense] instances.
///
/// The category defaults to none and the date to today (UTC). The ID is
/// assigned by the store on insert.
#[derive(Debug, PartialEq, Clone)]
pub struct ExpenseBuilder {
    /// A short text describing what the money was spent on.
    pub title: String,
    /// The amount of money spent.
    pub amount: f64,
    /// The user defined category, e.g. "Food".
    pub category: Option<String>,
    /// When the expense happened. Defaults to today's date.
    pub date: Date,
}

impl ExpenseBuilder {
    /// Set the category for the expense.
    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Set the date for the expense.
    pub fn date(mut self, date: Date) -> Self {
        self.date = date;
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the expense table in the database if it does not already exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            amount REAL NOT NULL,
            category TEXT,
            date TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Convert a database row into an [Expense].
///
/// # Errors
/// Returns an error if the row does not have the expected columns.
pub(crate) fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    Ok(Expense {
        id: row.get(0)?,
        title: row.get(1)?,
        amount: row.get(2)?,
        category: row.get(3)?,
        date: row.get(4)?,
    })
}

/// Insert a new expense into the database from a builder.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub(crate) fn create_expense(
    builder: ExpenseBuilder,
    connection: &Connection,
) -> Result<Expense, Error> {
    let expense = connection
        .prepare(
            "INSERT INTO expense (title, amount, category, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, title, amount, category, date",
        )?
        .query_row(
            (
                builder.title,
                builder.amount,
                builder.category,
                builder.date,
            ),
            map_expense_row,
        )?;

    Ok(expense)
}

/// Retrieve every expense in the database, in storage order.
///
/// Sorting by date is done by the view model, not the store.
///
/// # Errors
/// Returns an [Error::SqlError] if there is an SQL error.
pub(crate) fn get_all_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare("SELECT id, title, amount, category, date FROM expense")?
        .query_map((), map_expense_row)?
        .map(|expense| expense.map_err(|error| error.into()))
        .collect()
}

type RowsAffected = usize;

/// Delete the expense with `id` from the database.
///
/// Returns the number of rows affected, which is zero when no expense has
/// the given ID.
pub(crate) fn delete_expense(
    id: ExpenseId,
    connection: &Connection,
) -> Result<RowsAffected, Error> {
    connection
        .execute("DELETE FROM expense WHERE id = :id", &[(":id", &id)])
        .map_err(|error| error.into())
}

#[cfg(test)]
mod core_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::initialize_db;

    use super::{Expense, create_expense, delete_expense, get_all_expenses};

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();
        connection
    }

    #[test]
    fn create_assigns_id_and_keeps_fields() {
        let connection = get_test_connection();

        let builder = Expense::build("Coffee", 5.0)
            .category(Some("Food".to_owned()))
            .date(date!(2025 - 10 - 26));
        let expense = create_expense(builder, &connection).unwrap();

        assert_eq!(expense.title, "Coffee");
        assert_eq!(expense.amount, 5.0);
        assert_eq!(expense.category.as_deref(), Some("Food"));
        assert_eq!(expense.date, date!(2025 - 10 - 26));
    }

    #[test]
    fn create_without_category_stores_null() {
        let connection = get_test_connection();

        let expense = create_expense(Expense::build("Bus fare", 2.5), &connection).unwrap();

        assert_eq!(expense.category, None);
    }

    #[test]
    fn get_all_returns_each_expense_once() {
        let connection = get_test_connection();
        let first = create_expense(Expense::build("Coffee", 5.0), &connection).unwrap();
        let second = create_expense(Expense::build("Lunch", 12.0), &connection).unwrap();

        let expenses = get_all_expenses(&connection).unwrap();

        assert_eq!(expenses.len(), 2);
        assert!(expenses.contains(&first));
        assert!(expenses.contains(&second));
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn delete_removes_only_that_expense() {
        let connection = get_test_connection();
        let keep = create_expense(Expense::build("Coffee", 5.0), &connection).unwrap();
        let remove = create_expense(Expense::build("Lunch", 12.0), &connection).unwrap();

        let rows_affected = delete_expense(remove.id, &connection).unwrap();

        assert_eq!(rows_affected, 1);
        assert_eq!(get_all_expenses(&connection).unwrap(), vec![keep]);
    }

    #[test]
    fn delete_unknown_id_affects_no_rows() {
        let connection = get_test_connection();

        let rows_affected = delete_expense(999, &connection).unwrap();

        assert_eq!(rows_affected, 0);
    }
}
