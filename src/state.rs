//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{Error, dashboard::ExpenseViewModel, db::initialize, expense::SqliteExpenseStore};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The store for expense records.
    pub expense_store: SqliteExpenseStore,

    /// The record list the dashboard renders from.
    pub view_model: Arc<Mutex<ExpenseViewModel>>,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for
    /// the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        initialize(&db_connection)?;

        let connection = Arc::new(Mutex::new(db_connection));

        Ok(Self {
            expense_store: SqliteExpenseStore::new(connection),
            view_model: Arc::new(Mutex::new(ExpenseViewModel::new())),
        })
    }
}
