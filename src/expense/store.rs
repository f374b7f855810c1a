//! Defines the expense store trait and its SQLite implementation.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::{
    Error,
    database_id::ExpenseId,
    expense::core::{Expense, ExpenseBuilder, create_expense, delete_expense, get_all_expenses},
};

/// Handles the creation, retrieval, and deletion of expense records.
///
/// This is the only surface through which the application touches
/// persistence. No behavior depends on the specific storage engine.
pub trait ExpenseStore {
    /// Insert a new expense into the store and return it with its assigned ID.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn insert(&mut self, builder: ExpenseBuilder) -> Result<Expense, Error>;

    /// Retrieve every expense in the store, in storage order.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Expense>, Error>;

    /// Delete the expense with `id` from the store.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if no expense has the given ID.
    fn delete_by_id(&mut self, id: ExpenseId) -> Result<(), Error>;
}

/// Stores expenses in a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock_connection(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl ExpenseStore for SqliteExpenseStore {
    fn insert(&mut self, builder: ExpenseBuilder) -> Result<Expense, Error> {
        let connection = self.lock_connection()?;

        create_expense(builder, &connection)
    }

    fn get_all(&self) -> Result<Vec<Expense>, Error> {
        let connection = self.lock_connection()?;

        get_all_expenses(&connection)
    }

    fn delete_by_id(&mut self, id: ExpenseId) -> Result<(), Error> {
        let connection = self.lock_connection()?;

        match delete_expense(id, &connection)? {
            0 => Err(Error::NotFound),
            _ => Ok(()),
        }
    }
}
