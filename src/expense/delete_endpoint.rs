//! Defines the JSON endpoint for deleting an expense.

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use serde_json::{Value, json};

use crate::{
    AppState, Error,
    database_id::ExpenseId,
    expense::{ExpenseStore, SqliteExpenseStore},
};

/// The state needed to delete an expense.
#[derive(Debug, Clone)]
pub struct DeleteExpenseState {
    /// The store for expense records.
    pub expense_store: SqliteExpenseStore,
}

impl FromRef<AppState> for DeleteExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// A route handler for deleting an expense, responds with a confirmation
/// message.
///
/// Unknown IDs respond with 404, which clients treat as a no-op.
pub async fn delete_expense_endpoint(
    State(mut state): State<DeleteExpenseState>,
    Path(expense_id): Path<ExpenseId>,
) -> Result<Json<Value>, Error> {
    state
        .expense_store
        .delete_by_id(expense_id)
        .inspect_err(|error| {
            tracing::error!("could not delete expense {expense_id}: {error}")
        })?;

    Ok(Json(json!({ "message": "Expense Deleted" })))
}

#[cfg(test)]
mod delete_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use rusqlite::Connection;

    use crate::{
        Error,
        expense::{Expense, ExpenseStore, SqliteExpenseStore},
        initialize_db,
    };

    use super::{DeleteExpenseState, delete_expense_endpoint};

    fn get_test_state() -> DeleteExpenseState {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();

        DeleteExpenseState {
            expense_store: SqliteExpenseStore::new(Arc::new(Mutex::new(connection))),
        }
    }

    #[tokio::test]
    async fn deletes_the_expense() {
        let mut state = get_test_state();
        let expense = state.expense_store.insert(Expense::build("Coffee", 5.0)).unwrap();

        let response = delete_expense_endpoint(State(state.clone()), Path(expense.id))
            .await
            .unwrap();

        assert_eq!(response["message"], "Expense Deleted");
        assert!(state.expense_store.get_all().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_and_changes_nothing() {
        let mut state = get_test_state();
        let expense = state.expense_store.insert(Expense::build("Coffee", 5.0)).unwrap();

        let result = delete_expense_endpoint(State(state.clone()), Path(expense.id + 1)).await;

        assert!(matches!(result, Err(Error::NotFound)));
        assert_eq!(state.expense_store.get_all().unwrap(), vec![expense]);
    }
}
