//! Defines the JSON endpoint for listing all expenses.

use axum::{
    Json,
    extract::{FromRef, State},
};

use crate::{
    AppState, Error,
    expense::{Expense, ExpenseStore, SqliteExpenseStore},
};

/// The state needed to list expenses.
#[derive(Debug, Clone)]
pub struct ListExpensesState {
    /// The store for expense records.
    pub expense_store: SqliteExpenseStore,
}

impl FromRef<AppState> for ListExpensesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// A route handler for listing every expense in the store.
///
/// Records are returned in storage order; clients sort by date themselves.
pub async fn list_expenses_endpoint(
    State(state): State<ListExpensesState>,
) -> Result<Json<Vec<Expense>>, Error> {
    let expenses = state
        .expense_store
        .get_all()
        .inspect_err(|error| tracing::error!("could not list expenses: {error}"))?;

    Ok(Json(expenses))
}
