//! Defines the JSON endpoint for adding a new expense.

use axum::{
    Json,
    extract::{FromRef, State},
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    expense::{Expense, ExpenseStore, SqliteExpenseStore},
};

/// The state needed to add an expense.
#[derive(Debug, Clone)]
pub struct AddExpenseState {
    /// The store for expense records.
    pub expense_store: SqliteExpenseStore,
}

impl FromRef<AppState> for AddExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
        }
    }
}

/// The request body for adding an expense.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddExpenseRequest {
    /// A short text describing what the money was spent on.
    pub title: String,
    /// The amount of money spent.
    pub amount: f64,
    /// The user defined category, e.g. "Food".
    #[serde(default)]
    pub category: Option<String>,
}

/// The response body confirming the added expense.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddExpenseResponse {
    /// A human readable confirmation message.
    pub message: String,
    /// The stored expense, including its assigned ID and date.
    pub expense: Expense,
}

/// A route handler for adding a new expense, responds with the stored record.
///
/// Requests missing the title or amount are rejected by the JSON extractor.
pub async fn add_expense_endpoint(
    State(mut state): State<AddExpenseState>,
    Json(request): Json<AddExpenseRequest>,
) -> Result<Json<AddExpenseResponse>, Error> {
    let category = request.category.filter(|category| !category.trim().is_empty());
    let builder = Expense::build(&request.title, request.amount).category(category);

    let expense = state
        .expense_store
        .insert(builder)
        .inspect_err(|error| tracing::error!("could not add expense: {error}"))?;

    Ok(Json(AddExpenseResponse {
        message: "Expense Added".to_owned(),
        expense,
    }))
}
