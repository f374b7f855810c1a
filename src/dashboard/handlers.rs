//! Dashboard HTTP handlers.
//!
//! The dashboard keeps its record list in an [ExpenseViewModel]; handlers
//! update the view model and re-render the content fragment from it. A
//! failed store operation leaves the view model unchanged and responds with
//! an alert fragment instead.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use maud::Markup;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    alert::error_alert,
    dashboard::{view::content_view, view_model::ExpenseViewModel},
    database_id::ExpenseId,
    expense::{Expense, ExpenseStore, SqliteExpenseStore},
    html::base,
};

/// The state needed to render and update the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The store for expense records.
    pub expense_store: SqliteExpenseStore,
    /// The record list the dashboard renders from.
    pub view_model: Arc<Mutex<ExpenseViewModel>>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expense_store: state.expense_store.clone(),
            view_model: state.view_model.clone(),
        }
    }
}

/// The form data for adding an expense from the dashboard.
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    /// A short text describing what the money was spent on.
    pub title: String,
    /// The amount of money spent.
    pub amount: f64,
    /// The user defined category, e.g. "Food".
    #[serde(default)]
    pub category: Option<String>,
}

/// Display the dashboard page.
///
/// The view model is replaced with a fresh fetch from the store on every
/// page load.
pub async fn get_dashboard_page(State(mut state): State<DashboardState>) -> Response {
    match refresh_content(&mut state) {
        Ok(content) => base("Dashboard", &content).into_response(),
        Err(error) => {
            tracing::error!("could not load the dashboard: {error}");
            base(
                "Dashboard",
                &error_alert("Failed to fetch", "Could not load expenses. Try again later."),
            )
            .into_response()
        }
    }
}

/// Re-render the dashboard content from a fresh fetch (the refresh button).
pub async fn refresh_dashboard_endpoint(State(mut state): State<DashboardState>) -> Response {
    match refresh_content(&mut state) {
        Ok(content) => content.into_response(),
        Err(error) => {
            tracing::error!("could not refresh the dashboard: {error}");
            alert_response("Failed to fetch", "Could not load expenses. Try again later.")
        }
    }
}

/// Add an expense from the dashboard form.
///
/// The store-confirmed record goes to the front of the view model without a
/// re-fetch, and the content is re-rendered from the updated list.
pub async fn add_expense_form_endpoint(
    State(mut state): State<DashboardState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let category = form.category.filter(|category| !category.trim().is_empty());
    let builder = Expense::build(&form.title, form.amount).category(category);

    let expense = match state.expense_store.insert(builder) {
        Ok(expense) => expense,
        Err(error) => {
            tracing::error!("could not add expense: {error}");
            return alert_response("Add failed", "The expense could not be saved. Try again later.");
        }
    };

    update_content(&state, |view_model| view_model.push_front(expense))
}

/// Delete an expense from the dashboard list.
///
/// The record is dropped from the view model once the store confirms the
/// delete. A record that is already gone from the store is dropped all the
/// same.
pub async fn delete_expense_row_endpoint(
    State(mut state): State<DashboardState>,
    Path(expense_id): Path<ExpenseId>,
) -> Response {
    match state.expense_store.delete_by_id(expense_id) {
        Ok(()) | Err(Error::NotFound) => {}
        Err(error) => {
            tracing::error!("could not delete expense {expense_id}: {error}");
            return alert_response(
                "Delete failed",
                "The expense could not be deleted. Try again later.",
            );
        }
    }

    update_content(&state, |view_model| view_model.remove(expense_id))
}

/// Replace the view model with the store contents and render the content.
fn refresh_content(state: &mut DashboardState) -> Result<Markup, Error> {
    let expenses = state.expense_store.get_all()?;

    let mut view_model = lock_view_model(state)?;
    view_model.replace(expenses);

    Ok(render_content(&view_model))
}

/// Apply `update` to the view model and render the content from the result.
fn update_content(
    state: &DashboardState,
    update: impl FnOnce(&mut ExpenseViewModel),
) -> Response {
    match lock_view_model(state) {
        Ok(mut view_model) => {
            update(&mut view_model);
            render_content(&view_model).into_response()
        }
        Err(error) => {
            tracing::error!("could not update the dashboard: {error}");
            alert_response(
                "Something went wrong",
                "Try again later or check the logs on the server.",
            )
        }
    }
}

fn lock_view_model(
    state: &DashboardState,
) -> Result<MutexGuard<'_, ExpenseViewModel>, Error> {
    state.view_model.lock().map_err(|error| {
        tracing::error!("could not acquire the view model lock: {error}");
        Error::ViewModelLockError
    })
}

fn render_content(view_model: &ExpenseViewModel) -> Markup {
    content_view(view_model, OffsetDateTime::now_utc().date())
}

// htmx only swaps error responses into the page when the response-targets
// extension routes them, so alerts go out with an error status code.
fn alert_response(message: &str, details: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        error_alert(message, details),
    )
        .into_response()
}

#[cfg(test)]
mod handlers_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        response::Response,
    };
    use axum_extra::extract::Form;
    use rusqlite::Connection;

    use crate::{
        dashboard::view_model::ExpenseViewModel,
        expense::{Expense, ExpenseStore, SqliteExpenseStore},
        initialize_db,
    };

    use super::{
        DashboardState, ExpenseForm, add_expense_form_endpoint, delete_expense_row_endpoint,
        get_dashboard_page, refresh_dashboard_endpoint,
    };

    fn get_test_state() -> DashboardState {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).unwrap();

        DashboardState {
            expense_store: SqliteExpenseStore::new(Arc::new(Mutex::new(connection))),
            view_model: Arc::new(Mutex::new(ExpenseViewModel::new())),
        }
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn page_load_replaces_the_view_model_from_the_store() {
        let mut state = get_test_state();
        state
            .expense_store
            .insert(Expense::build("Coffee", 5.0))
            .unwrap();

        let response = get_dashboard_page(State(state.clone())).await;
        let body = body_text(response).await;

        assert!(body.contains("Coffee"));
        assert_eq!(state.view_model.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn adding_from_the_form_stores_and_prepends_the_expense() {
        let state = get_test_state();

        let form = ExpenseForm {
            title: "Lunch".to_owned(),
            amount: 12.0,
            category: Some("Food".to_owned()),
        };
        let response = add_expense_form_endpoint(State(state.clone()), Form(form)).await;
        let body = body_text(response).await;

        assert!(body.contains("Lunch"));
        assert_eq!(state.expense_store.get_all().unwrap().len(), 1);

        let view_model = state.view_model.lock().unwrap();
        assert_eq!(view_model.expenses()[0].title, "Lunch");
    }

    #[tokio::test]
    async fn deleting_removes_the_expense_from_store_and_view_model() {
        let mut state = get_test_state();
        let expense = state
            .expense_store
            .insert(Expense::build("Coffee", 5.0))
            .unwrap();
        state.view_model.lock().unwrap().push_front(expense.clone());

        let response = delete_expense_row_endpoint(State(state.clone()), Path(expense.id)).await;
        let body = body_text(response).await;

        assert!(body.contains("No expenses yet"));
        assert!(state.expense_store.get_all().unwrap().is_empty());
        assert!(state.view_model.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn deleting_an_already_deleted_expense_still_updates_the_view() {
        let state = get_test_state();
        state.view_model.lock().unwrap().push_front(Expense {
            id: 1,
            title: "Stale".to_owned(),
            amount: 1.0,
            category: None,
            date: time::macros::date!(2025 - 06 - 15),
        });

        let response = delete_expense_row_endpoint(State(state.clone()), Path(1)).await;

        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert!(state.view_model.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn refresh_resorts_the_list_by_date() {
        let mut state = get_test_state();
        let older = state
            .expense_store
            .insert(Expense::build("Older", 1.0).date(time::macros::date!(2025 - 01 - 01)))
            .unwrap();
        let newer = state
            .expense_store
            .insert(Expense::build("Newer", 2.0).date(time::macros::date!(2025 - 03 - 01)))
            .unwrap();
        refresh_dashboard_endpoint(State(state.clone())).await;

        let view_model = state.view_model.lock().unwrap();
        assert_eq!(view_model.expenses().to_vec(), vec![newer, older]);
    }
}
