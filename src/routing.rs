//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::{
        add_expense_form_endpoint, delete_expense_row_endpoint, get_dashboard_page,
        refresh_dashboard_endpoint,
    },
    endpoints,
    expense::{add_expense_endpoint, delete_expense_endpoint, list_expenses_endpoint},
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(endpoints::ADD_EXPENSE, post(add_expense_endpoint))
        .route(endpoints::EXPENSES, get(list_expenses_endpoint))
        .route(endpoints::DELETE_EXPENSE, delete(delete_expense_endpoint));

    let dashboard_routes = Router::new()
        .route(endpoints::ROOT, get(get_dashboard_page))
        .route(endpoints::DASHBOARD_CONTENT, get(refresh_dashboard_endpoint))
        .route(endpoints::DASHBOARD_EXPENSES, post(add_expense_form_endpoint))
        .route(
            endpoints::DASHBOARD_DELETE_EXPENSE,
            delete(delete_expense_row_endpoint),
        );

    api_routes
        .merge(dashboard_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}
