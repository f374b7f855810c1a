//! The dashboard page and its view model.
//!
//! This module contains:
//! - The `ExpenseViewModel` that holds the record list and derives the
//!   running total, monthly sums, and category sums
//! - Route handlers for the dashboard page and its htmx fragments
//! - Chart generation for the spending and category charts

mod charts;
mod handlers;
mod view;
mod view_model;

pub use view_model::ExpenseViewModel;

pub(crate) use handlers::{
    add_expense_form_endpoint, delete_expense_row_endpoint, get_dashboard_page,
    refresh_dashboard_endpoint,
};
