//! Expense management for the tracker.
//!
//! This module contains everything related to expense records:
//! - The `Expense` model and `ExpenseBuilder` for creating expenses
//! - The `ExpenseStore` trait and its SQLite implementation
//! - The JSON API endpoints for adding, listing, and deleting expenses

mod add_endpoint;
mod core;
mod delete_endpoint;
mod list_endpoint;
mod store;

pub use core::{Expense, ExpenseBuilder, create_expense_table};
pub use store::{ExpenseStore, SqliteExpenseStore};

pub(crate) use add_endpoint::add_expense_endpoint;
pub(crate) use delete_endpoint::delete_expense_endpoint;
pub(crate) use list_endpoint::list_expenses_endpoint;
