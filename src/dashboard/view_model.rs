//! The in-memory record list the dashboard renders from.
//!
//! All updates go through the defined operations ([ExpenseViewModel::replace],
//! [ExpenseViewModel::push_front], [ExpenseViewModel::remove]) and the
//! derived aggregates are recomputed from the current list on every render.
//! There is no memoization; expected data volumes are small.

use std::collections::HashMap;

use time::{Date, Month};

use crate::{database_id::ExpenseId, expense::Expense};

/// The number of months covered by the monthly spending buckets.
pub(crate) const MONTHLY_WINDOW_MONTHS: usize = 6;

/// The category label used for expenses without a category.
pub(crate) const UNCATEGORIZED_LABEL: &str = "Other";

/// The record list behind the dashboard views.
///
/// Holds the full list of expenses, most recent first, and derives the
/// running total, monthly sums, and category sums from it.
#[derive(Debug, Default)]
pub struct ExpenseViewModel {
    expenses: Vec<Expense>,
}

impl ExpenseViewModel {
    /// Create an empty view model.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current record list.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// The number of records currently held.
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the view model holds no records.
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Replace the record list with a fresh fetch from the store.
    ///
    /// Sorts the records descending by date so the most recent expenses come
    /// first. Ties are broken by ID, newest insert first.
    pub fn replace(&mut self, mut expenses: Vec<Expense>) {
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        self.expenses = expenses;
    }

    /// Add a store-confirmed record to the front of the list without
    /// re-fetching.
    pub fn push_front(&mut self, expense: Expense) {
        self.expenses.insert(0, expense);
    }

    /// Remove the record with `id` from the list.
    ///
    /// Removing an unknown ID is a no-op.
    pub fn remove(&mut self, id: ExpenseId) {
        self.expenses.retain(|expense| expense.id != id);
    }

    /// The sum of all current records' amounts.
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    /// Spending bucketed by year-month for the last six months up to
    /// `today`, oldest bucket first.
    ///
    /// Every month in the window gets a bucket keyed by its first day, zero
    /// when it has no records. Records outside the window are ignored.
    pub fn monthly_totals(&self, today: Date) -> Vec<(Date, f64)> {
        let mut buckets: Vec<(Date, f64)> = (0..MONTHLY_WINDOW_MONTHS)
            .rev()
            .map(|months_ago| (months_back(today, months_ago), 0.0))
            .collect();

        for expense in &self.expenses {
            let month = expense.date.replace_day(1).unwrap();

            if let Some(bucket) = buckets.iter_mut().find(|(key, _)| *key == month) {
                bucket.1 += expense.amount;
            }
        }

        buckets
    }

    /// Spending summed by category, largest first.
    ///
    /// Records without a category, or with a blank one, are grouped under
    /// "Other". Ties are broken alphabetically so renders are stable.
    pub fn category_totals(&self) -> Vec<(String, f64)> {
        let mut totals: HashMap<&str, f64> = HashMap::new();

        for expense in &self.expenses {
            let category = match expense.category.as_deref() {
                Some(category) if !category.trim().is_empty() => category,
                _ => UNCATEGORIZED_LABEL,
            };

            *totals.entry(category).or_insert(0.0) += expense.amount;
        }

        let mut totals: Vec<(String, f64)> = totals
            .into_iter()
            .map(|(category, total)| (category.to_owned(), total))
            .collect();
        totals.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        totals
    }
}

/// The first day of the month `months_ago` months before `date`.
fn months_back(date: Date, months_ago: usize) -> Date {
    let mut year = date.year();
    let mut month = date.month();

    for _ in 0..months_ago {
        month = month.previous();
        if month == Month::December {
            year -= 1;
        }
    }

    Date::from_calendar_date(year, month, 1).unwrap()
}
