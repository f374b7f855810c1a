//! HTML views for the dashboard content.

use maud::{Markup, html};
use time::Date;

use crate::{
    dashboard::{
        charts::{build_dashboard_charts, charts_view},
        view_model::{ExpenseViewModel, UNCATEGORIZED_LABEL},
    },
    endpoints,
    expense::Expense,
    html::format_currency,
};

/// Render the dashboard content: alert region, add form, summary card,
/// charts, and the expense table.
///
/// Everything targets `#content` so each mutation re-renders the whole
/// section from the current view model.
pub(super) fn content_view(view_model: &ExpenseViewModel, today: Date) -> Markup {
    html! {
        section id="content" hx-ext="response-targets" {
            div id="alert" {}

            div class="grid-two" {
                (add_expense_form())
                (summary_card(view_model))
            }

            @if view_model.is_empty() {
                div class="card empty" { "No expenses yet. Add some to start." }
            } @else {
                (charts_view(&build_dashboard_charts(view_model, today)))
                (expense_list(view_model.expenses()))
            }
        }
    }
}

fn add_expense_form() -> Markup {
    html! {
        form
            class="card add-card"
            hx-post=(endpoints::DASHBOARD_EXPENSES)
            hx-target="#content"
            hx-swap="outerHTML"
            hx-target-error="#alert"
        {
            h3 { "Add Expense" }

            input name="title" placeholder="Title" required;
            input
                name="amount"
                type="number"
                step="0.01"
                placeholder="Amount"
                required;
            input name="category" placeholder="Category (eg. Food)";

            button class="btn" type="submit" { "Add" }
        }
    }
}

fn summary_card(view_model: &ExpenseViewModel) -> Markup {
    html! {
        div class="card summary-card" {
            h3 { "Summary" }

            div class="summary-item" {
                div class="label" { "Total Spent" }
                div class="value" { (format_currency(view_model.total())) }
            }

            div class="summary-item" {
                div class="label" { "Records" }
                div class="value" { (view_model.len()) }
            }

            button
                class="btn"
                hx-get=(endpoints::DASHBOARD_CONTENT)
                hx-target="#content"
                hx-swap="outerHTML"
                hx-target-error="#alert"
            { "Refresh" }
        }
    }
}

fn expense_list(expenses: &[Expense]) -> Markup {
    html! {
        div class="card list-card" {
            h3 { "Expenses" }

            @for expense in expenses {
                (expense_row(expense))
            }
        }
    }
}

fn expense_row(expense: &Expense) -> Markup {
    let delete_url = endpoints::format_endpoint(endpoints::DASHBOARD_DELETE_EXPENSE, expense.id);

    html! {
        div class="expense-row" {
            div {
                strong { (expense.title) }
                div class="meta" {
                    (expense.category.as_deref().unwrap_or(UNCATEGORIZED_LABEL))
                    " · "
                    (expense.date)
                }
            }

            div class="row-right" {
                div class="amount" { (format_currency(expense.amount)) }
                button
                    class="del"
                    hx-delete=(delete_url)
                    hx-confirm="Delete this expense?"
                    hx-target="#content"
                    hx-swap="outerHTML"
                    hx-target-error="#alert"
                { "Delete" }
            }
        }
    }
}

#[cfg(test)]
mod view_tests {
    use time::macros::date;

    use crate::{dashboard::view_model::ExpenseViewModel, endpoints, expense::Expense};

    use super::content_view;

    fn view_model_with_coffee() -> ExpenseViewModel {
        let mut view_model = ExpenseViewModel::new();
        view_model.push_front(Expense {
            id: 7,
            title: "Coffee".to_owned(),
            amount: 5.0,
            category: Some("Food".to_owned()),
            date: date!(2025 - 06 - 15),
        });
        view_model
    }

    #[test]
    fn content_renders_expense_row_with_delete_button() {
        let markup =
            content_view(&view_model_with_coffee(), date!(2025 - 06 - 15)).into_string();

        assert!(markup.contains("Coffee"));
        assert!(markup.contains(&endpoints::format_endpoint(
            endpoints::DASHBOARD_DELETE_EXPENSE,
            7
        )));
        assert!(markup.contains("$5.00"));
    }

    #[test]
    fn empty_view_model_renders_the_empty_state() {
        let markup = content_view(&ExpenseViewModel::new(), date!(2025 - 06 - 15)).into_string();

        assert!(markup.contains("No expenses yet"));
        assert!(!markup.contains("spending-chart"));
    }
}
