//! Chart generation and rendering for the dashboard.
//!
//! Builds ECharts configurations with charming for the monthly spending line
//! chart and the category break-up bar chart, plus the HTML containers and
//! the JavaScript that initializes them.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::{Line, bar},
};
use maud::{Markup, PreEscaped, html};
use time::{Date, Month};

use crate::dashboard::view_model::ExpenseViewModel;

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Creates the dashboard charts from the current view model.
pub(super) fn build_dashboard_charts(
    view_model: &ExpenseViewModel,
    today: Date,
) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "spending-chart",
            options: spending_chart(view_model, today).to_string(),
        },
        DashboardChart {
            id: "category-chart",
            options: category_chart(view_model).to_string(),
        },
    ]
}

/// Renders the chart containers followed by their initialization script.
///
/// The script runs as soon as it is parsed, both on the initial page load
/// and when htmx swaps in a fresh content fragment, so the containers must
/// come before it in the markup.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    chart.setOption({});

                    window.addEventListener('resize', chart.resize);
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    html!(
        section id="charts" class="charts-grid"
        {
            @for chart in charts {
                div id=(chart.id) class="card chart-card" {}
            }
        }
        script { (PreEscaped(script_content)) }
    )
}

fn spending_chart(view_model: &ExpenseViewModel, today: Date) -> Chart {
    let monthly_totals = view_model.monthly_totals(today);
    let labels: Vec<String> = monthly_totals
        .iter()
        .map(|(month, _)| month_label(*month))
        .collect();
    let values: Vec<f64> = monthly_totals.iter().map(|(_, total)| *total).collect();

    Chart::new()
        .title(Title::new().text("Spending").subtext("Last six months"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Line::new().name("Monthly spending").data(values))
}

fn category_chart(view_model: &ExpenseViewModel) -> Chart {
    let totals = view_model.category_totals();
    let labels: Vec<String> = totals.iter().map(|(category, _)| category.clone()).collect();
    let values: Vec<f64> = totals.iter().map(|(_, total)| *total).collect();

    Chart::new()
        .title(Title::new().text("Category break-up"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(bar::Bar::new().name("Category").data(values))
}

/// Formats a month date as a three-letter abbreviation, e.g. "Jan".
fn month_label(month: Date) -> String {
    match month.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
    .to_string()
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}

#[cfg(test)]
mod charts_tests {
    use time::macros::date;

    use crate::{dashboard::view_model::ExpenseViewModel, expense::Expense};

    use super::{build_dashboard_charts, charts_view, month_label};

    #[test]
    fn month_labels_are_three_letter_abbreviations() {
        assert_eq!(month_label(date!(2025 - 01 - 01)), "Jan");
        assert_eq!(month_label(date!(2025 - 12 - 01)), "Dec");
    }

    #[test]
    fn charts_view_renders_containers_and_script() {
        let mut view_model = ExpenseViewModel::new();
        view_model.push_front(Expense {
            id: 1,
            title: "Coffee".to_owned(),
            amount: 5.0,
            category: Some("Food".to_owned()),
            date: date!(2025 - 06 - 15),
        });

        let charts = build_dashboard_charts(&view_model, date!(2025 - 06 - 15));
        let markup = charts_view(&charts).into_string();

        assert!(markup.contains("id=\"spending-chart\""));
        assert!(markup.contains("id=\"category-chart\""));
        assert!(markup.contains("echarts.init"));
    }
}
