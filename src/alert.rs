//! Alert fragments for reporting failures to the user.

use maud::{Markup, html};

/// Render an error alert with a short `message` and optional `details`.
pub(crate) fn error_alert(message: &str, details: &str) -> Markup {
    html! {
        div class="alert alert-error" role="alert" {
            strong { (message) }

            @if !details.is_empty() {
                div class="alert-details" { (details) }
            }
        }
    }
}
