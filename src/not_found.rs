//! The 404 page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::html::base;

/// A route handler that renders the 404 page.
pub(crate) async fn get_404_not_found() -> Response {
    let content = html! {
        div class="card" {
            h3 { "404 Not Found" }
            p { "The page you were looking for does not exist." }
        }
    };

    (StatusCode::NOT_FOUND, base("Not Found", &content)).into_response()
}
