// templates/components/error.rs
use astra::{Body, Response, ResponseBuilder};
use maud::html;
use tracing::error;

use crate::errors::ServerError;
use crate::templates::layouts::{site_layout, PageMeta};

/// Renders a ServerError as an HTML error page with the matching status.
/// Internal failure details are logged, never shown.
pub fn html_error_response(err: ServerError) -> Response {
    let status = err.status_code();

    let message = match &err {
        ServerError::NotFound => "The page you were looking for doesn't exist.".to_string(),
        ServerError::BadRequest(msg) | ServerError::Unauthorized(msg) => msg.clone(),
        _ => {
            error!(error = %err, "request failed");
            "Something went wrong on our side. Please try again.".to_string()
        }
    };

    let title = format!("Error {status}");
    let page = site_layout(
        &PageMeta::titled(&title),
        html! {
            section class="error" {
                h1 { (title) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        },
    );

    let mut builder = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8");
    if let ServerError::Unauthorized(_) = err {
        builder = builder.header("WWW-Authenticate", "Bearer");
    }

    builder
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
