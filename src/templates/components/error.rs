use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};
use maud::{html, DOCTYPE};
use tracing::{error, warn};

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Not Found"),

        ServerError::BadRequest(msg) => {
            warn!(%msg, "bad request");
            render_error(400, &msg)
        }

        ServerError::Data(e) => {
            error!(error = %e, "data error");
            render_error(500, &format!("Data Error: {e}"))
        }

        ServerError::InternalError => {
            error!("internal error");
            render_error(500, "Internal Server Error")
        }

        ServerError::XlsxError(msg) => {
            error!(%msg, "spreadsheet error");
            render_error(500, &format!("Spreadsheet Error: {msg}"))
        }
    }
}

/// Build a basic HTML error page
fn render_error(status: u16, message: &str) -> Response {
    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        }
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
