use crate::app::App;
use crate::errors::ServerError;
use crate::forms::cookie;
use crate::handlers;
use crate::responses::{css_response, ResultResp};
use crate::session::SESSION_COOKIE;
use astra::Request;
use http::HeaderValue;
use tracing::debug;

const MAIN_CSS: &str = include_str!("../static/main.css");

const SESSION_ROUTES: [(&str, &str); 7] = [
    ("GET", "/"),
    ("GET", "/insights"),
    ("POST", "/insights/filter"),
    ("POST", "/insights/select"),
    ("GET", "/insights/export"),
    ("GET", "/chat"),
    ("POST", "/chat"),
];

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "request");

    // Routes that carry no session.
    match (method.as_str(), path.as_str()) {
        ("GET", "/static/main.css") => return css_response(MAIN_CSS),
        ("POST", "/reload") => return handlers::reload(app),
        (m, p) if !SESSION_ROUTES.contains(&(m, p)) => return Err(ServerError::NotFound),
        _ => {}
    }

    let token = cookie(&req, SESSION_COOKIE);
    let session = app.sessions.resolve(token.as_deref());

    let mut resp = match (method.as_str(), path.as_str()) {
        ("GET", "/") => handlers::home(app, &session),

        ("GET", "/insights") => handlers::insights::show(app, &session),
        ("POST", "/insights/filter") => handlers::insights::filter(&mut req, app, &session),
        ("POST", "/insights/select") => handlers::insights::select(&mut req, app, &session),
        ("GET", "/insights/export") => handlers::insights::export(app, &session),

        ("GET", "/chat") => handlers::chat::show(app, &session),
        ("POST", "/chat") => handlers::chat::ask(&mut req, app, &session),

        _ => Err(ServerError::NotFound),
    }?;

    if session.is_new {
        let value = HeaderValue::from_str(&session.set_cookie_header())
            .map_err(|_| ServerError::InternalError)?;
        resp.headers_mut().insert("Set-Cookie", value);
    }

    Ok(resp)
}
