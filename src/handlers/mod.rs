//! One function per route. Each takes the shared [`App`] and the caller's
//! session and answers with a page, a redirect or a file.

pub mod chat;
pub mod insights;

use tracing::info;

use crate::app::App;
use crate::responses::{html_response, see_other, ResultResp};
use crate::session::{Page, SessionHandle};
use crate::templates::pages::home_page;

pub fn home(app: &App, session: &SessionHandle) -> ResultResp {
    app.sessions.with_state(session, |s| s.navigate(Page::Landing));
    html_response(home_page())
}

/// Drop every cached table so edited files are picked up.
pub fn reload(app: &App) -> ResultResp {
    app.tables.reload();
    info!(catalog = %app.tables.catalog_path().display(), "data caches cleared");
    see_other(Page::Insights.path())
}
