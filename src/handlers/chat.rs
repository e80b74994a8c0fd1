// src/handlers/chat.rs

use astra::Request;
use tracing::info;

use crate::advisor::answer_question;
use crate::app::App;
use crate::forms::read_form;
use crate::responses::{html_response, see_other, ResultResp};
use crate::session::{Page, SessionHandle};
use crate::templates::pages::chat_page;

/// GET /chat
pub fn show(app: &App, session: &SessionHandle) -> ResultResp {
    let state = app.sessions.with_state(session, |s| {
        s.navigate(Page::Chat);
        s.clone()
    });
    html_response(chat_page(&state.chat))
}

/// POST /chat
///
/// A blank question is ignored rather than sent upstream.
pub fn ask(req: &mut Request, app: &App, session: &SessionHandle) -> ResultResp {
    let form = read_form(req)?;
    let question = form.get("question").map(str::trim).unwrap_or_default();
    if question.is_empty() {
        return see_other(Page::Chat.path());
    }

    let answer = answer_question(
        app.advisor.as_ref(),
        question,
        app.config.advisor.chat_max_tokens,
    );
    info!(chars = question.len(), failed = answer.is_failure(), "chat answered");

    let question = question.to_string();
    app.sessions.with_state(session, |s| {
        s.navigate(Page::Chat);
        s.record_chat(question, answer);
    });
    see_other(Page::Chat.path())
}
