// src/tests/router_tests/chat_tests.rs

use crate::errors::ServerError;
use crate::tests::utils::{body_string, expect_err, header, Fixture};
use scraper::{Html, Selector};
use std::sync::atomic::Ordering;

#[test]
fn questions_and_answers_are_kept_in_the_transcript() {
    let fx = Fixture::new();
    let cookie = fx.start_session();

    let resp = fx
        .post("/chat", "question=How+many+seats+do+I+need%3F", Some(&cookie))
        .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/chat");

    let body = body_string(fx.get("/chat", Some(&cookie)).unwrap());
    let doc = Html::parse_document(&body);
    let turns = Selector::parse(".chat-turn").unwrap();

    assert_eq!(doc.select(&turns).count(), 1);
    assert!(body.contains("How many seats do I need?"));
    assert!(body.contains("Plenty of lunchtime office workers."));
    assert_eq!(fx.advisor_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn blank_questions_never_reach_the_advisor() {
    let fx = Fixture::new();
    let cookie = fx.start_session();

    let resp = fx.post("/chat", "question=+++", Some(&cookie)).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(fx.advisor_calls.load(Ordering::SeqCst), 0);
    let body = body_string(fx.get("/chat", Some(&cookie)).unwrap());
    assert!(!body.contains("chat-turn"));
}

#[test]
fn advisor_failures_show_as_messages() {
    let fx = Fixture::failing();
    let cookie = fx.start_session();

    let resp = fx.post("/chat", "question=Permits%3F", Some(&cookie)).unwrap();
    assert_eq!(resp.status(), 303);

    let body = body_string(fx.get("/chat", Some(&cookie)).unwrap());
    assert!(body.contains("An error occurred: request failed: connection refused"));
}

#[test]
fn transcripts_are_per_session() {
    let fx = Fixture::new();
    let alice = fx.start_session();
    let bob = fx.start_session();

    fx.post("/chat", "question=Alice+asks", Some(&alice)).unwrap();

    let body = body_string(fx.get("/chat", Some(&bob)).unwrap());
    assert!(!body.contains("Alice asks"));
}

#[test]
fn oversized_questions_are_rejected_unanswered() {
    let fx = Fixture::new();
    let cookie = fx.start_session();
    let form = format!("question={}", "a".repeat(70 * 1024));

    let err = expect_err(fx.post("/chat", &form, Some(&cookie)));

    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(fx.advisor_calls.load(Ordering::SeqCst), 0);
}
