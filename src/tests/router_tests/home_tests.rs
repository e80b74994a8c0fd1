// src/tests/router_tests/home_tests.rs

use crate::tests::utils::{body_string, header, session_cookie, Fixture};
use scraper::{Html, Selector};

#[test]
fn landing_page_opens_a_session() {
    let fx = Fixture::new();

    let resp = fx.get("/", None).unwrap();

    assert_eq!(resp.status(), 200);
    let cookie = session_cookie(&resp).expect("Set-Cookie on first visit");
    assert!(cookie.starts_with("footflow_session="));
    assert!(header(&resp, "Set-Cookie").contains("HttpOnly"));
    assert!(body_string(resp).contains("Welcome to Foot Flow!"));
    assert_eq!(fx.app.sessions.len(), 1);
}

#[test]
fn returning_browser_keeps_its_session() {
    let fx = Fixture::new();
    let cookie = fx.start_session();

    let resp = fx.get("/", Some(&cookie)).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(session_cookie(&resp).is_none());
    assert_eq!(fx.app.sessions.len(), 1);
}

#[test]
fn navigation_marks_the_current_page() {
    let fx = Fixture::new();
    let cookie = fx.start_session();

    let body = body_string(fx.get("/chat", Some(&cookie)).unwrap());
    let doc = Html::parse_document(&body);

    let active = Selector::parse("nav a.active").unwrap();
    let labels: Vec<String> = doc
        .select(&active)
        .map(|a| a.text().collect::<String>())
        .collect();
    assert_eq!(labels, vec!["Chatbot".to_string()]);
}

#[test]
fn stylesheet_is_served_without_a_session() {
    let fx = Fixture::new();

    let resp = fx.get("/static/main.css", None).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/css"));
    assert!(fx.app.sessions.is_empty());
}

#[test]
fn cookieless_visits_are_capped() {
    let fx = Fixture::with_max_sessions(5);

    for _ in 0..100 {
        fx.get("/", None).unwrap();
    }

    assert_eq!(fx.app.sessions.len(), 5);
}
