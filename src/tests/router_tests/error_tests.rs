// src/tests/router_tests/error_tests.rs

use crate::errors::ServerError;
use crate::templates::html_error_response;
use crate::tests::utils::{body_string, expect_err, Fixture};

#[test]
fn unknown_paths_are_not_found() {
    let fx = Fixture::new();

    let err = expect_err(fx.get("/admin", None));

    assert!(matches!(err, ServerError::NotFound));
    let resp = html_error_response(err);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn unknown_paths_do_not_open_sessions() {
    let fx = Fixture::new();

    for _ in 0..1000 {
        assert!(matches!(fx.get("/does-not-exist", None), Err(ServerError::NotFound)));
    }

    assert!(fx.app.sessions.is_empty());
}

#[test]
fn routes_are_method_specific() {
    let fx = Fixture::new();

    assert!(matches!(
        fx.get("/insights/filter", None),
        Err(ServerError::NotFound)
    ));
    assert!(matches!(fx.post("/", "", None), Err(ServerError::NotFound)));
    assert!(fx.app.sessions.is_empty());
}

#[test]
fn bad_requests_render_their_message() {
    let fx = Fixture::new();
    let cookie = fx.start_session();

    let err = expect_err(fx.post("/insights/select", "location=Plaza+A", Some(&cookie)));
    let resp = html_error_response(err);

    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("submit the filters first"));
}
