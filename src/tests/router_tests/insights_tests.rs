// src/tests/router_tests/insights_tests.rs

use crate::errors::ServerError;
use crate::templates::pages::insights::NO_MATCHES;
use crate::tests::utils::{
    body_bytes, body_string, expect_err, header, Fixture, CATALOG_CSV,
};
use scraper::{Html, Selector};
use std::sync::atomic::Ordering;

/// Cafe + Italian at 1,000 sq ft; only Plaza A matches.
const ITALIAN_CAFE: &str =
    "restaurant_type=Cafe&cuisine=Italian&startup_costs=%3C%2410%2C000&square_footage=1000";

/// Matches Plaza A (Italian) and Plaza B (Mexican).
const ITALIAN_OR_MEXICAN: &str = "restaurant_type=Other&cuisine=Italian&cuisine=Mexican\
&startup_costs=%24100%2C000%2B&square_footage=500";

fn column(body: &str, selector: &str) -> Vec<String> {
    let doc = Html::parse_document(body);
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel)
        .map(|td| td.text().collect::<String>().trim().to_string())
        .collect()
}

fn insights(fx: &Fixture, cookie: &str) -> String {
    body_string(fx.get("/insights", Some(cookie)).unwrap())
}

#[test]
fn fresh_session_shows_only_the_form() {
    let fx = Fixture::new();
    let cookie = fx.start_session();

    let body = insights(&fx, &cookie);

    assert!(body.contains("Restaurant Type:"));
    assert!(column(&body, "#results td.name").is_empty());
    assert!(!body.contains(NO_MATCHES));
}

#[test]
fn filtering_lists_matching_plazas_with_lease_costs() {
    let fx = Fixture::new();
    let cookie = fx.start_session();

    let resp = fx.post("/insights/filter", ITALIAN_CAFE, Some(&cookie)).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/insights");

    let body = insights(&fx, &cookie);

    assert_eq!(column(&body, "#results td.name"), vec!["Plaza A"]);
    assert_eq!(column(&body, "#results td.monthly"), vec!["$2,500"]);
    assert_eq!(column(&body, "#results td.yearly"), vec!["$30,000"]);
}

#[test]
fn form_keeps_the_submitted_choices() {
    let fx = Fixture::new();
    let cookie = fx.start_session();
    fx.post("/insights/filter", ITALIAN_OR_MEXICAN, Some(&cookie))
        .unwrap();

    let body = insights(&fx, &cookie);

    assert_eq!(
        column(&body, "select[name=cuisine] option[selected]"),
        vec!["Italian", "Mexican"]
    );
    assert_eq!(
        column(&body, "select[name=restaurant_type] option[selected]"),
        vec!["Other"]
    );
}

#[test]
fn no_matches_is_an_empty_state() {
    let fx = Fixture::new();
    let cookie = fx.start_session();

    fx.post(
        "/insights/filter",
        "restaurant_type=Buffet&cuisine=Japanese&startup_costs=%3C%2410%2C000&square_footage=800",
        Some(&cookie),
    )
    .unwrap();
    let body = insights(&fx, &cookie);

    assert!(body.contains(NO_MATCHES));
    assert!(column(&body, "#results td.name").is_empty());
}

#[test]
fn out_of_range_square_footage_is_rejected() {
    let fx = Fixture::new();
    let cookie = fx.start_session();

    let err = expect_err(fx.post(
        "/insights/filter",
        "restaurant_type=Cafe&startup_costs=%3C%2410%2C000&square_footage=50",
        Some(&cookie),
    ));

    assert!(matches!(err, ServerError::BadRequest(msg) if msg.contains("between")));
}

#[test]
fn unknown_choices_are_rejected() {
    let fx = Fixture::new();
    let cookie = fx.start_session();

    let err = expect_err(fx.post(
        "/insights/filter",
        "restaurant_type=Diner&startup_costs=%3C%2410%2C000&square_footage=500",
        Some(&cookie),
    ));

    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn selecting_a_plaza_shows_advice_and_traffic() {
    let fx = Fixture::new();
    let cookie = fx.start_session();
    fx.post("/insights/filter", ITALIAN_CAFE, Some(&cookie))
        .unwrap();

    let resp = fx
        .post("/insights/select", "location=Plaza+A", Some(&cookie))
        .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(fx.advisor_calls.load(Ordering::SeqCst), 1);

    let body = insights(&fx, &cookie);
    let doc = Html::parse_document(&body);

    assert!(body.contains("Detailed Information about Plaza A"));
    assert!(body.contains("Plenty of lunchtime office workers."));
    // Daily sums 100, 200, 300, 400.
    assert!(body.contains("250 people"));
    assert!(body.contains("1,750 people"));
    assert!(body.contains("1,000 people"));
    // Thursday's single sample of 400 beats Monday's mean of 200.
    assert!(body.contains("Busiest day: <strong>Thursday</strong>"));
    // Monday and Tuesday tie at 200; the earlier day wins.
    assert_eq!(
        column(&body, "#detail .extremes p.quietest strong"),
        vec!["Monday", "Week 4", "February"]
    );
    assert!(!body.contains('\u{b7}'));

    let bars = Selector::parse("#detail rect.bar").unwrap();
    assert!(doc.select(&bars).count() > 0);
    let points = Selector::parse("#detail circle.point").unwrap();
    assert_eq!(doc.select(&points).count(), 4);

    // No hourly file configured.
    assert!(body.contains("typical estimate"));
}

#[test]
fn plaza_without_traffic_gets_a_message() {
    let fx = Fixture::new();
    let cookie = fx.start_session();
    fx.post("/insights/filter", ITALIAN_OR_MEXICAN, Some(&cookie))
        .unwrap();

    fx.post("/insights/select", "location=Plaza+B", Some(&cookie))
        .unwrap();
    let body = insights(&fx, &cookie);

    assert!(body.contains("No foot traffic data available for Plaza B."));
    assert!(!body.contains("Overall Foot Traffic Insights"));
}

#[test]
fn selection_must_come_from_the_current_results() {
    let fx = Fixture::new();
    let cookie = fx.start_session();
    fx.post("/insights/filter", ITALIAN_CAFE, Some(&cookie))
        .unwrap();

    let err = expect_err(fx.post("/insights/select", "location=Plaza+B", Some(&cookie)));

    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(fx.advisor_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn advisor_failure_is_shown_in_place_of_the_analysis() {
    let fx = Fixture::failing();
    let cookie = fx.start_session();
    fx.post("/insights/filter", ITALIAN_CAFE, Some(&cookie))
        .unwrap();

    let resp = fx
        .post("/insights/select", "location=Plaza+A", Some(&cookie))
        .unwrap();
    assert_eq!(resp.status(), 303);

    let body = insights(&fx, &cookie);
    assert!(body.contains("An error occurred"));
    // Traffic still renders.
    assert!(body.contains("Overall Foot Traffic Insights"));
}

#[test]
fn new_filters_clear_the_selection() {
    let fx = Fixture::new();
    let cookie = fx.start_session();
    fx.post("/insights/filter", ITALIAN_OR_MEXICAN, Some(&cookie))
        .unwrap();
    fx.post("/insights/select", "location=Plaza+A", Some(&cookie))
        .unwrap();

    fx.post("/insights/filter", ITALIAN_CAFE, Some(&cookie))
        .unwrap();
    let body = insights(&fx, &cookie);

    assert!(!body.contains("Detailed Information about"));
    assert_eq!(column(&body, "#results td.name"), vec!["Plaza A"]);
}

#[test]
fn results_export_as_a_workbook() {
    let fx = Fixture::new();
    let cookie = fx.start_session();
    fx.post("/insights/filter", ITALIAN_CAFE, Some(&cookie))
        .unwrap();

    let resp = fx.get("/insights/export", Some(&cookie)).unwrap();

    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").contains("spreadsheetml"));
    assert!(header(&resp, "Content-Disposition").contains("footflow_locations.xlsx"));
    assert!(body_bytes(resp).starts_with(b"PK"));
}

#[test]
fn export_needs_results() {
    let fx = Fixture::new();
    let cookie = fx.start_session();

    let err = expect_err(fx.get("/insights/export", Some(&cookie)));

    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn schema_errors_render_inside_the_view() {
    let fx = Fixture::with_catalog(
        "Location Name,Cuisine Compatibility,Image URL\nPlaza A,Italian,https://img/a.jpg\n",
    );
    let cookie = fx.start_session();

    let resp = fx.get("/insights", Some(&cookie)).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    assert!(body.contains("missing required columns"));
    assert!(body.contains("Address"));
    assert!(body.contains("Average Lease Rate ($/sq ft)"));
    assert!(!body.contains("Restaurant Type:"));
}

#[test]
fn reload_picks_up_an_edited_catalog() {
    let fx = Fixture::new();
    let cookie = fx.start_session();
    fx.post("/insights/filter", ITALIAN_CAFE, Some(&cookie))
        .unwrap();

    let edited = format!(
        "{CATALOG_CSV}Plaza D,4 Pine St,Italian Bistro,https://img/d.jpg,900,4.0,$$$,Available\n"
    );
    std::fs::write(fx.catalog_path(), edited).unwrap();

    // Still served from the cache.
    fx.post("/insights/filter", ITALIAN_CAFE, Some(&cookie))
        .unwrap();
    assert_eq!(
        column(&insights(&fx, &cookie), "#results td.name"),
        vec!["Plaza A"]
    );

    let resp = fx.post("/reload", "", Some(&cookie)).unwrap();
    assert_eq!(resp.status(), 303);

    fx.post("/insights/filter", ITALIAN_CAFE, Some(&cookie))
        .unwrap();
    assert_eq!(
        column(&insights(&fx, &cookie), "#results td.name"),
        vec!["Plaza A", "Plaza D"]
    );
}
