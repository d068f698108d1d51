// src/tests/router_tests/properties_tests.rs

use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{get, make_app, read_body};
use serde_json::Value;

#[test]
fn root_and_health_answer() {
    let app = make_app();

    let mut resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let v: Value = serde_json::from_slice(&read_body(&mut resp)).unwrap();
    assert_eq!(v["message"], "Welcome");

    let mut resp = handle(get("/health"), &app).unwrap();
    let v: Value = serde_json::from_slice(&read_body(&mut resp)).unwrap();
    assert_eq!(v["status"], "ok");
}

#[test]
fn lists_the_seeded_catalog() {
    let app = make_app();

    let mut resp = handle(get("/properties"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()
            .get("Content-Type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json; charset=utf-8")
    );

    let v: Value = serde_json::from_slice(&read_body(&mut resp)).unwrap();
    let listings = v.as_array().unwrap();
    assert_eq!(listings.len(), 4);
    assert!(listings.iter().all(|l| {
        l["id"].is_string() && l["price"].is_i64() && l["sqft"].is_i64() && l["zip"].is_string()
    }));
}

#[test]
fn serves_a_single_property() {
    let app = make_app();

    let mut resp = handle(get("/properties/prop-001"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let v: Value = serde_json::from_slice(&read_body(&mut resp)).unwrap();
    assert_eq!(v["id"], "prop-001");
    assert_eq!(v["price"], 895_000);
    assert_eq!(v["baths"], 2.5);
}

#[test]
fn unknown_property_is_a_404_with_detail() {
    let app = make_app();

    let err = handle(get("/properties/prop-999"), &app).unwrap_err();
    let mut resp = error_to_response(err);
    assert_eq!(resp.status(), 404);

    let v: Value = serde_json::from_slice(&read_body(&mut resp)).unwrap();
    assert_eq!(v["detail"], "Property not found");
}

#[test]
fn unknown_route_is_a_404() {
    let app = make_app();
    let err = handle(get("/nope/nothing/here"), &app).unwrap_err();
    assert_eq!(error_to_response(err).status(), 404);
}

#[test]
fn brief_route_round_trips_every_section() {
    let app = make_app();

    let mut resp = handle(get("/properties/prop-001/brief"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let v: Value = serde_json::from_slice(&read_body(&mut resp)).unwrap();
    assert_eq!(v["property_id"], "prop-001");
    assert_eq!(v["overall_confidence"], "medium");
    assert_eq!(v["quick_facts"].as_array().unwrap().len(), 5);
    assert_eq!(v["estimated_monthly_fixed"].as_array().unwrap().len(), 3);
    assert_eq!(v["estimated_monthly_variable"].as_array().unwrap().len(), 2);
    assert_eq!(v["estimated_monthly_costs"].as_array().unwrap().len(), 5);
    assert_eq!(v["sources"].as_array().unwrap().len(), 3);
    assert_eq!(v["assumptions"]["loan_term_years"], 30);

    // prop-001 is 1680 sqft, so the conflict path is live end to end.
    assert_eq!(v["conflicts"].as_array().unwrap().len(), 1);
    assert_eq!(
        v["risks"][0],
        "Living area differs between listing and public record"
    );

    let range = &v["estimated_monthly_total_range"];
    assert_eq!(range["low"], 5_858);
    assert_eq!(range["high"], 6_218);
}

#[test]
fn brief_for_unknown_property_is_a_404() {
    let app = make_app();
    let err = handle(get("/properties/prop-999/brief"), &app).unwrap_err();

    let mut resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    let v: Value = serde_json::from_slice(&read_body(&mut resp)).unwrap();
    assert_eq!(v["detail"], "Property not found");
}

#[test]
fn briefs_are_stable_across_requests() {
    let app = make_app();

    let mut first = handle(get("/properties/prop-002/brief"), &app).unwrap();
    let mut second = handle(get("/properties/prop-002/brief"), &app).unwrap();
    assert_eq!(read_body(&mut first), read_body(&mut second));
}
