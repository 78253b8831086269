// src/tests/router_tests/submission_tests.rs

use crate::db::submissions::{count_contacts, count_subscriptions};
use crate::forms;
use crate::router::handle;
use crate::tests::utils::{body_string, post, sample_app};
use serde_json::Value;

const FORM: &str = "application/x-www-form-urlencoded";
const JSON: &str = "application/json";

fn json_body(resp: astra::Response) -> Value {
    serde_json::from_str(&body_string(resp)).unwrap()
}

#[test]
fn contact_reports_missing_fields() {
    let app = sample_app();
    let resp = handle(post("/api/contact", FORM, "firstName=Ram&email=ram%40example.com"), &app).unwrap();
    assert_eq!(resp.status(), 400);

    let body = json_body(resp);
    assert_eq!(body["success"], false);
    assert_eq!(body["missing_fields"], serde_json::json!(["subject", "message"]));
}

#[test]
fn contact_json_is_stored() {
    let app = sample_app();
    let payload = r#"{"firstName":"Ram","email":"ram@example.com","subject":"Listing","message":"Please add my shop","phone":9825011111}"#;
    let resp = handle(post("/api/contact", JSON, payload), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = json_body(resp);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], forms::MSG_CONTACT_OK);
    assert!(body["submission_id"].as_str().unwrap().starts_with("CONTACT_"));

    assert_eq!(app.db.with_conn(|c| count_contacts(c)).unwrap(), 1);
}

#[test]
fn oversized_body_is_rejected_not_truncated() {
    let app = sample_app();
    let body = format!(
        "firstName=Ram&email=ram%40example.com&subject=Big&message={}",
        "a".repeat(70 * 1024)
    );
    let resp = handle(post("/api/contact", FORM, &body), &app).unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(json_body(resp)["success"], false);

    assert_eq!(app.db.with_conn(|c| count_contacts(c)).unwrap(), 0);
}

#[test]
fn malformed_json_is_a_bad_request() {
    let app = sample_app();
    let resp = handle(post("/api/contact", JSON, "{not json"), &app).unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(json_body(resp)["success"], false);
}

#[test]
fn newsletter_validates_and_dedupes() {
    let app = sample_app();

    let resp = handle(post("/api/newsletter", FORM, "email=nobody"), &app).unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(json_body(resp)["message"], forms::MSG_EMAIL_INVALID);

    for _ in 0..2 {
        let resp = handle(post("/api/newsletter", FORM, "email=Ram%40Example.com"), &app).unwrap();
        assert_eq!(resp.status(), 200);
    }
    assert_eq!(app.db.with_conn(|c| count_subscriptions(c)).unwrap(), 1);
}

#[test]
fn htmx_forms_get_a_banner() {
    let app = sample_app();
    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/api/newsletter")
        .header("Content-Type", FORM)
        .header("HX-Request", "true")
        .body(astra::Body::from("email="))
        .unwrap();

    let resp = handle(req, &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains(r#"id="notification""#));
    assert!(body.contains("notification-error"));
    assert!(body.contains(forms::MSG_EMAIL_REQUIRED));
}
