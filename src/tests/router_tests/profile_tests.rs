// src/tests/router_tests/profile_tests.rs

use crate::domain::business::sample;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{app_with, body_string, get, sample_app};
use scraper::{Html, Selector};

fn hrefs(doc: &Html, css: &str) -> Vec<String> {
    let sel = Selector::parse(css).unwrap();
    doc.select(&sel)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect()
}

#[test]
fn profile_is_selected_by_id() {
    let app = sample_app();
    let resp = handle(get("/business/6"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("दीपज्योत प्राकृतिक फार्म"));

    let doc = Html::parse_document(&body);
    assert_eq!(hrefs(&doc, ".contact-actions .call"), ["tel:+919825114688"]);
    assert_eq!(hrefs(&doc, ".contact-actions .whatsapp"), ["https://wa.me/919825114688"]);
}

#[test]
fn share_link_points_at_the_profile() {
    let app = sample_app();
    let req = http::Request::builder()
        .uri("/business/2")
        .header("Host", "vyapar.example")
        .body(astra::Body::empty())
        .unwrap();
    let doc = Html::parse_document(&body_string(handle(req, &app).unwrap()));

    let share = &hrefs(&doc, ".contact-actions .share")[0];
    assert!(share.starts_with("https://wa.me/?text="));
    assert!(share.contains("http%3A%2F%2Fvyapar.example%2Fbusiness%2F2"));
}

#[test]
fn non_ascii_id_links_and_resolves() {
    let app = app_with(vec![sample("ओम 1", "Om Stores", "Surat", "Retail", "395001")]);

    let doc = Html::parse_document(&body_string(handle(get("/"), &app).unwrap()));
    let href = &hrefs(&doc, "#grid-view .card-link")[0];
    assert_eq!(href, "/business/%E0%A4%93%E0%A4%AE%201");

    let resp = handle(get(href), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Om Stores"));
}

#[test]
fn unknown_id_is_not_found() {
    let app = sample_app();
    assert!(matches!(handle(get("/business/999"), &app), Err(ServerError::NotFound)));
}

#[test]
fn unsafe_website_is_not_linked() {
    let mut b = sample("w1", "Web Shop", "Surat", "Retail", "395001");
    b.website = Some("javascript:alert(1)".into());
    let app = app_with(vec![b]);

    let doc = Html::parse_document(&body_string(handle(get("/business/w1"), &app).unwrap()));
    assert!(hrefs(&doc, ".contact-actions .website").is_empty());
}

#[test]
fn register_redirects_to_the_external_form() {
    let app = sample_app();
    let resp = handle(get("/register"), &app).unwrap();
    assert_eq!(resp.status(), 302);
    let location = resp.headers().get("Location").unwrap().to_str().unwrap();
    assert!(location.starts_with("https://docs.google.com/forms/"));
}
