// src/tests/router_tests/lang_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, get_with_cookie, qs, sample_app};

#[test]
fn choosing_a_language_sets_the_cookie() {
    let app = sample_app();
    let uri = format!("/lang?{}", qs(&[("value", "gujarati"), ("next", "/business/2")]));
    let resp = handle(get(&uri), &app).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get("Location").unwrap(), "/business/2");
    let cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("lang=gujarati;"));
    assert!(cookie.contains("Max-Age=31536000"));
}

#[test]
fn off_site_next_goes_home() {
    let app = sample_app();
    let uri = format!("/lang?{}", qs(&[("value", "english"), ("next", "https://evil.example/")]));
    let resp = handle(get(&uri), &app).unwrap();
    assert_eq!(resp.headers().get("Location").unwrap(), "/");
}

#[test]
fn unknown_language_is_rejected() {
    let app = sample_app();
    assert!(matches!(
        handle(get("/lang?value=klingon"), &app),
        Err(ServerError::BadRequest(_))
    ));
}

#[test]
fn cookie_language_is_rendered() {
    let app = sample_app();

    let english = body_string(handle(get_with_cookie("/", "lang=english"), &app).unwrap());
    assert!(english.contains(r#"<html lang="en">"#));
    assert!(english.contains("Keval Sanatani Vyapar"));

    // no cookie: configured default
    let hindi = body_string(handle(get("/"), &app).unwrap());
    assert!(hindi.contains(r#"<html lang="hi">"#));

    // garbage cookie: configured default
    let junk = body_string(handle(get_with_cookie("/", "lang=xx"), &app).unwrap());
    assert!(junk.contains(r#"<html lang="hi">"#));
}
