// src/tests/router_tests/directory_tests.rs

use crate::domain::business::sample;
use crate::domain::Dataset;
use crate::router::handle;
use crate::sources::LoadStatus;
use crate::tests::utils::{app_with, app_with_outcome, body_string, failed_app, get, qs, sample_app};
use scraper::{ElementRef, Html, Selector};

fn select<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    let sel = Selector::parse(css).unwrap();
    doc.select(&sel).collect()
}

fn is_hidden(doc: &Html, css: &str) -> bool {
    select(doc, css)[0].value().attr("hidden").is_some()
}

fn ids(doc: &Html, css: &str) -> Vec<String> {
    select(doc, css)
        .iter()
        .filter_map(|el| el.value().attr("data-id"))
        .map(str::to_string)
        .collect()
}

fn count_text(doc: &Html) -> String {
    select(doc, "#results-count .count")[0].text().collect()
}

#[test]
fn home_page_lists_every_business_in_the_grid() {
    let app = sample_app();
    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let doc = Html::parse_document(&body_string(resp));
    assert_eq!(ids(&doc, "#grid-view .business-card"), ["1", "2", "3", "4", "5", "6"]);
    assert_eq!(count_text(&doc), "6");
    assert!(!is_hidden(&doc, "#grid-view"));
    assert!(is_hidden(&doc, "#list-view"));
    assert!(is_hidden(&doc, "#no-results"));
    assert!(select(&doc, "#notification").is_empty());
}

#[test]
fn facets_fill_the_filter_controls() {
    let app = sample_app();
    let doc = Html::parse_document(&body_string(handle(get("/"), &app).unwrap()));

    // "All" option plus five distinct districts, sorted
    let districts: Vec<String> = select(&doc, "#district option")
        .iter()
        .filter_map(|o| o.value().attr("value"))
        .map(str::to_string)
        .collect();
    assert_eq!(districts.len(), 6);
    assert_eq!(districts[0], "");
    assert!(districts.contains(&"सूरत".to_string()));

    assert_eq!(select(&doc, "#pincode-options option").len(), 6);
    let trigger = select(&doc, "#search")[0].value().attr("hx-trigger").unwrap();
    assert!(trigger.starts_with("keyup changed delay:300ms"));
}

#[test]
fn devanagari_district_filter_narrows_results() {
    let app = sample_app();
    let uri = format!("/?{}", qs(&[("district", "सूरत")]));
    let doc = Html::parse_document(&body_string(handle(get(&uri), &app).unwrap()));

    assert_eq!(ids(&doc, "#grid-view .business-card"), ["2", "6"]);
    assert_eq!(count_text(&doc), "2");
    let selected = select(&doc, "#district option[selected]");
    assert_eq!(selected[0].value().attr("value"), Some("सूरत"));
}

#[test]
fn filters_combine_with_and() {
    let app = sample_app();
    let uri = format!("/results?{}", qs(&[("district", "सूरत"), ("pincode", "3945")]));
    let doc = Html::parse_fragment(&body_string(handle(get(&uri), &app).unwrap()));
    assert_eq!(ids(&doc, "#grid-view .business-card"), ["6"]);
}

#[test]
fn text_search_matches_owner_name() {
    let app = sample_app();
    let uri = format!("/results?{}", qs(&[("q", "महेश")]));
    let doc = Html::parse_fragment(&body_string(handle(get(&uri), &app).unwrap()));
    assert_eq!(ids(&doc, "#grid-view .business-card"), ["2"]);
}

#[test]
fn results_endpoint_returns_a_fragment() {
    let app = sample_app();
    let body = body_string(handle(get("/results?view=list"), &app).unwrap());
    assert!(!body.contains("<html"));
    assert!(body.starts_with(r#"<div id="results""#));

    let doc = Html::parse_fragment(&body);
    let view = select(&doc, "#view-input")[0].value();
    assert_eq!(view.attr("value"), Some("list"));
    assert_eq!(view.attr("hx-swap-oob"), Some("true"));
}

#[test]
fn toggling_the_view_keeps_the_same_subset() {
    let app = sample_app();
    let filter = qs(&[("district", "सूरत")]);

    let grid = Html::parse_fragment(&body_string(
        handle(get(&format!("/results?{filter}&view=grid")), &app).unwrap(),
    ));
    let list = Html::parse_fragment(&body_string(
        handle(get(&format!("/results?{filter}&view=list")), &app).unwrap(),
    ));

    assert_eq!(ids(&grid, "#grid-view .business-card"), ids(&list, "#list-view .business-row"));
    assert!(is_hidden(&list, "#grid-view"));
    assert!(!is_hidden(&list, "#list-view"));

    // toggle links keep the filter
    let to_list = select(&grid, r#".view-toggle a[data-view="list"]"#)[0].value();
    assert_eq!(to_list.attr("hx-get"), Some(format!("/results?{filter}&view=list").as_str()));
}

#[test]
fn unknown_view_falls_back_to_grid() {
    let app = sample_app();
    let doc = Html::parse_fragment(&body_string(handle(get("/results?view=tiles"), &app).unwrap()));
    assert!(!is_hidden(&doc, "#grid-view"));
    assert!(is_hidden(&doc, "#list-view"));
}

#[test]
fn empty_result_shows_the_empty_state() {
    let app = sample_app();
    let uri = format!("/results?{}&view=list", qs(&[("q", "zzz-no-such-shop")]));
    let doc = Html::parse_fragment(&body_string(handle(get(&uri), &app).unwrap()));

    assert_eq!(count_text(&doc), "0");
    assert!(!is_hidden(&doc, "#no-results"));
    assert!(is_hidden(&doc, "#grid-view"));
    assert!(is_hidden(&doc, "#list-view"));
    assert!(select(&doc, ".business-row").is_empty());
}

#[test]
fn record_text_is_escaped() {
    let mut evil = sample("x1", "<script>alert('pwned')</script>", "Surat", "Food", "395001");
    evil.description = Some("<img src=x onerror=alert(1)>".into());
    let app = app_with(vec![evil]);

    let body = body_string(handle(get("/"), &app).unwrap());
    assert!(!body.contains("<script>alert"));
    assert!(body.contains("&lt;script&gt;"));

    let doc = Html::parse_document(&body);
    assert!(select(&doc, "#grid-view script").is_empty());
}

#[test]
fn failed_load_shows_a_banner_and_an_empty_directory() {
    let app = failed_app();
    let resp = handle(get("/"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let doc = Html::parse_document(&body_string(resp));
    let banner = select(&doc, "#notification");
    assert_eq!(banner.len(), 1);
    assert_eq!(banner[0].value().attr("data-ttl-ms"), Some("5000"));
    assert_eq!(select(&doc, r#"#notification form[action="/reload"]"#).len(), 1);

    assert_eq!(count_text(&doc), "0");
    assert!(!is_hidden(&doc, "#no-results"));
}

#[test]
fn featured_strip_shows_featured_records_only() {
    let app = sample_app();
    let doc = Html::parse_document(&body_string(handle(get("/"), &app).unwrap()));
    assert_eq!(ids(&doc, "#featured .business-card"), ["1", "3", "5", "6"]);
}

#[test]
fn district_sort_is_opt_in() {
    let records = vec![
        sample("a", "A", "Surat", "Food", "395001"),
        sample("b", "B", "Ahmedabad", "Retail", "380001"),
        sample("c", "C", "Ahmedabad", "Food", "380002"),
    ];
    let mut app = app_with_outcome(Dataset::new(records), LoadStatus::Loaded { count: 3 });

    let doc = Html::parse_fragment(&body_string(handle(get("/results"), &app).unwrap()));
    assert_eq!(ids(&doc, "#grid-view .business-card"), ["a", "b", "c"]);

    app.config.ui.sort_by_district_category = true;
    let doc = Html::parse_fragment(&body_string(handle(get("/results"), &app).unwrap()));
    assert_eq!(ids(&doc, "#grid-view .business-card"), ["c", "b", "a"]);
}

#[test]
fn unknown_route_is_not_found() {
    let app = sample_app();
    assert!(matches!(
        handle(get("/admin"), &app),
        Err(crate::errors::ServerError::NotFound)
    ));
}
