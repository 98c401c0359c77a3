use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_string, header, mock_state, raw, request, test_state, StubSource};
use http::Method;
use scraper::{Html, Selector};
use serde_json::json;
use std::error::Error;

fn dashboard(uri: &str) -> Result<Html, Box<dyn Error>> {
    let state = mock_state();
    let mut resp = handle(request(Method::GET, uri), &state)?;
    assert_eq!(resp.status(), 200);
    Ok(Html::parse_document(&body_string(&mut resp)))
}

fn count(doc: &Html, selector: &str) -> usize {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector).count()
}

fn texts(doc: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).unwrap();
    doc.select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

#[test]
fn dashboard_shows_metric_cards_and_every_review() -> Result<(), Box<dyn Error>> {
    let doc = dashboard("/")?;

    assert_eq!(count(&doc, "#metrics .metric-card"), 3);
    assert_eq!(count(&doc, "#reviews tr.review-row"), 10);
    assert_eq!(count(&doc, "#reviews tr.empty"), 0);
    assert_eq!(count(&doc, "#source-notice"), 1);

    let averages = texts(&doc, "#metrics .metric-card .average");
    assert_eq!(averages, vec!["8.0/10", "8.0/10", "7.7/10"]);
    Ok(())
}

#[test]
fn sidebar_lists_every_property() -> Result<(), Box<dyn Error>> {
    let doc = dashboard("/")?;

    let selector = Selector::parse(".property-links a").unwrap();
    let hrefs: Vec<&str> = doc
        .select(&selector)
        .filter_map(|a| a.value().attr("href"))
        .collect();
    assert_eq!(hrefs, vec!["/property/101", "/property/102", "/property/103"]);
    Ok(())
}

#[test]
fn property_filter_narrows_rows() -> Result<(), Box<dyn Error>> {
    let doc = dashboard("/?property=102&channel=all")?;

    assert_eq!(count(&doc, "#reviews tr.review-row"), 3);
    // Cards always summarize the full set.
    assert_eq!(count(&doc, "#metrics .metric-card"), 3);

    let selected = texts(&doc, "#property option[selected]");
    assert_eq!(selected, vec!["3B Luxury Penthouse - Canary Wharf"]);
    Ok(())
}

#[test]
fn channel_filter_narrows_rows() -> Result<(), Box<dyn Error>> {
    let doc = dashboard("/?channel=direct")?;

    assert_eq!(count(&doc, "#reviews tr.review-row"), 1);
    let channels = texts(&doc, "#reviews tr.review-row .channel");
    assert_eq!(channels, vec!["direct"]);
    Ok(())
}

#[test]
fn combined_filters_can_match_nothing() -> Result<(), Box<dyn Error>> {
    let doc = dashboard("/?property=103&channel=airbnb")?;

    assert_eq!(count(&doc, "#reviews tr.review-row"), 0);
    assert_eq!(count(&doc, "#reviews tr.empty"), 1);
    Ok(())
}

#[test]
fn bad_property_filter_is_a_bad_request() {
    let state = mock_state();

    match handle(request(Method::GET, "/?property=penthouse"), &state) {
        Err(err @ ServerError::BadRequest(_)) => {
            let resp = error_to_response(err);
            assert_eq!(resp.status(), 400);
        }
        Err(other) => panic!("expected a bad request, got {other}"),
        Ok(_) => panic!("expected a bad request, got a page"),
    }
}

#[test]
fn live_data_hides_the_sample_notice() -> Result<(), Box<dyn Error>> {
    let state = test_state(StubSource::Reviews(vec![raw(json!({
        "id": 1,
        "rating": 9,
        "listingId": 5,
        "listingName": "Garden Flat",
        "guestName": "Ola"
    }))]));

    let mut resp = handle(request(Method::GET, "/"), &state)?;
    let doc = Html::parse_document(&body_string(&mut resp));

    assert_eq!(count(&doc, "#source-notice"), 0);
    assert_eq!(count(&doc, "#metrics .metric-card"), 1);
    assert_eq!(count(&doc, "#reviews tr.review-row"), 1);
    Ok(())
}

#[test]
fn reviews_start_hidden_unless_the_provider_approved_them() -> Result<(), Box<dyn Error>> {
    let state = test_state(StubSource::Reviews(vec![
        raw(json!({ "id": 1, "listingId": 5 })),
        raw(json!({ "id": 2, "listingId": 5, "isApprovedForDisplay": true })),
    ]));

    let mut resp = handle(request(Method::GET, "/"), &state)?;
    let doc = Html::parse_document(&body_string(&mut resp));

    let selector = Selector::parse("#reviews .approval-toggle button").unwrap();
    let checked: Vec<&str> = doc
        .select(&selector)
        .filter_map(|b| b.value().attr("aria-checked"))
        .collect();
    assert_eq!(checked, vec!["false", "true"]);
    Ok(())
}

#[test]
fn stylesheet_linked_from_layout_is_served() -> Result<(), Box<dyn Error>> {
    let doc = dashboard("/")?;
    let link = Selector::parse(r#"link[rel="stylesheet"]"#).unwrap();
    let href = doc
        .select(&link)
        .next()
        .and_then(|l| l.value().attr("href"))
        .unwrap_or_default()
        .to_string();

    let state = mock_state();
    let mut resp = handle(request(Method::GET, &href), &state)?;
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "content-type").starts_with("text/css"));
    assert!(body_string(&mut resp).contains(".approval-toggle"));
    Ok(())
}

#[test]
fn layout_loads_htmx_for_the_toggles() -> Result<(), Box<dyn Error>> {
    let doc = dashboard("/")?;
    let script = Selector::parse("head script[src]").unwrap();
    let srcs: Vec<&str> = doc
        .select(&script)
        .filter_map(|s| s.value().attr("src"))
        .collect();
    assert!(srcs.iter().any(|src| src.contains("htmx")));
    Ok(())
}
