use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_json, header, mock_state, raw, request, test_state, StubSource};
use http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::error::Error;

#[test]
fn reviews_endpoint_serves_sample_data_when_upstream_fails() -> Result<(), Box<dyn Error>> {
    let state = mock_state();

    let mut resp = handle(request(Method::GET, "/api/reviews/hostaway"), &state)?;
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "content-type").starts_with("application/json"));

    let body = body_json(&mut resp);
    assert_eq!(body["source"], "mock");

    let reviews = body["reviews"].as_array().unwrap();
    assert_eq!(reviews.len(), 10);

    // Null provider rating, categories all 10.
    assert_eq!(reviews[0]["id"], 7453);
    assert_eq!(reviews[0]["overallRating"], 10);
    assert_eq!(reviews[0]["channel"], "airbnb");
    assert_eq!(reviews[0]["isApprovedForDisplay"], false);
    assert_eq!(reviews[0]["guestName"], "Shane Finkelstein");
    assert_eq!(reviews[0]["type"], "host-to-guest");
    Ok(())
}

#[test]
fn empty_upstream_also_falls_back() -> Result<(), Box<dyn Error>> {
    let state = test_state(StubSource::Empty);

    let mut resp = handle(request(Method::GET, "/api/reviews/hostaway"), &state)?;
    let body = body_json(&mut resp);
    assert_eq!(body["source"], "mock");
    assert_eq!(body["reviews"].as_array().map(Vec::len), Some(10));
    Ok(())
}

#[test]
fn live_reviews_are_normalized_and_tagged() -> Result<(), Box<dyn Error>> {
    let state = test_state(StubSource::Reviews(vec![
        raw(json!({ "id": 1, "rating": 4.5, "channel": "vrbo", "listingId": 9 })),
        raw(json!({
            "id": 2,
            "rating": 0,
            "reviewCategory": [{ "category": "value", "rating": "great" }],
            "isApprovedForDisplay": true,
            "listingId": 9
        })),
    ]));

    let mut resp = handle(request(Method::GET, "/api/reviews/hostaway"), &state)?;
    let body = body_json(&mut resp);

    assert_eq!(body["source"], "hostaway");
    assert_eq!(
        body["reviews"],
        json!([
            {
                "id": 1,
                "rating": 4.5,
                "channel": "vrbo",
                "listingId": 9,
                "overallRating": 4.5,
                "isApprovedForDisplay": false
            },
            {
                "id": 2,
                "rating": 0,
                "reviewCategory": [{ "category": "value", "rating": "great" }],
                "listingId": 9,
                "channel": "airbnb",
                "overallRating": null,
                "isApprovedForDisplay": true
            }
        ])
    );
    Ok(())
}

#[test]
fn properties_endpoint_groups_by_listing() -> Result<(), Box<dyn Error>> {
    let state = mock_state();

    let mut resp = handle(request(Method::GET, "/api/properties"), &state)?;
    let body = body_json(&mut resp);

    assert_eq!(body["source"], "mock");
    assert_eq!(
        body["properties"],
        json!([
            {
                "listingId": 101,
                "name": "2B N1 A - 29 Shoreditch Heights",
                "averageRating": "8.0",
                "totalReviews": 4,
                "trend": "stable"
            },
            {
                "listingId": 102,
                "name": "3B Luxury Penthouse - Canary Wharf",
                "averageRating": "8.0",
                "totalReviews": 3,
                "trend": "stable"
            },
            {
                "listingId": 103,
                "name": "1B Studio - Kings Cross",
                "averageRating": "7.7",
                "totalReviews": 3,
                "trend": "stable"
            }
        ])
    );
    Ok(())
}

#[test]
fn unknown_routes_are_not_found() {
    let state = mock_state();

    for (method, uri) in [
        (Method::GET, "/api/reviews"),
        (Method::POST, "/api/reviews/hostaway"),
        (Method::GET, "/reviews/7453/approval"),
        (Method::DELETE, "/"),
    ] {
        let result = handle(request(method.clone(), uri), &state);
        assert!(
            matches!(result, Err(ServerError::NotFound)),
            "{method} {uri} should be 404"
        );
    }
}
