use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, header, htmx, mock_state, request};
use http::Method;
use std::error::Error;

#[test]
fn htmx_toggle_returns_the_swapped_switch() -> Result<(), Box<dyn Error>> {
    let state = mock_state();

    let mut resp = handle(htmx(request(Method::POST, "/reviews/7454/approval")), &state)?;
    assert_eq!(resp.status(), 200);
    let html = body_string(&mut resp);
    assert!(html.contains(r#"data-review-id="7454""#));
    assert!(html.contains(r#"aria-checked="true""#));
    assert!(!html.contains("<html"));

    let mut resp = handle(htmx(request(Method::POST, "/reviews/7454/approval")), &state)?;
    let html = body_string(&mut resp);
    assert!(html.contains(r#"aria-checked="false""#));
    Ok(())
}

#[test]
fn plain_post_redirects_to_dashboard() -> Result<(), Box<dyn Error>> {
    let state = mock_state();

    let resp = handle(request(Method::POST, "/reviews/7455/approval"), &state)?;
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "location"), "/");

    let mut resp = handle(request(Method::GET, "/"), &state)?;
    let html = body_string(&mut resp);
    let toggle_start = html.find(r#"data-review-id="7455""#).unwrap();
    assert!(html[toggle_start..].contains(r#"aria-checked="true""#));
    Ok(())
}

#[test]
fn toggling_only_affects_one_review() -> Result<(), Box<dyn Error>> {
    let state = mock_state();

    handle(request(Method::POST, "/reviews/7456/approval"), &state)?;

    let approved: Vec<bool> = state
        .load_feed()
        .reviews
        .iter()
        .map(|r| state.approvals().is_approved(r))
        .collect();
    assert_eq!(approved.iter().filter(|a| **a).count(), 1);
    assert!(approved[3]);
    Ok(())
}

#[test]
fn unknown_review_is_not_found() {
    let state = mock_state();

    let result = handle(request(Method::POST, "/reviews/9999/approval"), &state);
    assert!(matches!(result, Err(ServerError::NotFound)));
}
