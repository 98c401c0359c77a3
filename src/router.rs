use crate::errors::{ResultResp, ServerError};
use crate::hostaway::{Provenance, ReviewId};
use crate::responses::{html_response, json_response, see_other, stylesheet};
use crate::reviews::{
    aggregate, featured, filter_reviews, ChannelFilter, PropertyFilter, PropertyMetric, ReviewFilter,
};
use crate::state::AppState;
use crate::templates::approval_toggle;
use crate::templates::pages::{dashboard_page, property_page, DashboardVm, PropertyVm, ReviewRow};
use astra::Request;
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

const HX_REQUEST: &str = "HX-Request";

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let is_htmx = req.headers().contains_key(HX_REQUEST);
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    debug!(method, path, "routing request");

    match (method, segments.as_slice()) {
        ("GET", [""]) => dashboard(state, &parse_query(req.uri().query())),
        ("GET", ["api", "reviews", "hostaway"]) => json_response(&state.load_feed()),
        ("GET", ["api", "properties"]) => properties(state),
        ("GET", ["static", "main.css"]) => stylesheet(),
        ("GET", ["property", listing_id]) => property(state, listing_id),
        ("POST", ["reviews", review_id, "approval"]) => toggle_approval(state, review_id, is_htmx),
        _ => Err(ServerError::NotFound),
    }
}

fn dashboard(state: &AppState, query: &HashMap<String, String>) -> ResultResp {
    let filter = ReviewFilter {
        property: query
            .get("property")
            .map(|v| v.parse::<PropertyFilter>())
            .transpose()?
            .unwrap_or_default(),
        channel: query
            .get("channel")
            .map(|v| v.parse::<ChannelFilter>())
            .transpose()?
            .unwrap_or_default(),
    };

    let feed = state.load_feed();
    let metrics = aggregate(&feed.reviews);
    let rows = filter_reviews(&feed.reviews, &filter)
        .into_iter()
        .map(|review| ReviewRow {
            approved: state.approvals().is_approved(&review),
            review,
        })
        .collect();

    html_response(dashboard_page(&DashboardVm {
        source: feed.source,
        metrics: &metrics,
        featured: featured(&metrics),
        filter: &filter,
        rows,
    }))
}

#[derive(Serialize)]
struct PropertiesBody {
    source: Provenance,
    properties: Vec<PropertyMetric>,
}

fn properties(state: &AppState) -> ResultResp {
    let feed = state.load_feed();
    json_response(&PropertiesBody {
        source: feed.source,
        properties: aggregate(&feed.reviews),
    })
}

/// Public-facing view of one listing: only approved reviews are shown.
fn property(state: &AppState, listing_id: &str) -> ResultResp {
    let listing_id: i64 = listing_id.parse().map_err(|_| ServerError::NotFound)?;

    let feed = state.load_feed();
    let metrics = aggregate(&feed.reviews);
    let metric = metrics.iter().find(|m| m.listing_id == Some(listing_id));
    let approvals = state.approvals();
    let reviews = feed
        .reviews
        .into_iter()
        .filter(|r| r.listing_id() == Some(listing_id) && approvals.is_approved(r))
        .collect();

    html_response(property_page(&PropertyVm {
        listing_id,
        metric,
        metrics: &metrics,
        reviews,
    }))
}

fn toggle_approval(state: &AppState, review_id: &str, is_htmx: bool) -> ResultResp {
    let id = ReviewId::new(review_id);
    let feed = state.load_feed();
    let review = feed
        .reviews
        .iter()
        .find(|r| r.id().as_ref() == Some(&id))
        .ok_or(ServerError::NotFound)?;

    let approved = state.approvals().toggle(&id, review.is_approved_for_display);
    info!(review_id = %id, approved, "display approval toggled");

    if is_htmx {
        html_response(approval_toggle(&id, approved))
    } else {
        see_other("/")
    }
}

fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    query
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}
