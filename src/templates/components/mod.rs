use crate::hostaway::ReviewId;
use crate::reviews::Trend;
use chrono::NaiveDateTime;
use maud::{html, Markup};

pub mod error;

pub use error::error_page;

/// Ratings at or above this get the highlighted badge.
const HIGHLIGHT_RATING: f64 = 8.0;

const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// `9/10`, or `N/A/10` when there is no usable rating.
pub fn rating_badge(rating: Option<f64>) -> Markup {
    let highlighted = rating.is_some_and(|r| r >= HIGHLIGHT_RATING);
    let label = rating.map(format_rating).unwrap_or_else(|| "N/A".to_string());
    let class = if highlighted {
        "badge rating badge-good"
    } else {
        "badge rating badge-muted"
    };

    html! {
        span class=(class) {
            (label) "/10"
        }
    }
}

pub fn channel_badge(channel: &str) -> Markup {
    html! {
        span class="badge badge-outline channel" { (channel) }
    }
}

pub fn trend_icon(trend: Trend) -> Markup {
    let (class, glyph) = match trend {
        Trend::Up => ("trend trend-up", "▲"),
        Trend::Down => ("trend trend-down", "▼"),
        Trend::Stable => ("trend trend-stable", "–"),
    };
    html! {
        span class=(class) title=(format!("{trend:?}")) { (glyph) }
    }
}

/// The display switch for one review. htmx swaps the whole form on toggle.
pub fn approval_toggle(id: &ReviewId, approved: bool) -> Markup {
    let action = format!("/reviews/{id}/approval");
    let (class, checked, label) = if approved {
        ("switch switch-on", "true", "Shown")
    } else {
        ("switch switch-off", "false", "Hidden")
    };

    html! {
        form
            method="post"
            action=(action)
            hx-post=(action)
            hx-swap="outerHTML"
            class="approval-toggle"
            data-review-id=(id.as_str())
        {
            button type="submit" role="switch" aria-checked=(checked) class=(class) {
                (label)
            }
        }
    }
}

pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{rating:.0}")
    } else {
        format!("{rating:.1}")
    }
}

/// `2024-01-15 14:30:00` becomes `15 Jan 2024`; anything else is shown as sent.
pub fn submitted_date(submitted_at: Option<&str>) -> String {
    match submitted_at {
        Some(raw) => NaiveDateTime::parse_from_str(raw, SUBMITTED_AT_FORMAT)
            .map(|dt| dt.format("%d %b %Y").to_string())
            .unwrap_or_else(|_| raw.to_string()),
        None => String::new(),
    }
}
