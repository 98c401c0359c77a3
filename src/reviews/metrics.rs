// src/reviews/metrics.rs

use crate::reviews::NormalizedReview;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// How many property cards the dashboard shows.
pub const FEATURED_PROPERTIES: usize = 3;

/// Rating direction for a property. Always `Stable` for now; comparing
/// against historical snapshots is a separate feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

/// Mean of the rated reviews of a listing, or "N/A" when none are rated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AverageRating {
    Score(f64),
    NotAvailable,
}

impl fmt::Display for AverageRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageRating::Score(score) => f.write_str(&one_decimal(*score)),
            AverageRating::NotAvailable => f.write_str("N/A"),
        }
    }
}

/// One decimal place, rounded from the exact binary value of `value`.
///
/// Only exact ties round up: `8.25` gives `8.3`, but `29.0 / 20.0` is stored
/// as `1.4499999…` and gives `1.4`.
fn one_decimal(value: f64) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return value.to_string();
    }
    let sign = if value.is_sign_negative() && value != 0.0 { "-" } else { "" };

    // 40 places is far below the spacing of doubles near any `x.x5` boundary,
    // so the second decimal of this expansion is the exact one.
    let expansion = format!("{:.40}", value.abs());
    let (whole, fraction) = expansion
        .split_once('.')
        .unwrap_or((expansion.as_str(), ""));
    let mut digits = fraction.bytes().map(|b| u64::from(b - b'0'));
    let first = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|d| d >= 5);

    let tenths = whole.parse::<u64>().unwrap_or(0) * 10 + first + u64::from(round_up);
    format!("{sign}{}.{}", tenths / 10, tenths % 10)
}

impl Serialize for AverageRating {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyMetric {
    pub listing_id: Option<i64>,
    pub name: Option<String>,
    pub average_rating: AverageRating,
    pub total_reviews: usize,
    pub trend: Trend,
}

struct ListingTally {
    name: Option<String>,
    ratings: Vec<f64>,
    count: usize,
}

/// Roll reviews up per listing, in order of each listing's first appearance.
///
/// Every review counts towards `total_reviews`; only reviews with a nonzero
/// overall rating feed the average. The name comes from the first review seen.
pub fn aggregate(reviews: &[NormalizedReview]) -> Vec<PropertyMetric> {
    let mut groups: IndexMap<Option<i64>, ListingTally> = IndexMap::new();

    for review in reviews {
        let tally = groups
            .entry(review.listing_id())
            .or_insert_with(|| ListingTally {
                name: review.listing_name().map(str::to_string),
                ratings: Vec::new(),
                count: 0,
            });
        if let Some(rating) = review.displayed_rating() {
            tally.ratings.push(rating);
        }
        tally.count += 1;
    }

    groups
        .into_iter()
        .map(|(listing_id, tally)| PropertyMetric {
            listing_id,
            name: tally.name,
            average_rating: average(&tally.ratings),
            total_reviews: tally.count,
            trend: Trend::default(),
        })
        .collect()
}

/// The metrics shown as cards: the first few listings seen.
pub fn featured(metrics: &[PropertyMetric]) -> &[PropertyMetric] {
    &metrics[..metrics.len().min(FEATURED_PROPERTIES)]
}

fn average(ratings: &[f64]) -> AverageRating {
    if ratings.is_empty() {
        AverageRating::NotAvailable
    } else {
        AverageRating::Score(ratings.iter().sum::<f64>() / ratings.len() as f64)
    }
}
