// src/reviews/normalize.rs

use crate::hostaway::models::keys;
use crate::hostaway::{RawReview, ReviewCategory, ReviewId};
use serde::{Serialize, Serializer};

pub const DEFAULT_CHANNEL: &str = "airbnb";

/// A review in the canonical shape every downstream consumer reads.
///
/// `channel`, `overallRating` and `isApprovedForDisplay` are always present;
/// every other field of the raw record is carried in `rest` untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedReview {
    pub channel: String,
    #[serde(serialize_with = "serialize_rating")]
    pub overall_rating: Option<f64>,
    pub is_approved_for_display: bool,
    #[serde(flatten)]
    pub rest: RawReview,
}

impl NormalizedReview {
    pub fn id(&self) -> Option<ReviewId> {
        self.rest.id()
    }

    pub fn listing_id(&self) -> Option<i64> {
        self.rest.listing_id()
    }

    pub fn listing_name(&self) -> Option<&str> {
        self.rest.str_field(keys::LISTING_NAME)
    }

    pub fn guest_name(&self) -> Option<&str> {
        self.rest.str_field(keys::GUEST_NAME)
    }

    pub fn public_review(&self) -> Option<&str> {
        self.rest.str_field(keys::PUBLIC_REVIEW)
    }

    pub fn submitted_at(&self) -> Option<&str> {
        self.rest.str_field(keys::SUBMITTED_AT)
    }

    pub fn categories(&self) -> Vec<ReviewCategory> {
        self.rest.categories()
    }

    /// The overall rating, unless it is missing or zero.
    pub fn displayed_rating(&self) -> Option<f64> {
        self.overall_rating.filter(|r| is_truthy_rating(*r))
    }
}

pub fn normalize_reviews(raw: &[RawReview]) -> Vec<NormalizedReview> {
    raw.iter().map(normalize_review).collect()
}

pub fn normalize_review(raw: &RawReview) -> NormalizedReview {
    let channel = raw
        .channel()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CHANNEL)
        .to_string();
    let overall_rating = overall_rating(raw);
    let is_approved_for_display = raw.is_approved_for_display().unwrap_or(false);

    let mut rest = raw.clone().into_fields();
    rest.remove(keys::CHANNEL);
    rest.remove(keys::OVERALL_RATING);
    rest.remove(keys::IS_APPROVED_FOR_DISPLAY);

    NormalizedReview {
        channel,
        overall_rating,
        is_approved_for_display,
        rest: RawReview::from_fields(rest),
    }
}

/// Provider rating first, then the rounded category mean, else nothing.
///
/// A provider rating of exactly 0 counts as missing. Existing consumers rely
/// on this, so a genuine 0 falls through to the category mean.
pub fn overall_rating(raw: &RawReview) -> Option<f64> {
    if let Some(rating) = raw.rating().filter(|r| is_truthy_rating(*r)) {
        return Some(rating);
    }
    category_mean(&raw.categories()).map(round_half_up)
}

fn is_truthy_rating(rating: f64) -> bool {
    rating != 0.0 && !rating.is_nan()
}

// Any category without a numeric rating makes the mean undefined. That
// includes `"rating": null`, which is not counted as 0.
fn category_mean(categories: &[ReviewCategory]) -> Option<f64> {
    if categories.is_empty() {
        return None;
    }
    let mut sum = 0.0;
    for category in categories {
        sum += category.rating?;
    }
    Some(sum / categories.len() as f64)
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Whole ratings go out as integers (`9`, not `9.0`).
fn serialize_rating<S: Serializer>(rating: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match rating {
        Some(r) if r.fract() == 0.0 && r.abs() < i64::MAX as f64 => s.serialize_i64(*r as i64),
        Some(r) => s.serialize_f64(*r),
        None => s.serialize_none(),
    }
}
