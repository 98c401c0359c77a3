// src/reviews/filter.rs

use crate::reviews::NormalizedReview;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const ALL: &str = "all";

#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("property must be \"all\" or a listing id, got {0:?}")]
    InvalidProperty(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyFilter {
    #[default]
    All,
    Listing(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChannelFilter {
    #[default]
    All,
    Channel(String),
}

/// Operator-selected predicates. Both must hold for a review to pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewFilter {
    pub property: PropertyFilter,
    pub channel: ChannelFilter,
}

impl ReviewFilter {
    pub fn matches(&self, review: &NormalizedReview) -> bool {
        let property_ok = match self.property {
            PropertyFilter::All => true,
            PropertyFilter::Listing(id) => review.listing_id() == Some(id),
        };
        let channel_ok = match &self.channel {
            ChannelFilter::All => true,
            ChannelFilter::Channel(channel) => review.channel == *channel,
        };
        property_ok && channel_ok
    }
}

/// Keep the reviews that pass `filter`, in their original order.
pub fn filter_reviews(reviews: &[NormalizedReview], filter: &ReviewFilter) -> Vec<NormalizedReview> {
    reviews
        .iter()
        .filter(|review| filter.matches(review))
        .cloned()
        .collect()
}

// An empty value comes from an unselected <select>; treat it like "all".
impl FromStr for PropertyFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == ALL {
            return Ok(PropertyFilter::All);
        }
        s.parse()
            .map(PropertyFilter::Listing)
            .map_err(|_| FilterError::InvalidProperty(s.to_string()))
    }
}

impl FromStr for ChannelFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == ALL {
            Ok(ChannelFilter::All)
        } else {
            Ok(ChannelFilter::Channel(s.to_string()))
        }
    }
}

impl fmt::Display for PropertyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyFilter::All => f.write_str(ALL),
            PropertyFilter::Listing(id) => write!(f, "{id}"),
        }
    }
}

impl fmt::Display for ChannelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelFilter::All => f.write_str(ALL),
            ChannelFilter::Channel(channel) => f.write_str(channel),
        }
    }
}
