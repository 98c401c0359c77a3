use crate::hostaway::models::RawReview;
use crate::hostaway::SourceError;
use serde::Serialize;
use tracing::{info, warn};

const BUNDLED_REVIEWS: &str = include_str!("mock_reviews.json");

/// Anything that can hand back a batch of raw reviews.
pub trait ReviewSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<RawReview>, SourceError>;
}

/// Where a batch of reviews came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Hostaway,
    Mock,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourcedReviews {
    pub source: Provenance,
    pub reviews: Vec<RawReview>,
}

/// The bundled sample reviews served whenever the provider has nothing for us.
/// Parsed once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct FallbackDataset {
    reviews: Vec<RawReview>,
}

impl FallbackDataset {
    pub fn bundled() -> Result<Self, SourceError> {
        let reviews: Vec<RawReview> = serde_json::from_str(BUNDLED_REVIEWS)
            .map_err(|e| SourceError::JsonParse(format!("bundled reviews: {e}")))?;
        Ok(Self { reviews })
    }

    pub fn reviews(&self) -> &[RawReview] {
        &self.reviews
    }

    fn sourced(&self) -> SourcedReviews {
        SourcedReviews {
            source: Provenance::Mock,
            reviews: self.reviews.clone(),
        }
    }
}

/// Fetch from `source`, falling back to the bundled dataset on any failure or
/// an empty result. Never fails; the reason for a fallback is only logged.
pub fn fetch_reviews(source: &dyn ReviewSource, fallback: &FallbackDataset) -> SourcedReviews {
    match source.fetch() {
        Ok(reviews) if !reviews.is_empty() => {
            info!(count = reviews.len(), "using upstream reviews");
            SourcedReviews {
                source: Provenance::Hostaway,
                reviews,
            }
        }
        Ok(_) => {
            info!("upstream returned no reviews, serving bundled dataset");
            fallback.sourced()
        }
        Err(err) => {
            warn!(kind = err.kind(), error = %err, "review fetch failed, serving bundled dataset");
            fallback.sourced()
        }
    }
}
