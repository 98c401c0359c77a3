mod approval;
mod filter;
mod metrics;
mod normalize;

pub use approval::{ApprovalStore, MemoryApprovalStore};
pub use filter::{filter_reviews, ChannelFilter, FilterError, PropertyFilter, ReviewFilter};
pub use metrics::{aggregate, featured, PropertyMetric, Trend};
pub use normalize::{normalize_reviews, NormalizedReview};

use crate::hostaway::{Provenance, SourcedReviews};
use serde::Serialize;

/// Body of `GET /api/reviews/hostaway`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewFeed {
    pub source: Provenance,
    pub reviews: Vec<NormalizedReview>,
}

impl From<SourcedReviews> for ReviewFeed {
    fn from(sourced: SourcedReviews) -> Self {
        Self {
            source: sourced.source,
            reviews: normalize_reviews(&sourced.reviews),
        }
    }
}
