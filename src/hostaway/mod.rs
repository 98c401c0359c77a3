mod client;
mod fallback;
pub mod models;
mod source_error;

pub use client::{HostawayClient, DEFAULT_REVIEWS_URL};
pub use fallback::{fetch_reviews, FallbackDataset, Provenance, ReviewSource, SourcedReviews};
pub use models::{RawReview, ReviewCategory, ReviewId};
pub use source_error::SourceError;
