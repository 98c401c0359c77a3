use crate::hostaway::{fetch_reviews, FallbackDataset, ReviewSource};
use crate::reviews::{ApprovalStore, ReviewFeed};

/// Everything a request handler needs. Shared by all server workers.
pub struct AppState {
    source: Box<dyn ReviewSource>,
    fallback: FallbackDataset,
    approvals: Box<dyn ApprovalStore>,
}

impl AppState {
    pub fn new(
        source: Box<dyn ReviewSource>,
        fallback: FallbackDataset,
        approvals: Box<dyn ApprovalStore>,
    ) -> Self {
        Self {
            source,
            fallback,
            approvals,
        }
    }

    /// Fetch (or fall back) and normalize. One upstream call per invocation.
    pub fn load_feed(&self) -> ReviewFeed {
        fetch_reviews(self.source.as_ref(), &self.fallback).into()
    }

    pub fn approvals(&self) -> &dyn ApprovalStore {
        self.approvals.as_ref()
    }
}
