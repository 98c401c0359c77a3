// src/reviews/approval.rs

use crate::hostaway::ReviewId;
use crate::reviews::NormalizedReview;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Where per-review "show on the public site" decisions live.
///
/// A review nobody has toggled yet is not approved unless the provider
/// already marked it so.
pub trait ApprovalStore: Send + Sync {
    fn get(&self, id: &ReviewId) -> Option<bool>;

    fn set(&self, id: ReviewId, approved: bool);

    /// Flip the stored decision and return the new value. `current` is used
    /// when nothing has been stored for `id` yet.
    fn toggle(&self, id: &ReviewId, current: bool) -> bool {
        let next = !self.get(id).unwrap_or(current);
        self.set(id.clone(), next);
        next
    }

    fn is_approved(&self, review: &NormalizedReview) -> bool {
        review
            .id()
            .and_then(|id| self.get(&id))
            .unwrap_or(review.is_approved_for_display)
    }
}

/// Process-lifetime approvals. Lost on restart.
#[derive(Debug, Default)]
pub struct MemoryApprovalStore {
    approvals: RwLock<HashMap<ReviewId, bool>>,
}

impl MemoryApprovalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ApprovalStore for MemoryApprovalStore {
    fn get(&self, id: &ReviewId) -> Option<bool> {
        self.approvals.read().get(id).copied()
    }

    fn set(&self, id: ReviewId, approved: bool) {
        self.approvals.write().insert(id, approved);
    }

    fn toggle(&self, id: &ReviewId, current: bool) -> bool {
        let mut approvals = self.approvals.write();
        let next = !approvals.get(id).copied().unwrap_or(current);
        approvals.insert(id.clone(), next);
        next
    }
}
