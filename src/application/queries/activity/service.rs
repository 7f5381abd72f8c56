use std::sync::Arc;

use crate::domain::activity::ActivityLogRepository;

/// Read-only view over the audit trail.
pub struct ActivityLogQueryService {
    pub(super) repo: Arc<dyn ActivityLogRepository>,
    pub(super) default_per_page: u32,
}

impl ActivityLogQueryService {
    pub fn new(repo: Arc<dyn ActivityLogRepository>, default_per_page: u32) -> Self {
        Self {
            repo,
            default_per_page,
        }
    }
}
