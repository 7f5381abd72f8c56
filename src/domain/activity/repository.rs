use crate::domain::activity::entity::{
    ActivityLog, ActivityLogEntry, ActivityLogFilter, NewActivityLog,
};
use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use async_trait::async_trait;

/// Append-only. Listing is always newest first.
#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    async fn append(&self, entry: NewActivityLog) -> DomainResult<ActivityLog>;

    async fn list(
        &self,
        filter: &ActivityLogFilter,
        page: PageRequest,
    ) -> DomainResult<Page<ActivityLogEntry>>;
}
