use crate::domain::errors::DomainResult;
use crate::domain::lead::{
    entity::{Lead, LeadPatch, NewLead},
    filter::LeadListFilter,
    value_objects::{LeadEmail, LeadId},
};
use crate::domain::pagination::{Page, PageRequest};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Soft-deleted leads are invisible to every read here.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    async fn find_by_id(&self, id: LeadId) -> DomainResult<Option<Lead>>;

    async fn list(&self, filter: &LeadListFilter, page: PageRequest) -> DomainResult<Page<Lead>>;

    async fn insert(&self, lead: NewLead) -> DomainResult<Lead>;

    /// Returns `None` when the lead does not exist or is already deleted.
    async fn update(
        &self,
        id: LeadId,
        patch: LeadPatch,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Option<Lead>>;

    /// Returns `false` when there was no live lead to delete.
    async fn soft_delete(&self, id: LeadId, deleted_at: DateTime<Utc>) -> DomainResult<bool>;

    async fn email_exists(&self, email: &LeadEmail, exclude: Option<LeadId>)
    -> DomainResult<bool>;
}
