use crate::domain::account::{
    entity::Account,
    value_objects::{AccountEmail, AccountId},
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_by_email(&self, email: &AccountEmail) -> DomainResult<Option<Account>>;

    async fn find_by_id(&self, id: AccountId) -> DomainResult<Option<Account>>;
}
