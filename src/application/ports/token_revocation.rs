use crate::application::ApplicationResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Deny-list of token ids. Entries only need to outlive the token they block.
#[async_trait]
pub trait TokenRevocationStore: Send + Sync {
    async fn revoke(&self, token_id: &str, until: DateTime<Utc>) -> ApplicationResult<()>;

    async fn is_revoked(&self, token_id: &str) -> ApplicationResult<bool>;
}
