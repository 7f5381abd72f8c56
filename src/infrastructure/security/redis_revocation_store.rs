// src/infrastructure/security/redis_revocation_store.rs
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::{time::Clock, token_revocation::TokenRevocationStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{Config as DeadpoolConfig, Connection, Pool, Runtime};
use redis::AsyncCommands;
use std::sync::Arc;

const KEY_PREFIX: &str = "revoked:token:";

/// Deny-list shared across instances. Keys expire on their own once the
/// token they block could no longer be used.
#[derive(Clone)]
pub struct RedisTokenRevocationStore {
    pool: Pool,
    clock: Arc<dyn Clock>,
}

impl RedisTokenRevocationStore {
    /// Create a store from a redis URL (e.g. redis://:password@host:6379/0)
    pub fn from_url(url: &str, clock: Arc<dyn Clock>) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool, clock })
    }

    async fn connection(&self) -> ApplicationResult<Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

fn key_for(token_id: &str) -> String {
    format!("{KEY_PREFIX}{token_id}")
}

#[async_trait]
impl TokenRevocationStore for RedisTokenRevocationStore {
    async fn revoke(&self, token_id: &str, until: DateTime<Utc>) -> ApplicationResult<()> {
        let ttl_secs = (until - self.clock.now()).num_seconds();
        if ttl_secs <= 0 {
            return Ok(());
        }

        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(key_for(token_id), 1, ttl_secs as u64)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }

    async fn is_revoked(&self, token_id: &str) -> ApplicationResult<bool> {
        let mut conn = self.connection().await?;
        let exists: bool = conn
            .exists(key_for(token_id))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(exists)
    }
}
