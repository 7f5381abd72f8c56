use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::{time::Clock, token_revocation::TokenRevocationStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Process-local deny-list. Used when no Redis URL is configured; entries
/// vanish on restart.
pub struct InMemoryTokenRevocationStore {
    revoked: Mutex<HashMap<String, DateTime<Utc>>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryTokenRevocationStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            revoked: Mutex::new(HashMap::new()),
            clock,
        }
    }

    fn lock(&self) -> ApplicationResult<MutexGuard<'_, HashMap<String, DateTime<Utc>>>> {
        self.revoked
            .lock()
            .map_err(|_| ApplicationError::infrastructure("revocation store lock poisoned"))
    }
}

#[async_trait]
impl TokenRevocationStore for InMemoryTokenRevocationStore {
    async fn revoke(&self, token_id: &str, until: DateTime<Utc>) -> ApplicationResult<()> {
        let now = self.clock.now();
        let mut guard = self.lock()?;
        guard.retain(|_, expires| *expires > now);
        guard.insert(token_id.to_string(), until);
        Ok(())
    }

    async fn is_revoked(&self, token_id: &str) -> ApplicationResult<bool> {
        let now = self.clock.now();
        let guard = self.lock()?;
        Ok(guard.get(token_id).is_some_and(|until| *until > now))
    }
}
