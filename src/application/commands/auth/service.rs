use std::sync::Arc;

use chrono::Duration;

use crate::application::{
    commands::audit_trail::AuditTrail,
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        token_revocation::TokenRevocationStore,
    },
};
use crate::domain::account::AccountRepository;

pub struct AuthService {
    pub(super) account_repo: Arc<dyn AccountRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) revocation_store: Arc<dyn TokenRevocationStore>,
    pub(super) audit: Arc<AuditTrail>,
    pub(super) clock: Arc<dyn Clock>,
    /// How long after expiry a token may still be exchanged for a new one.
    pub(super) refresh_grace: Duration,
}

impl AuthService {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        revocation_store: Arc<dyn TokenRevocationStore>,
        audit: Arc<AuditTrail>,
        clock: Arc<dyn Clock>,
        refresh_grace: Duration,
    ) -> Self {
        Self {
            account_repo,
            password_hasher,
            token_manager,
            revocation_store,
            audit,
            clock,
            refresh_grace,
        }
    }
}
