// src/domain/account/entity.rs
use crate::domain::account::value_objects::{AccountEmail, AccountId, PasswordHash, Role};
use chrono::{DateTime, Utc};

/// A staff identity. Provisioned outside this service; read-only here.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: AccountEmail,
    pub password_hash: PasswordHash,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Tokens are only ever issued to active accounts.
    pub fn can_sign_in(&self) -> bool {
        self.is_active
    }
}
