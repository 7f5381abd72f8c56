use crate::domain::account::{Account, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountSummaryDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[schema(value_type = String, example = "admin")]
    pub role: Role,
}

impl From<&Account> for AccountSummaryDto {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.into(),
            name: account.name.clone(),
            email: account.email.to_string(),
            role: account.role,
        }
    }
}

/// Response of `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountProfileDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[schema(value_type = String, example = "admin")]
    pub role: Role,
    pub is_active: bool,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountProfileDto {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.into(),
            name: account.name,
            email: account.email.into(),
            role: account.role,
            is_active: account.is_active,
            created_at: account.created_at,
        }
    }
}
