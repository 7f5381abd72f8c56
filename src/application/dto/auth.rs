use crate::domain::account::{Account, AccountId, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::accounts::AccountSummaryDto;

pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// A freshly issued access token. Serialises as the refresh response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    #[serde(skip)]
    pub token_id: String,
    #[serde(skip)]
    pub issued_at: DateTime<Utc>,
    #[serde(skip)]
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResultDto {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub account: AccountSummaryDto,
}

impl LoginResultDto {
    pub fn new(token: AuthTokenDto, account: &Account) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            account: AccountSummaryDto::from(account),
        }
    }
}

/// What goes into a token.
#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub account_id: AccountId,
    pub name: String,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
}

/// Claims read back from a token whose signature checked out. Expiry and
/// revocation have not been looked at yet.
#[derive(Debug, Clone)]
pub struct VerifiedToken {
    pub account_id: AccountId,
    pub name: String,
    pub role: Role,
    pub token_id: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// The caller behind a bearer token, resolved against the account store.
/// Passed explicitly into every service call that needs an actor.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token_id: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedAccount {
    pub fn from_parts(account: &Account, token: &VerifiedToken) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.to_string(),
            role: account.role,
            token_id: token.token_id.clone(),
            expires_at: token.expires_at,
        }
    }
}
