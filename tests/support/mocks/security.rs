// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use wafa_leads::application::{
    ApplicationResult,
    dto::{AuthTokenDto, TOKEN_TYPE_BEARER, TokenSubject, VerifiedToken},
    error::{ApplicationError, AuthFailure},
    ports::{
        security::{PasswordHasher, TokenManager},
        token_revocation::TokenRevocationStore,
    },
};

pub const TOKEN_TTL_SECS: i64 = 3600;

/// Accepts exactly `hash::<password>` and counts decoy checks.
#[derive(Debug, Default)]
pub struct StrictPasswordHasher {
    decoy_checks: AtomicUsize,
}

impl StrictPasswordHasher {
    pub fn hash_of(password: &str) -> String {
        format!("hash::{password}")
    }

    pub fn decoy_checks(&self) -> usize {
        self.decoy_checks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if Self::hash_of(password) == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized(
                AuthFailure::InvalidCredentials,
            ))
        }
    }

    async fn verify_decoy(&self, _password: &str) {
        self.decoy_checks.fetch_add(1, Ordering::SeqCst);
    }
}

/// Hands out opaque `token-<n>` strings and remembers what each one claims.
/// Like the real manager it never checks expiry itself.
#[derive(Debug, Default)]
pub struct FakeTokenManager {
    issued: Mutex<HashMap<String, VerifiedToken>>,
}

impl FakeTokenManager {
    pub fn issued_count(&self) -> usize {
        self.issued.lock().unwrap().len()
    }

    pub fn claims_of(&self, token: &str) -> Option<VerifiedToken> {
        self.issued.lock().unwrap().get(token).cloned()
    }
}

#[async_trait]
impl TokenManager for FakeTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let mut issued = self.issued.lock().unwrap();
        let n = issued.len() + 1;
        let access_token = format!("token-{n}");
        let token_id = format!("tid-{n}");
        let expires_at: DateTime<Utc> = subject.issued_at + Duration::seconds(TOKEN_TTL_SECS);

        issued.insert(
            access_token.clone(),
            VerifiedToken {
                account_id: subject.account_id,
                name: subject.name,
                role: subject.role,
                token_id: token_id.clone(),
                issued_at: subject.issued_at,
                expires_at,
            },
        );

        Ok(AuthTokenDto {
            access_token,
            token_type: TOKEN_TYPE_BEARER.into(),
            expires_in: TOKEN_TTL_SECS,
            token_id,
            issued_at: subject.issued_at,
            expires_at,
        })
    }

    async fn verify(&self, token: &str) -> ApplicationResult<VerifiedToken> {
        self.claims_of(token)
            .ok_or_else(|| ApplicationError::unauthorized(AuthFailure::TokenInvalid))
    }
}

/// Revocation backend that is always down.
#[derive(Debug, Default)]
pub struct FailingRevocationStore;

#[async_trait]
impl TokenRevocationStore for FailingRevocationStore {
    async fn revoke(&self, _token_id: &str, _until: DateTime<Utc>) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("revocation backend offline"))
    }

    async fn is_revoked(&self, _token_id: &str) -> ApplicationResult<bool> {
        Ok(false)
    }
}
