// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, TokenSubject, VerifiedToken},
};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Fails with `Unauthorized(InvalidCredentials)` on mismatch.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
    /// Spend the cost of one `verify` when there is no stored hash to check,
    /// so a miss takes as long as a wrong password.
    async fn verify_decoy(&self, password: &str);
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;
    /// Check the signature and read the claims back. Does not look at expiry;
    /// callers compare `expires_at` against their own clock.
    async fn verify(&self, token: &str) -> ApplicationResult<VerifiedToken>;
}
