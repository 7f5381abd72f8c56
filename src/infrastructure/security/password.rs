use crate::application::{
    error::{ApplicationError, ApplicationResult, AuthFailure},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;
use std::sync::Arc;

/// Argon2id with default parameters. Verification runs on the blocking pool.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    /// Hash of a throwaway secret, checked when no account matched.
    decoy_hash: Arc<str>,
}

impl Argon2PasswordHasher {
    pub fn new() -> ApplicationResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let decoy_hash = Argon2::default()
            .hash_password(salt.as_str().as_bytes(), &salt)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .to_string();
        Ok(Self {
            decoy_hash: decoy_hash.into(),
        })
    }

    async fn check(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        tokio::task::spawn_blocking(move || -> Result<(), ApplicationError> {
            let parsed = PasswordHash::new(&expected_hash)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .map_err(|_| ApplicationError::unauthorized(AuthFailure::InvalidCredentials))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        self.check(password, expected_hash).await
    }

    async fn verify_decoy(&self, password: &str) {
        if let Err(err) = self.check(password, &self.decoy_hash).await {
            if err.auth_failure().is_none() {
                tracing::warn!(error = %err, "decoy password check failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn verifies_matching_passwords_and_rejects_others() {
        let hasher = Argon2PasswordHasher::new().unwrap();
        let hash = hash_of("rahasia123");

        assert!(hasher.verify("rahasia123", &hash).await.is_ok());
        let err = hasher.verify("salah", &hash).await.unwrap_err();
        assert_eq!(err.auth_failure(), Some(AuthFailure::InvalidCredentials));
    }

    #[tokio::test]
    async fn decoy_hash_is_a_real_argon2_hash() {
        let hasher = Argon2PasswordHasher::new().unwrap();
        assert!(PasswordHash::new(&hasher.decoy_hash).is_ok());
        let err = hasher.verify("rahasia123", &hasher.decoy_hash).await.unwrap_err();
        assert_eq!(err.auth_failure(), Some(AuthFailure::InvalidCredentials));
        hasher.verify_decoy("rahasia123").await;
    }
}
