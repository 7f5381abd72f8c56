// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, TokenSubject, VerifiedToken, auth::TOKEN_TYPE_BEARER},
    error::{ApplicationError, ApplicationResult, AuthFailure},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, Term},
};
use chrono::Duration as ChronoDuration;
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};
use uuid::Uuid;

/// Issues Ed25519-signed biscuit tokens. Expiry is carried as a fact and
/// enforced by the caller against its own clock, so an expired token can
/// still be read back for refresh.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

fn build_code_and_params(
    subject: &TokenSubject,
    token_id: &str,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (String, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("aid".to_string(), i64::from(subject.account_id).into());
    params.insert("aname".to_string(), subject.name.clone().into());
    params.insert("arole".to_string(), subject.role.as_str().into());
    params.insert("tid".to_string(), token_id.into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());

    let code = String::from(
        r#"
        account({aid}, {aname});
        role({arole});
        token_id({tid});
        issued_at({issued});
        expires_at({exp});
        "#,
    );

    (code, params)
}

fn build_and_serialize_biscuit(
    code: &str,
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> Result<String, ApplicationError> {
    let builder = Biscuit::builder()
        .code_with_params(code, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    let token = builder
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    ChronoDuration::from_std(ttl)
        .unwrap_or_else(|_| ChronoDuration::seconds(ttl.as_secs() as i64))
        .num_seconds()
        .max(0)
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::from(subject.issued_at);
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let token_id = Uuid::new_v4().to_string();
        let (code, params) = build_code_and_params(&subject, &token_id, issued_at, expires_at);

        let serialized = build_and_serialize_biscuit(&code, params, self.root.as_ref())?;

        Ok(AuthTokenDto {
            access_token: serialized,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: ttl_to_expires_in_seconds(self.ttl),
            token_id,
            issued_at: subject.issued_at,
            expires_at: expires_at.into(),
        })
    }

    async fn verify(&self, token: &str) -> ApplicationResult<VerifiedToken> {
        let invalid = |err: biscuit_auth::error::Token| {
            tracing::debug!(error = %err, "rejected bearer token");
            ApplicationError::unauthorized(AuthFailure::TokenInvalid)
        };

        let biscuit = Biscuit::from_base64(token, self.public).map_err(invalid)?;
        let view = biscuit.authorizer().map_err(invalid)?;
        let (facts, _, _, _) = view.dump();

        crate::infrastructure::security::claims::parse_claims(facts)
    }
}
