// src/application/error.rs
use crate::domain::errors::{DomainError, FieldErrors};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Why a caller could not be authenticated. Kept internal: every variant is
/// reported to clients the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("account inactive")]
    AccountInactive,
    #[error("token invalid")]
    TokenInvalid,
    #[error("token expired")]
    TokenExpired,
    #[error("missing token")]
    MissingToken,
}

impl AuthFailure {
    /// Credential failures come from login; everything else from a bearer token.
    pub fn is_credential_failure(&self) -> bool {
        matches!(self, AuthFailure::InvalidCredentials | AuthFailure::AccountInactive)
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid fields: {0}")]
    InvalidFields(FieldErrors),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(AuthFailure),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::InvalidFields(FieldErrors::single(field, msg))
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unauthorized(reason: AuthFailure) -> Self {
        Self::Unauthorized(reason)
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn auth_failure(&self) -> Option<AuthFailure> {
        match self {
            Self::Unauthorized(reason) => Some(*reason),
            _ => None,
        }
    }
}
