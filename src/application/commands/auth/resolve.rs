use super::AuthService;
use crate::application::{
    dto::{AuthenticatedAccount, VerifiedToken},
    error::{ApplicationError, ApplicationResult, AuthFailure},
};
use crate::domain::account::Account;
use chrono::{DateTime, Utc};

impl AuthService {
    /// Resolve a bearer token to the account behind it.
    pub async fn resolve(&self, token: &str) -> ApplicationResult<AuthenticatedAccount> {
        let verified = self.token_manager.verify(token).await?;
        if self.clock.now() > verified.expires_at {
            return Err(ApplicationError::unauthorized(AuthFailure::TokenExpired));
        }

        let account = self.load_token_account(&verified).await?;
        Ok(AuthenticatedAccount::from_parts(&account, &verified))
    }

    /// Revocation and account checks shared by `resolve` and `refresh`.
    pub(super) async fn load_token_account(
        &self,
        verified: &VerifiedToken,
    ) -> ApplicationResult<Account> {
        if self.revocation_store.is_revoked(&verified.token_id).await? {
            return Err(ApplicationError::unauthorized(AuthFailure::TokenInvalid));
        }

        let account = self
            .account_repo
            .find_by_id(verified.account_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(AuthFailure::TokenInvalid))?;

        // A deactivated account's outstanding tokens stop working immediately.
        if !account.can_sign_in() {
            return Err(ApplicationError::unauthorized(AuthFailure::TokenInvalid));
        }

        Ok(account)
    }

    /// Best effort: a failing revocation store is logged, never surfaced.
    pub(super) async fn revoke_quietly(&self, token_id: &str, until: DateTime<Utc>) {
        if let Err(err) = self.revocation_store.revoke(token_id, until).await {
            tracing::warn!(token_id = %token_id, error = %err, "failed to revoke token");
        }
    }
}
