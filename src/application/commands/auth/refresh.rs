use super::AuthService;
use crate::application::{
    dto::{AuthTokenDto, TokenSubject},
    error::{ApplicationError, ApplicationResult, AuthFailure},
};

pub struct RefreshTokenCommand {
    pub token: String,
}

impl AuthService {
    /// Exchange a token for a new one. The presented token may be expired as
    /// long as it is still inside the refresh grace window. It is revoked once
    /// the replacement has been issued.
    pub async fn refresh(&self, command: RefreshTokenCommand) -> ApplicationResult<AuthTokenDto> {
        let verified = self.token_manager.verify(&command.token).await?;
        let now = self.clock.now();
        let refresh_deadline = verified.expires_at + self.refresh_grace;
        if now > refresh_deadline {
            return Err(ApplicationError::unauthorized(AuthFailure::TokenExpired));
        }

        let account = self.load_token_account(&verified).await?;
        let token = self
            .token_manager
            .issue(TokenSubject {
                account_id: account.id,
                name: account.name.clone(),
                role: account.role,
                issued_at: now,
            })
            .await?;

        self.revoke_quietly(&verified.token_id, refresh_deadline).await;
        tracing::debug!(account_id = %account.id, "token refreshed");

        Ok(token)
    }
}
