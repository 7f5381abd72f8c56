use super::AuthService;
use crate::{
    application::{
        commands::audit_trail::Audited,
        dto::{ClientMeta, LoginResultDto, TokenSubject},
        error::{ApplicationError, ApplicationResult, AuthFailure},
    },
    domain::{
        account::{Account, AccountEmail},
        activity::NewActivityLog,
    },
};

pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl AuthService {
    /// Check credentials and issue an access token. Unknown email, wrong
    /// password and inactive account all fail as `Unauthorized`.
    pub async fn authenticate(
        &self,
        command: LoginCommand,
        meta: &ClientMeta,
    ) -> ApplicationResult<Audited<LoginResultDto>> {
        let account = match self
            .find_and_verify_account(&command.email, &command.password)
            .await
        {
            Ok(account) => account,
            Err(err) => {
                if let Some(reason) = err.auth_failure() {
                    tracing::info!(reason = %reason, "login rejected");
                }
                return Err(err);
            }
        };

        let now = self.clock.now();
        let token = self
            .token_manager
            .issue(TokenSubject {
                account_id: account.id,
                name: account.name.clone(),
                role: account.role,
                issued_at: now,
            })
            .await?;

        let description = self.audit.describe(account.role, &account.name, "logged in", now);
        let audit = self
            .audit
            .record(NewActivityLog::login(account.id, description, now), meta)
            .await;

        Ok(Audited::new(LoginResultDto::new(token, &account), audit))
    }

    async fn find_and_verify_account(
        &self,
        email: &str,
        password: &str,
    ) -> ApplicationResult<Account> {
        let invalid = || ApplicationError::unauthorized(AuthFailure::InvalidCredentials);

        let account = match AccountEmail::new(email) {
            Ok(email) => self.account_repo.find_by_email(&email).await?,
            Err(_) => None,
        };
        let Some(account) = account else {
            self.password_hasher.verify_decoy(password).await;
            return Err(invalid());
        };

        self.password_hasher
            .verify(password, account.password_hash.as_str())
            .await?;

        if !account.can_sign_in() {
            return Err(ApplicationError::unauthorized(AuthFailure::AccountInactive));
        }

        Ok(account)
    }
}
