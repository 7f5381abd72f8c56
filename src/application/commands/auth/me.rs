use super::AuthService;
use crate::application::{
    dto::{AccountProfileDto, AuthenticatedAccount},
    error::{ApplicationError, ApplicationResult},
};

impl AuthService {
    pub async fn me(&self, actor: &AuthenticatedAccount) -> ApplicationResult<AccountProfileDto> {
        let account = self
            .account_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("account not found"))?;
        Ok(account.into())
    }
}
