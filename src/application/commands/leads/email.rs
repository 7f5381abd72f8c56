use super::LeadCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::lead::{LeadEmail, LeadId, entity::FIELD_EMAIL},
};

pub(super) const EMAIL_TAKEN: &str = "The email has already been taken.";

impl LeadCommandService {
    pub async fn email_exists(
        &self,
        email: &LeadEmail,
        exclude: Option<LeadId>,
    ) -> ApplicationResult<bool> {
        Ok(self.lead_repo.email_exists(email, exclude).await?)
    }

    pub(super) async fn ensure_email_available(
        &self,
        email: &LeadEmail,
        exclude: Option<LeadId>,
    ) -> ApplicationResult<()> {
        if self.email_exists(email, exclude).await? {
            Err(ApplicationError::invalid_field(FIELD_EMAIL, EMAIL_TAKEN))
        } else {
            Ok(())
        }
    }
}
