use super::LeadQueryService;
use crate::{
    application::{
        dto::{AuthenticatedAccount, LeadDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::lead::LeadId,
};

impl LeadQueryService {
    pub async fn get_lead(
        &self,
        actor: &AuthenticatedAccount,
        id: i64,
    ) -> ApplicationResult<LeadDto> {
        let not_found = || ApplicationError::not_found("lead not found");
        let id = LeadId::new(id).map_err(|_| not_found())?;
        tracing::debug!(actor_id = %actor.id, lead_id = %id, "fetching lead");

        let lead = self.repo.find_by_id(id).await?.ok_or_else(not_found)?;
        Ok(lead.into())
    }
}
