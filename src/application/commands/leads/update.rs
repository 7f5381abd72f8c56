use super::LeadCommandService;
use crate::{
    application::{
        commands::audit_trail::Audited,
        dto::{AuthenticatedAccount, ClientMeta, LeadDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        activity::NewActivityLog,
        lead::{LeadId, LeadInput, LeadPatch},
    },
};

pub struct UpdateLeadCommand {
    pub id: i64,
    pub input: LeadInput,
}

impl LeadCommandService {
    /// Apply the supplied fields. The audit `before` picture is the row as
    /// this caller read it, taken strictly before the write.
    pub async fn update(
        &self,
        actor: &AuthenticatedAccount,
        meta: &ClientMeta,
        command: UpdateLeadCommand,
    ) -> ApplicationResult<Audited<LeadDto>> {
        let id = LeadId::new(command.id).map_err(|_| lead_not_found())?;
        let patch = LeadPatch::parse(command.input)?;
        if patch.is_empty() {
            return Err(ApplicationError::validation("no fields to update"));
        }

        let current = self
            .lead_repo
            .find_by_id(id)
            .await?
            .ok_or_else(lead_not_found)?;
        let before = current.snapshot();

        if let Some(email) = &patch.email {
            self.ensure_email_available(email, Some(id)).await?;
        }

        let now = self.clock.now();
        let updated = self
            .lead_repo
            .update(id, patch, now)
            .await?
            .ok_or_else(lead_not_found)?;

        let description = self
            .audit
            .describe_actor(actor, &format!("updated lead #{id}"), now);
        let entry =
            NewActivityLog::lead_updated(actor.id, before, updated.snapshot(), description, now)?;
        let audit = self.audit.record(entry, meta).await;

        Ok(Audited::new(updated.into(), audit))
    }
}

pub(super) fn lead_not_found() -> ApplicationError {
    ApplicationError::not_found("lead not found")
}
