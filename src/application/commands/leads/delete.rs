use super::{LeadCommandService, update::lead_not_found};
use crate::{
    application::{
        commands::audit_trail::Audited,
        dto::{AuthenticatedAccount, ClientMeta},
        error::ApplicationResult,
    },
    domain::{activity::NewActivityLog, lead::LeadId},
};

pub struct DeleteLeadCommand {
    pub id: i64,
}

impl LeadCommandService {
    /// Soft delete. Returns `NotFound` when there is no live lead with this id,
    /// including when a concurrent delete got there first.
    pub async fn delete(
        &self,
        actor: &AuthenticatedAccount,
        meta: &ClientMeta,
        command: DeleteLeadCommand,
    ) -> ApplicationResult<Audited<bool>> {
        let id = LeadId::new(command.id).map_err(|_| lead_not_found())?;
        let current = self
            .lead_repo
            .find_by_id(id)
            .await?
            .ok_or_else(lead_not_found)?;
        let before = current.snapshot();

        let now = self.clock.now();
        if !self.lead_repo.soft_delete(id, now).await? {
            return Err(lead_not_found());
        }

        let description = self
            .audit
            .describe_actor(actor, &format!("deleted lead #{id}"), now);
        let entry = NewActivityLog::lead_deleted(actor.id, before, description, now)?;
        let audit = self.audit.record(entry, meta).await;

        Ok(Audited::new(true, audit))
    }
}
