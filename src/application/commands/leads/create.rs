use super::LeadCommandService;
use crate::{
    application::{
        commands::audit_trail::Audited,
        dto::{AuthenticatedAccount, ClientMeta, LeadDto},
        error::ApplicationResult,
    },
    domain::{
        activity::NewActivityLog,
        lead::{LeadFields, LeadInput, NewLead},
    },
};

pub struct CreateLeadCommand {
    pub input: LeadInput,
}

impl LeadCommandService {
    pub async fn create_as_admin(
        &self,
        actor: &AuthenticatedAccount,
        meta: &ClientMeta,
        command: CreateLeadCommand,
    ) -> ApplicationResult<Audited<LeadDto>> {
        let fields = LeadFields::parse(command.input)?;
        self.ensure_email_available(&fields.email, None).await?;

        let now = self.clock.now();
        let lead = self
            .lead_repo
            .insert(NewLead {
                fields,
                created_at: now,
            })
            .await?;

        let description = self
            .audit
            .describe_actor(actor, &format!("created lead #{}", lead.id), now);
        let entry = NewActivityLog::lead_created(actor.id, lead.snapshot(), description, now)?;
        let audit = self.audit.record(entry, meta).await;

        Ok(Audited::new(lead.into(), audit))
    }
}
