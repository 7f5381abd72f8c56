use super::LeadCommandService;
use crate::{
    application::{dto::LeadDto, error::ApplicationResult},
    domain::lead::{LeadFields, LeadInput, NewLead},
};

pub struct SubmitLeadCommand {
    pub input: LeadInput,
}

impl LeadCommandService {
    /// Public, unauthenticated submission. No actor, so nothing is audited.
    pub async fn submit_public(&self, command: SubmitLeadCommand) -> ApplicationResult<LeadDto> {
        let fields = LeadFields::parse(command.input)?;
        self.ensure_email_available(&fields.email, None).await?;

        let lead = self
            .lead_repo
            .insert(NewLead {
                fields,
                created_at: self.clock.now(),
            })
            .await?;
        tracing::info!(lead_id = %lead.id, "lead submitted");
        Ok(lead.into())
    }
}
