use std::sync::Arc;

use crate::application::{commands::audit_trail::AuditTrail, ports::time::Clock};
use crate::domain::lead::LeadRepository;

/// The only writer of leads. Every authenticated mutation is followed by an
/// audit append whose failure downgrades, but never undoes, the write.
pub struct LeadCommandService {
    pub(super) lead_repo: Arc<dyn LeadRepository>,
    pub(super) audit: Arc<AuditTrail>,
    pub(super) clock: Arc<dyn Clock>,
}

impl LeadCommandService {
    pub fn new(
        lead_repo: Arc<dyn LeadRepository>,
        audit: Arc<AuditTrail>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            lead_repo,
            audit,
            clock,
        }
    }
}
