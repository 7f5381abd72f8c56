use std::sync::Arc;

use crate::domain::lead::LeadRepository;

pub struct LeadQueryService {
    pub(super) repo: Arc<dyn LeadRepository>,
    pub(super) default_per_page: u32,
}

impl LeadQueryService {
    pub fn new(repo: Arc<dyn LeadRepository>, default_per_page: u32) -> Self {
        Self {
            repo,
            default_per_page,
        }
    }
}
