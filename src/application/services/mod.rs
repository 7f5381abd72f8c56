// src/application/services/mod.rs
use std::sync::Arc;

use chrono::{Duration, FixedOffset, Offset, Utc};

use crate::{
    application::{
        commands::{audit_trail::AuditTrail, auth::AuthService, leads::LeadCommandService},
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            token_revocation::TokenRevocationStore,
        },
        queries::{activity::ActivityLogQueryService, leads::LeadQueryService},
    },
    domain::{
        account::AccountRepository, activity::ActivityLogRepository, lead::LeadRepository,
    },
};

/// Tunables that are not ports.
#[derive(Debug, Clone, Copy)]
pub struct ServiceSettings {
    pub refresh_grace: Duration,
    pub display_offset: FixedOffset,
    pub leads_per_page: u32,
    pub activity_logs_per_page: u32,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            refresh_grace: Duration::days(14),
            display_offset: FixedOffset::east_opt(7 * 3600).unwrap_or_else(|| Utc.fix()),
            leads_per_page: 10,
            activity_logs_per_page: 20,
        }
    }
}

pub struct ApplicationServices {
    pub auth: Arc<AuthService>,
    pub lead_commands: Arc<LeadCommandService>,
    pub lead_queries: Arc<LeadQueryService>,
    pub activity_queries: Arc<ActivityLogQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        lead_repo: Arc<dyn LeadRepository>,
        activity_repo: Arc<dyn ActivityLogRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        revocation_store: Arc<dyn TokenRevocationStore>,
        clock: Arc<dyn Clock>,
        settings: ServiceSettings,
    ) -> Self {
        let audit = Arc::new(AuditTrail::new(
            Arc::clone(&activity_repo),
            settings.display_offset,
        ));

        let auth = Arc::new(AuthService::new(
            Arc::clone(&account_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&revocation_store),
            Arc::clone(&audit),
            Arc::clone(&clock),
            settings.refresh_grace,
        ));

        let lead_commands = Arc::new(LeadCommandService::new(
            Arc::clone(&lead_repo),
            Arc::clone(&audit),
            Arc::clone(&clock),
        ));

        let lead_queries = Arc::new(LeadQueryService::new(
            Arc::clone(&lead_repo),
            settings.leads_per_page,
        ));
        let activity_queries = Arc::new(ActivityLogQueryService::new(
            Arc::clone(&activity_repo),
            settings.activity_logs_per_page,
        ));

        Self {
            auth,
            lead_commands,
            lead_queries,
            activity_queries,
        }
    }
}
