// tests/support/mocks/activity.rs
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use wafa_leads::domain::activity::{
    ActivityAction, ActivityLog, ActivityLogEntry, ActivityLogFilter, ActivityLogRepository,
    ActorSummary, LeadSummary, NewActivityLog,
};
use wafa_leads::domain::errors::{DomainError, DomainResult};
use wafa_leads::domain::pagination::{Page, PageRequest};

use super::{accounts::InMemoryAccountRepo, leads::InMemoryLeadRepo};

/// Append-only log that joins actor and lead summaries from the sibling
/// in-memory repositories, like the SQL `LEFT JOIN`s do.
pub struct InMemoryActivityLogRepo {
    rows: Mutex<Vec<ActivityLog>>,
    accounts: Arc<InMemoryAccountRepo>,
    leads: Arc<InMemoryLeadRepo>,
}

impl InMemoryActivityLogRepo {
    pub fn new(accounts: Arc<InMemoryAccountRepo>, leads: Arc<InMemoryLeadRepo>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            accounts,
            leads,
        }
    }

    pub fn logs(&self) -> Vec<ActivityLog> {
        self.rows.lock().unwrap().clone()
    }

    pub fn logs_for(&self, action: ActivityAction) -> Vec<ActivityLog> {
        self.logs()
            .into_iter()
            .filter(|log| log.action == action)
            .collect()
    }

    fn entry(&self, log: ActivityLog) -> ActivityLogEntry {
        let actor = log
            .actor_account_id
            .and_then(|id| self.accounts.get(id))
            .map(|account| ActorSummary {
                id: account.id,
                name: account.name.clone(),
                email: account.email.to_string(),
            });
        let lead = log
            .related_lead_id
            .and_then(|id| self.leads.raw(i64::from(id)))
            .map(|lead| LeadSummary {
                id: lead.id,
                nama: lead.nama.as_str().to_string(),
                email: lead.email.as_str().to_string(),
                deleted: lead.is_deleted(),
            });
        ActivityLogEntry { log, actor, lead }
    }
}

#[async_trait]
impl ActivityLogRepository for InMemoryActivityLogRepo {
    async fn append(&self, entry: NewActivityLog) -> DomainResult<ActivityLog> {
        let mut rows = self.rows.lock().unwrap();
        let log = entry.into_log(rows.len() as i64 + 1);
        rows.push(log.clone());
        Ok(log)
    }

    async fn list(
        &self,
        filter: &ActivityLogFilter,
        page: PageRequest,
    ) -> DomainResult<Page<ActivityLogEntry>> {
        let mut entries: Vec<ActivityLogEntry> = self
            .logs()
            .into_iter()
            .filter(|log| filter.action.is_none_or(|action| log.action == action))
            .filter(|log| {
                filter
                    .actor_account_id
                    .is_none_or(|id| log.actor_account_id == Some(id))
            })
            .map(|log| self.entry(log))
            .filter(|entry| {
                filter.search.as_deref().is_none_or(|needle| {
                    let needle = needle.to_lowercase();
                    entry.log.description.to_lowercase().contains(&needle)
                        || entry
                            .actor
                            .as_ref()
                            .is_some_and(|actor| actor.name.to_lowercase().contains(&needle))
                })
            })
            .collect();

        entries.sort_by(|a, b| {
            b.log
                .created_at
                .cmp(&a.log.created_at)
                .then_with(|| b.log.id.cmp(&a.log.id))
        });

        let total = entries.len() as u64;
        let items = entries
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(Page::new(items, total, page))
    }
}

/// Audit store that rejects every append.
#[derive(Debug, Default)]
pub struct FailingActivityLogRepo;

#[async_trait]
impl ActivityLogRepository for FailingActivityLogRepo {
    async fn append(&self, _entry: NewActivityLog) -> DomainResult<ActivityLog> {
        Err(DomainError::Persistence("audit store offline".into()))
    }

    async fn list(
        &self,
        _filter: &ActivityLogFilter,
        page: PageRequest,
    ) -> DomainResult<Page<ActivityLogEntry>> {
        Ok(Page::new(Vec::new(), 0, page))
    }
}
