// src/application/commands/audit_trail.rs
use crate::{
    application::dto::{AuthenticatedAccount, ClientMeta},
    domain::{
        account::Role,
        activity::{ActivityLogRepository, NewActivityLog},
    },
};
use chrono::{DateTime, FixedOffset, Utc};
use std::sync::Arc;

/// Outcome of the audit append that follows a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditStatus {
    Recorded(i64),
    /// The primary write stands; the audit row could not be stored.
    Degraded(String),
}

impl AuditStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, AuditStatus::Degraded(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuditStatus::Recorded(_) => "recorded",
            AuditStatus::Degraded(_) => "degraded",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Audited<T> {
    pub value: T,
    pub audit: AuditStatus,
}

impl<T> Audited<T> {
    pub fn new(value: T, audit: AuditStatus) -> Self {
        Self { value, audit }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Audited<U> {
        Audited {
            value: f(self.value),
            audit: self.audit,
        }
    }
}

/// Appends audit rows on behalf of the command services and renders their
/// human-readable descriptions.
pub struct AuditTrail {
    repo: Arc<dyn ActivityLogRepository>,
    display_offset: FixedOffset,
}

impl AuditTrail {
    pub fn new(repo: Arc<dyn ActivityLogRepository>, display_offset: FixedOffset) -> Self {
        Self {
            repo,
            display_offset,
        }
    }

    /// `Admin Budi updated lead #12 at 15 Feb 2026 10:30`
    pub fn describe(&self, role: Role, name: &str, what: &str, at: DateTime<Utc>) -> String {
        let local = at.with_timezone(&self.display_offset);
        format!(
            "{} {} {} at {}",
            role_label(role),
            name,
            what,
            local.format("%d %b %Y %H:%M")
        )
    }

    pub fn describe_actor(&self, actor: &AuthenticatedAccount, what: &str, at: DateTime<Utc>) -> String {
        self.describe(actor.role, &actor.name, what, at)
    }

    /// Never fails: a store error is logged and reported as `Degraded`.
    pub async fn record(&self, entry: NewActivityLog, meta: &ClientMeta) -> AuditStatus {
        let entry = entry.with_source(meta.ip_address.clone(), meta.user_agent.clone());
        let action = entry.action();
        let actor_id = entry.actor_account_id();
        let lead_id = entry.related_lead_id();

        match self.repo.append(entry).await {
            Ok(log) => AuditStatus::Recorded(log.id),
            Err(err) => {
                tracing::warn!(
                    action = %action,
                    actor_id = %actor_id,
                    lead_id = ?lead_id.map(i64::from),
                    error = %err,
                    "failed to append activity log"
                );
                AuditStatus::Degraded(err.to_string())
            }
        }
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "Admin",
        Role::Staff => "Staff",
    }
}
