// src/domain/activity/entity.rs
use crate::domain::account::AccountId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::lead::{LeadId, LeadSnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    Login,
    Logout,
    CreateLead,
    UpdateLead,
    DeleteLead,
}

impl ActivityAction {
    pub const ALL: [ActivityAction; 5] = [
        ActivityAction::Login,
        ActivityAction::Logout,
        ActivityAction::CreateLead,
        ActivityAction::UpdateLead,
        ActivityAction::DeleteLead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::Login => "login",
            ActivityAction::Logout => "logout",
            ActivityAction::CreateLead => "create_lead",
            ActivityAction::UpdateLead => "update_lead",
            ActivityAction::DeleteLead => "delete_lead",
        }
    }

    pub fn targets_lead(&self) -> bool {
        matches!(
            self,
            ActivityAction::CreateLead | ActivityAction::UpdateLead | ActivityAction::DeleteLead
        )
    }
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s.trim())
            .ok_or_else(|| DomainError::Validation(format!("unknown activity action '{s}'")))
    }
}

/// A stored audit row.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    pub id: i64,
    pub actor_account_id: Option<AccountId>,
    pub action: ActivityAction,
    pub description: String,
    pub related_lead_id: Option<LeadId>,
    pub source_ip: Option<String>,
    pub source_agent: Option<String>,
    pub before_snapshot: Option<LeadSnapshot>,
    pub after_snapshot: Option<LeadSnapshot>,
    pub created_at: DateTime<Utc>,
}

/// An audit row waiting to be appended. Only constructible through the
/// per-action constructors so the snapshot shape always matches the action.
#[derive(Debug, Clone)]
pub struct NewActivityLog {
    actor_account_id: AccountId,
    action: ActivityAction,
    description: String,
    related_lead_id: Option<LeadId>,
    source_ip: Option<String>,
    source_agent: Option<String>,
    before_snapshot: Option<LeadSnapshot>,
    after_snapshot: Option<LeadSnapshot>,
    created_at: DateTime<Utc>,
}

impl NewActivityLog {
    pub fn login(actor: AccountId, description: String, at: DateTime<Utc>) -> Self {
        Self::session(ActivityAction::Login, actor, description, at)
    }

    pub fn logout(actor: AccountId, description: String, at: DateTime<Utc>) -> Self {
        Self::session(ActivityAction::Logout, actor, description, at)
    }

    fn session(
        action: ActivityAction,
        actor: AccountId,
        description: String,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            actor_account_id: actor,
            action,
            description,
            related_lead_id: None,
            source_ip: None,
            source_agent: None,
            before_snapshot: None,
            after_snapshot: None,
            created_at: at,
        }
    }

    pub fn lead_created(
        actor: AccountId,
        after: LeadSnapshot,
        description: String,
        at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Self::lead(ActivityAction::CreateLead, actor, None, Some(after), description, at)
    }

    pub fn lead_updated(
        actor: AccountId,
        before: LeadSnapshot,
        after: LeadSnapshot,
        description: String,
        at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if before.id != after.id {
            return Err(DomainError::Validation(
                "before and after snapshots describe different leads".into(),
            ));
        }
        Self::lead(
            ActivityAction::UpdateLead,
            actor,
            Some(before),
            Some(after),
            description,
            at,
        )
    }

    pub fn lead_deleted(
        actor: AccountId,
        before: LeadSnapshot,
        description: String,
        at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Self::lead(ActivityAction::DeleteLead, actor, Some(before), None, description, at)
    }

    fn lead(
        action: ActivityAction,
        actor: AccountId,
        before: Option<LeadSnapshot>,
        after: Option<LeadSnapshot>,
        description: String,
        at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let lead_id = after
            .as_ref()
            .or(before.as_ref())
            .map(|snapshot| LeadId::new(snapshot.id))
            .transpose()?
            .ok_or_else(|| DomainError::Validation("lead audit entry needs a snapshot".into()))?;

        Ok(Self {
            actor_account_id: actor,
            action,
            description,
            related_lead_id: Some(lead_id),
            source_ip: None,
            source_agent: None,
            before_snapshot: before,
            after_snapshot: after,
            created_at: at,
        })
    }

    pub fn with_source(mut self, ip: Option<String>, agent: Option<String>) -> Self {
        self.source_ip = ip;
        self.source_agent = agent;
        self
    }

    pub fn actor_account_id(&self) -> AccountId {
        self.actor_account_id
    }

    pub fn action(&self) -> ActivityAction {
        self.action
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn related_lead_id(&self) -> Option<LeadId> {
        self.related_lead_id
    }

    pub fn source_ip(&self) -> Option<&str> {
        self.source_ip.as_deref()
    }

    pub fn source_agent(&self) -> Option<&str> {
        self.source_agent.as_deref()
    }

    pub fn before_snapshot(&self) -> Option<&LeadSnapshot> {
        self.before_snapshot.as_ref()
    }

    pub fn after_snapshot(&self) -> Option<&LeadSnapshot> {
        self.after_snapshot.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Materialise as a stored row once the store has assigned an id.
    pub fn into_log(self, id: i64) -> ActivityLog {
        ActivityLog {
            id,
            actor_account_id: Some(self.actor_account_id),
            action: self.action,
            description: self.description,
            related_lead_id: self.related_lead_id,
            source_ip: self.source_ip,
            source_agent: self.source_agent,
            before_snapshot: self.before_snapshot,
            after_snapshot: self.after_snapshot,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActivityLogFilter {
    pub action: Option<ActivityAction>,
    pub actor_account_id: Option<AccountId>,
    /// Matches the description or the actor's name, case-insensitively.
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorSummary {
    pub id: AccountId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSummary {
    pub id: LeadId,
    pub nama: String,
    pub email: String,
    pub deleted: bool,
}

/// A log row joined with minimal summaries of its actor and lead.
#[derive(Debug, Clone)]
pub struct ActivityLogEntry {
    pub log: ActivityLog,
    pub actor: Option<ActorSummary>,
    pub lead: Option<LeadSummary>,
}
