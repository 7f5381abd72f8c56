use crate::domain::activity::{ActivityAction, ActivityLogEntry, ActorSummary, LeadSummary};
use crate::domain::lead::LeadSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivityActorDto {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<ActorSummary> for ActivityActorDto {
    fn from(actor: ActorSummary) -> Self {
        Self {
            id: actor.id.into(),
            name: actor.name,
            email: actor.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivityLeadDto {
    pub id: i64,
    pub nama: String,
    pub email: String,
    pub deleted: bool,
}

impl From<LeadSummary> for ActivityLeadDto {
    fn from(lead: LeadSummary) -> Self {
        Self {
            id: lead.id.into(),
            nama: lead.nama,
            email: lead.email,
            deleted: lead.deleted,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivityLogDto {
    pub id: i64,
    pub user_id: Option<i64>,
    #[schema(value_type = String, example = "update_lead")]
    pub action: ActivityAction,
    pub description: String,
    pub lead_id: Option<i64>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub old_values: Option<LeadSnapshot>,
    #[schema(value_type = Option<Object>)]
    pub new_values: Option<LeadSnapshot>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    pub user: Option<ActivityActorDto>,
    pub lead: Option<ActivityLeadDto>,
}

impl From<ActivityLogEntry> for ActivityLogDto {
    fn from(entry: ActivityLogEntry) -> Self {
        let log = entry.log;
        Self {
            id: log.id,
            user_id: log.actor_account_id.map(Into::into),
            action: log.action,
            description: log.description,
            lead_id: log.related_lead_id.map(Into::into),
            ip_address: log.source_ip,
            user_agent: log.source_agent,
            old_values: log.before_snapshot,
            new_values: log.after_snapshot,
            created_at: log.created_at,
            user: entry.actor.map(Into::into),
            lead: entry.lead.map(Into::into),
        }
    }
}
