// src/domain/lead/snapshot.rs
use crate::domain::lead::entity::Lead;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Bump when a field is added to or removed from [`LeadSnapshot`].
pub const LEAD_SNAPSHOT_VERSION: u16 = 1;

/// Full field-level state of a lead at one point in time, as stored in
/// `activity_logs.before_snapshot` / `after_snapshot`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSnapshot {
    #[serde(default = "legacy_version")]
    pub schema_version: u16,
    pub id: i64,
    pub nama: String,
    pub nomor_whatsapp: String,
    pub email: String,
    pub nama_lembaga: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

fn legacy_version() -> u16 {
    LEAD_SNAPSHOT_VERSION
}

impl LeadSnapshot {
    pub fn of(lead: &Lead) -> Self {
        Self {
            schema_version: LEAD_SNAPSHOT_VERSION,
            id: lead.id.into(),
            nama: lead.nama.to_string(),
            nomor_whatsapp: lead.nomor_whatsapp.to_string(),
            email: lead.email.to_string(),
            nama_lembaga: lead.nama_lembaga.to_string(),
            created_at: lead.created_at,
            updated_at: lead.updated_at,
            deleted_at: lead.deleted_at,
        }
    }
}
