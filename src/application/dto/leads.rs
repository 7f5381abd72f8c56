use crate::domain::lead::Lead;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeadDto {
    pub id: i64,
    pub nama: String,
    pub nomor_whatsapp: String,
    pub email: String,
    pub nama_lembaga: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<Lead> for LeadDto {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id.into(),
            nama: lead.nama.into(),
            nomor_whatsapp: lead.nomor_whatsapp.into(),
            email: lead.email.into(),
            nama_lembaga: lead.nama_lembaga.into(),
            created_at: lead.created_at,
            updated_at: lead.updated_at,
        }
    }
}
