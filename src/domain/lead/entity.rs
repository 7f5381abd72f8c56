// src/domain/lead/entity.rs
use crate::domain::errors::{DomainError, DomainResult, FieldErrors};
use crate::domain::lead::snapshot::LeadSnapshot;
use crate::domain::lead::value_objects::{
    InstitutionName, LeadEmail, LeadId, LeadName, WhatsappNumber,
};
use chrono::{DateTime, Utc};

pub const FIELD_NAMA: &str = "nama";
pub const FIELD_NOMOR_WHATSAPP: &str = "nomor_whatsapp";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_NAMA_LEMBAGA: &str = "nama_lembaga";

#[derive(Debug, Clone)]
pub struct Lead {
    pub id: LeadId,
    pub nama: LeadName,
    pub nomor_whatsapp: WhatsappNumber,
    pub email: LeadEmail,
    pub nama_lembaga: InstitutionName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Lead {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn snapshot(&self) -> LeadSnapshot {
        LeadSnapshot::of(self)
    }
}

/// Unvalidated field values as they arrive from a caller.
#[derive(Debug, Clone, Default)]
pub struct LeadInput {
    pub nama: Option<String>,
    pub nomor_whatsapp: Option<String>,
    pub email: Option<String>,
    pub nama_lembaga: Option<String>,
}

/// A complete, validated set of lead fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadFields {
    pub nama: LeadName,
    pub nomor_whatsapp: WhatsappNumber,
    pub email: LeadEmail,
    pub nama_lembaga: InstitutionName,
}

impl LeadFields {
    /// Every field is required. All failures are reported together.
    pub fn parse(input: LeadInput) -> DomainResult<Self> {
        let mut errors = FieldErrors::new();

        let nama = errors.capture(FIELD_NAMA, LeadName::new(input.nama.unwrap_or_default()));
        let nomor_whatsapp = errors.capture(
            FIELD_NOMOR_WHATSAPP,
            WhatsappNumber::new(input.nomor_whatsapp.unwrap_or_default()),
        );
        let email = errors.capture(FIELD_EMAIL, LeadEmail::new(input.email.unwrap_or_default()));
        let nama_lembaga = errors.capture(
            FIELD_NAMA_LEMBAGA,
            InstitutionName::new(input.nama_lembaga.unwrap_or_default()),
        );

        errors.into_result()?;
        match (nama, nomor_whatsapp, email, nama_lembaga) {
            (Some(nama), Some(nomor_whatsapp), Some(email), Some(nama_lembaga)) => Ok(Self {
                nama,
                nomor_whatsapp,
                email,
                nama_lembaga,
            }),
            _ => Err(DomainError::Validation("incomplete lead fields".into())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewLead {
    pub fields: LeadFields,
    pub created_at: DateTime<Utc>,
}

/// Partial update: only supplied fields are validated and written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadPatch {
    pub nama: Option<LeadName>,
    pub nomor_whatsapp: Option<WhatsappNumber>,
    pub email: Option<LeadEmail>,
    pub nama_lembaga: Option<InstitutionName>,
}

impl LeadPatch {
    pub fn parse(input: LeadInput) -> DomainResult<Self> {
        let mut errors = FieldErrors::new();
        let mut patch = Self::default();

        if let Some(value) = input.nama {
            patch.nama = errors.capture(FIELD_NAMA, LeadName::new(value));
        }
        if let Some(value) = input.nomor_whatsapp {
            patch.nomor_whatsapp = errors.capture(FIELD_NOMOR_WHATSAPP, WhatsappNumber::new(value));
        }
        if let Some(value) = input.email {
            patch.email = errors.capture(FIELD_EMAIL, LeadEmail::new(value));
        }
        if let Some(value) = input.nama_lembaga {
            patch.nama_lembaga = errors.capture(FIELD_NAMA_LEMBAGA, InstitutionName::new(value));
        }

        errors.into_result()?;
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self.nama.is_none()
            && self.nomor_whatsapp.is_none()
            && self.email.is_none()
            && self.nama_lembaga.is_none()
    }
}
