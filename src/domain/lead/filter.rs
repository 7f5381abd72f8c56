// src/domain/lead/filter.rs
use crate::domain::pagination::SortDirection;

/// Columns a lead listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadSortColumn {
    Id,
    Nama,
    Email,
    NamaLembaga,
    #[default]
    CreatedAt,
}

impl LeadSortColumn {
    /// Anything outside the allow-list silently becomes `created_at`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("id") => Self::Id,
            Some("nama") => Self::Nama,
            Some("email") => Self::Email,
            Some("nama_lembaga") => Self::NamaLembaga,
            _ => Self::CreatedAt,
        }
    }

    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Nama => "nama",
            Self::Email => "email",
            Self::NamaLembaga => "nama_lembaga",
            Self::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LeadListFilter {
    /// Case-insensitive substring over name, email, institution and phone.
    pub search: Option<String>,
    pub order_by: LeadSortColumn,
    pub direction: SortDirection,
}
