// src/infrastructure/repositories/postgres_lead.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::lead::{
    InstitutionName, Lead, LeadEmail, LeadId, LeadListFilter, LeadName, LeadPatch, LeadRepository,
    LeadSortColumn, NewLead, WhatsappNumber,
};
use crate::domain::pagination::{Page, PageRequest, like_pattern};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const LEAD_COLUMNS: &str =
    "id, nama, nomor_whatsapp, email, nama_lembaga, created_at, updated_at, deleted_at";

#[derive(Clone)]
pub struct PostgresLeadRepository {
    pool: PgPool,
}

impl PostgresLeadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Appends the shared `WHERE` clause for list and count queries.
    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &LeadListFilter) {
        builder.push(" WHERE deleted_at IS NULL");

        if let Some(search) = filter.search.as_deref() {
            let pattern = like_pattern(search);
            builder.push(" AND (");
            let mut separated = builder.separated(" OR ");
            for column in ["nama", "email", "nama_lembaga", "nomor_whatsapp"] {
                separated.push(format!("{column} ILIKE "));
                separated.push_bind_unseparated(pattern.clone());
            }
            builder.push(")");
        }
    }

    fn push_order(builder: &mut QueryBuilder<'_, Postgres>, filter: &LeadListFilter) {
        let direction = filter.direction.as_sql();
        builder.push(format!(
            " ORDER BY {} {direction}",
            filter.order_by.as_column()
        ));
        if filter.order_by != LeadSortColumn::Id {
            builder.push(format!(", id {direction}"));
        }
    }

    fn build_update_query(
        id: LeadId,
        patch: LeadPatch,
        updated_at: DateTime<Utc>,
    ) -> QueryBuilder<'static, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE leads SET ");
        let mut set = builder.separated(", ");

        if let Some(nama) = patch.nama {
            set.push("nama = ");
            set.push_bind_unseparated(String::from(nama));
        }
        if let Some(nomor_whatsapp) = patch.nomor_whatsapp {
            set.push("nomor_whatsapp = ");
            set.push_bind_unseparated(String::from(nomor_whatsapp));
        }
        if let Some(email) = patch.email {
            set.push("email = ");
            set.push_bind_unseparated(String::from(email));
        }
        if let Some(nama_lembaga) = patch.nama_lembaga {
            set.push("nama_lembaga = ");
            set.push_bind_unseparated(String::from(nama_lembaga));
        }
        set.push("updated_at = ");
        set.push_bind_unseparated(updated_at);

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND deleted_at IS NULL RETURNING ");
        builder.push(LEAD_COLUMNS);

        builder
    }
}

#[derive(Debug, FromRow)]
struct LeadRow {
    id: i64,
    nama: String,
    nomor_whatsapp: String,
    email: String,
    nama_lembaga: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<LeadRow> for Lead {
    type Error = DomainError;

    fn try_from(row: LeadRow) -> Result<Self, Self::Error> {
        Ok(Lead {
            id: LeadId::new(row.id)?,
            nama: LeadName::new(row.nama)?,
            nomor_whatsapp: WhatsappNumber::new(row.nomor_whatsapp)?,
            email: LeadEmail::new(row.email)?,
            nama_lembaga: InstitutionName::new(row.nama_lembaga)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

#[async_trait]
impl LeadRepository for PostgresLeadRepository {
    async fn find_by_id(&self, id: LeadId) -> DomainResult<Option<Lead>> {
        let row = sqlx::query_as::<_, LeadRow>(&format!(
            "SELECT {LEAD_COLUMNS} FROM leads WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Lead::try_from).transpose()
    }

    async fn list(&self, filter: &LeadListFilter, page: PageRequest) -> DomainResult<Page<Lead>> {
        let mut count_query: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM leads");
        Self::push_filters(&mut count_query, filter);
        let total = count_query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        query.push(LEAD_COLUMNS).push(" FROM leads");
        Self::push_filters(&mut query, filter);
        Self::push_order(&mut query, filter);
        query.push(" LIMIT ");
        query.push_bind(page.limit());
        query.push(" OFFSET ");
        query.push_bind(page.offset());

        let rows = query
            .build_query_as::<LeadRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(Lead::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Page::new(items, total.max(0) as u64, page))
    }

    async fn insert(&self, lead: NewLead) -> DomainResult<Lead> {
        let NewLead { fields, created_at } = lead;

        let row = sqlx::query_as::<_, LeadRow>(&format!(
            "INSERT INTO leads (nama, nomor_whatsapp, email, nama_lembaga, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {LEAD_COLUMNS}"
        ))
        .bind(fields.nama.as_str())
        .bind(fields.nomor_whatsapp.as_str())
        .bind(fields.email.as_str())
        .bind(fields.nama_lembaga.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Lead::try_from(row)
    }

    async fn update(
        &self,
        id: LeadId,
        patch: LeadPatch,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Option<Lead>> {
        let mut builder = Self::build_update_query(id, patch, updated_at);
        let row = builder
            .build_query_as::<LeadRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Lead::try_from).transpose()
    }

    async fn soft_delete(&self, id: LeadId, deleted_at: DateTime<Utc>) -> DomainResult<bool> {
        let result = sqlx::query(
            "UPDATE leads SET deleted_at = $1, updated_at = $1
             WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(deleted_at)
        .bind(i64::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn email_exists(
        &self,
        email: &LeadEmail,
        exclude: Option<LeadId>,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM leads
                WHERE email = $1 AND deleted_at IS NULL
                  AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(email.as_str())
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}
