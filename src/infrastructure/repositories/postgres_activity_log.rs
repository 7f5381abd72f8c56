// src/infrastructure/repositories/postgres_activity_log.rs
use super::map_sqlx;
use crate::domain::account::AccountId;
use crate::domain::activity::{
    ActivityAction, ActivityLog, ActivityLogEntry, ActivityLogFilter, ActivityLogRepository,
    ActorSummary, LeadSummary, NewActivityLog,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::lead::{LeadId, LeadSnapshot};
use crate::domain::pagination::{Page, PageRequest, like_pattern};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};

const ENTRY_FROM: &str = " FROM activity_logs l
    LEFT JOIN accounts a ON a.id = l.actor_account_id
    LEFT JOIN leads ld ON ld.id = l.related_lead_id";

const ENTRY_COLUMNS: &str = "l.id, l.actor_account_id, l.action, l.description, l.related_lead_id,
    l.source_ip, l.source_agent, l.before_snapshot, l.after_snapshot, l.created_at,
    a.name AS actor_name, a.email AS actor_email,
    ld.nama AS lead_nama, ld.email AS lead_email, ld.deleted_at AS lead_deleted_at";

#[derive(Clone)]
pub struct PostgresActivityLogRepository {
    pool: PgPool,
}

impl PostgresActivityLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, filter: &ActivityLogFilter) {
        builder.push(" WHERE TRUE");

        if let Some(action) = filter.action {
            builder.push(" AND l.action = ");
            builder.push_bind(action.as_str());
        }
        if let Some(actor) = filter.actor_account_id {
            builder.push(" AND l.actor_account_id = ");
            builder.push_bind(i64::from(actor));
        }
        if let Some(search) = filter.search.as_deref() {
            let pattern = like_pattern(search);
            builder.push(" AND (l.description ILIKE ");
            builder.push_bind(pattern.clone());
            builder.push(" OR a.name ILIKE ");
            builder.push_bind(pattern);
            builder.push(")");
        }
    }
}

#[derive(Debug, FromRow)]
struct ActivityLogRow {
    id: i64,
    actor_account_id: Option<i64>,
    action: String,
    description: String,
    related_lead_id: Option<i64>,
    source_ip: Option<String>,
    source_agent: Option<String>,
    before_snapshot: Option<Json<LeadSnapshot>>,
    after_snapshot: Option<Json<LeadSnapshot>>,
    created_at: DateTime<Utc>,
    actor_name: Option<String>,
    actor_email: Option<String>,
    lead_nama: Option<String>,
    lead_email: Option<String>,
    lead_deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<ActivityLogRow> for ActivityLogEntry {
    type Error = DomainError;

    fn try_from(row: ActivityLogRow) -> Result<Self, Self::Error> {
        let actor_account_id = row.actor_account_id.map(AccountId::new).transpose()?;
        let related_lead_id = row.related_lead_id.map(LeadId::new).transpose()?;

        let actor = match (actor_account_id, row.actor_name, row.actor_email) {
            (Some(id), Some(name), Some(email)) => Some(ActorSummary { id, name, email }),
            _ => None,
        };
        let lead = match (related_lead_id, row.lead_nama, row.lead_email) {
            (Some(id), Some(nama), Some(email)) => Some(LeadSummary {
                id,
                nama,
                email,
                deleted: row.lead_deleted_at.is_some(),
            }),
            _ => None,
        };

        Ok(ActivityLogEntry {
            log: ActivityLog {
                id: row.id,
                actor_account_id,
                action: row.action.parse::<ActivityAction>()?,
                description: row.description,
                related_lead_id,
                source_ip: row.source_ip,
                source_agent: row.source_agent,
                before_snapshot: row.before_snapshot.map(|Json(s)| s),
                after_snapshot: row.after_snapshot.map(|Json(s)| s),
                created_at: row.created_at,
            },
            actor,
            lead,
        })
    }
}

#[async_trait]
impl ActivityLogRepository for PostgresActivityLogRepository {
    async fn append(&self, entry: NewActivityLog) -> DomainResult<ActivityLog> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO activity_logs (
                actor_account_id, action, description, related_lead_id, source_ip,
                source_agent, before_snapshot, after_snapshot, created_at
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id",
        )
        .bind(i64::from(entry.actor_account_id()))
        .bind(entry.action().as_str())
        .bind(entry.description())
        .bind(entry.related_lead_id().map(i64::from))
        .bind(entry.source_ip())
        .bind(entry.source_agent())
        .bind(entry.before_snapshot().cloned().map(Json))
        .bind(entry.after_snapshot().cloned().map(Json))
        .bind(entry.created_at())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(entry.into_log(id))
    }

    async fn list(
        &self,
        filter: &ActivityLogFilter,
        page: PageRequest,
    ) -> DomainResult<Page<ActivityLogEntry>> {
        let mut count_query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*)");
        count_query.push(ENTRY_FROM);
        Self::push_filters(&mut count_query, filter);
        let total = count_query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        query.push(ENTRY_COLUMNS).push(ENTRY_FROM);
        Self::push_filters(&mut query, filter);
        query.push(" ORDER BY l.created_at DESC, l.id DESC LIMIT ");
        query.push_bind(page.limit());
        query.push(" OFFSET ");
        query.push_bind(page.offset());

        let rows = query
            .build_query_as::<ActivityLogRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(ActivityLogEntry::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Page::new(items, total.max(0) as u64, page))
    }
}
