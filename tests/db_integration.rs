// tests/db_integration.rs
//! Runs against a real Postgres. Set `RUN_DB_INTEGRATION=1` and
//! `DATABASE_URL` to a disposable database; the tables are truncated.
use chrono::{Duration, Utc};
use sqlx::PgPool;
use wafa_leads::domain::account::{AccountEmail, AccountId, AccountRepository, Role};
use wafa_leads::domain::activity::{
    ActivityAction, ActivityLogFilter, ActivityLogRepository, NewActivityLog,
};
use wafa_leads::domain::lead::{
    LeadEmail, LeadFields, LeadListFilter, LeadPatch, LeadRepository, LeadSortColumn, NewLead,
};
use wafa_leads::domain::pagination::{PageRequest, SortDirection};
use wafa_leads::domain::DomainError;
use wafa_leads::infrastructure::{
    database,
    repositories::{
        PostgresAccountRepository, PostgresActivityLogRepository, PostgresLeadRepository,
    },
};

mod support;

use support::{budi_input, lead_input};

async fn pool() -> Option<PgPool> {
    if std::env::var("RUN_DB_INTEGRATION").ok().as_deref() != Some("1") {
        eprintln!("skipping: RUN_DB_INTEGRATION not set");
        return None;
    }
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL for db integration tests");
    let pool = database::init_pool(&url).await.expect("connect");
    database::run_migrations(&pool).await.expect("migrate");
    sqlx::query("TRUNCATE activity_logs, leads, accounts RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await
        .expect("truncate");
    sqlx::query(
        "INSERT INTO accounts (name, email, password_hash, role, is_active)
         VALUES ('Wafa', 'admin@wafa.test', 'hash::secret-pass', 'admin', TRUE)",
    )
    .execute(&pool)
    .await
    .expect("seed account");
    Some(pool)
}

// One test so the shared tables are never truncated under a concurrent run.
#[tokio::test]
async fn postgres_repositories_honour_the_lead_and_audit_contracts() {
    let Some(pool) = pool().await else {
        return;
    };

    let accounts = PostgresAccountRepository::new(pool.clone());
    let leads = PostgresLeadRepository::new(pool.clone());
    let activity = PostgresActivityLogRepository::new(pool.clone());

    let admin = accounts
        .find_by_email(&AccountEmail::new("ADMIN@wafa.test").unwrap())
        .await
        .unwrap()
        .expect("seeded admin");
    assert_eq!(admin.role, Role::Admin);
    assert!(accounts.find_by_id(AccountId(999)).await.unwrap().is_none());

    let now = Utc::now();
    let budi = leads
        .insert(NewLead {
            fields: LeadFields::parse(budi_input()).unwrap(),
            created_at: now,
        })
        .await
        .unwrap();
    let ani = leads
        .insert(NewLead {
            fields: LeadFields::parse(lead_input("Ani", "081200000002", "ani@x.com", "SMP 4"))
                .unwrap(),
            created_at: now + Duration::seconds(1),
        })
        .await
        .unwrap();

    // The partial unique index backs up the service pre-check.
    let dup = leads
        .insert(NewLead {
            fields: LeadFields::parse(budi_input()).unwrap(),
            created_at: now,
        })
        .await
        .unwrap_err();
    assert!(matches!(dup, DomainError::InvalidFields(ref f) if f.contains("email")));

    let budi_email = LeadEmail::new("budi@x.com").unwrap();
    assert!(leads.email_exists(&budi_email, None).await.unwrap());
    assert!(!leads.email_exists(&budi_email, Some(budi.id)).await.unwrap());

    let before = budi.snapshot();
    let patch = LeadPatch::parse(wafa_leads::domain::lead::LeadInput {
        nama_lembaga: Some("SMA 2".into()),
        ..Default::default()
    })
    .unwrap();
    let updated = leads
        .update(budi.id, patch, now + Duration::seconds(2))
        .await
        .unwrap()
        .expect("live lead");
    assert_eq!(updated.nama_lembaga.as_str(), "SMA 2");
    assert_eq!(updated.nama.as_str(), "Budi");

    let entry = NewActivityLog::lead_updated(
        admin.id,
        before,
        updated.snapshot(),
        "Admin Wafa updated lead".into(),
        now,
    )
    .unwrap()
    .with_source(Some("203.0.113.7".into()), Some("db-test".into()));
    let stored = activity.append(entry).await.unwrap();
    assert!(stored.id > 0);

    let search = LeadListFilter {
        search: Some("sma_".into()),
        ..LeadListFilter::default()
    };
    let literal = leads.list(&search, PageRequest::new(1, 10, 10)).await.unwrap();
    assert_eq!(literal.total, 0, "underscore is matched literally");

    let by_name = LeadListFilter {
        order_by: LeadSortColumn::Nama,
        direction: SortDirection::Asc,
        ..LeadListFilter::default()
    };
    let page = leads.list(&by_name, PageRequest::new(1, 10, 10)).await.unwrap();
    let names: Vec<&str> = page.items.iter().map(|l| l.nama.as_str()).collect();
    assert_eq!(names, ["Ani", "Budi"]);

    assert!(leads.soft_delete(budi.id, now).await.unwrap());
    assert!(!leads.soft_delete(budi.id, now).await.unwrap());
    assert!(leads.find_by_id(budi.id).await.unwrap().is_none());
    assert!(leads
        .update(budi.id, LeadPatch::default(), now)
        .await
        .unwrap()
        .is_none());
    let page = leads
        .list(&LeadListFilter::default(), PageRequest::new(1, 10, 10))
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, ani.id);
    assert!(!leads.email_exists(&budi_email, None).await.unwrap());

    let history = activity
        .list(
            &ActivityLogFilter {
                action: Some(ActivityAction::UpdateLead),
                ..ActivityLogFilter::default()
            },
            PageRequest::new(1, 20, 20),
        )
        .await
        .unwrap();
    assert_eq!(history.total, 1);
    let row = &history.items[0];
    assert_eq!(row.log.before_snapshot.as_ref().unwrap().nama_lembaga, "SMA 1");
    assert_eq!(row.log.after_snapshot.as_ref().unwrap().nama_lembaga, "SMA 2");
    assert_eq!(row.actor.as_ref().unwrap().name, "Wafa");
    assert!(row.lead.as_ref().unwrap().deleted);
    assert_eq!(row.log.source_agent.as_deref(), Some("db-test"));
}
