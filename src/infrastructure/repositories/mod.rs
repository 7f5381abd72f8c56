// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_account;
mod postgres_activity_log;
mod postgres_lead;

pub use error::map_sqlx;
pub use postgres_account::PostgresAccountRepository;
pub use postgres_activity_log::PostgresActivityLogRepository;
pub use postgres_lead::PostgresLeadRepository;
