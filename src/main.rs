use wafa_leads::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        token_revocation::TokenRevocationStore,
    },
    services::ApplicationServices,
};
use wafa_leads::config::AppConfig;
use wafa_leads::domain::{
    account::AccountRepository, activity::ActivityLogRepository, lead::LeadRepository,
};
use wafa_leads::infrastructure::{
    database,
    repositories::{
        PostgresAccountRepository, PostgresActivityLogRepository, PostgresLeadRepository,
    },
    security::{
        password::Argon2PasswordHasher, redis_revocation_store::RedisTokenRevocationStore,
        revocation_store::InMemoryTokenRevocationStore, token::BiscuitTokenManager,
    },
    time::SystemClock,
};
use wafa_leads::presentation::http::{
    routes::{RouterOptions, build_router_with},
    state::HttpState,
};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let account_repo: Arc<dyn AccountRepository> =
        Arc::new(PostgresAccountRepository::new(pool.clone()));
    let lead_repo: Arc<dyn LeadRepository> = Arc::new(PostgresLeadRepository::new(pool.clone()));
    let activity_repo: Arc<dyn ActivityLogRepository> =
        Arc::new(PostgresActivityLogRepository::new(pool.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new()?);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);

    let revocation_store: Arc<dyn TokenRevocationStore> = match config.redis_url() {
        Some(url) => {
            tracing::info!("using redis token revocation store");
            Arc::new(RedisTokenRevocationStore::from_url(url, Arc::clone(&clock))?)
        }
        None => {
            tracing::warn!("REDIS_URL not set; token revocations are kept in memory");
            Arc::new(InMemoryTokenRevocationStore::new(Arc::clone(&clock)))
        }
    };

    let services = Arc::new(ApplicationServices::new(
        account_repo,
        lead_repo,
        activity_repo,
        password_hasher,
        token_manager,
        revocation_store,
        clock,
        config.service_settings(),
    ));

    let state = HttpState { services };

    let app = build_router_with(
        state,
        RouterOptions {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit_enabled(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
