// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use axum::Router;
use serde_json::Value;

use wafa_leads::application::{
    commands::auth::LoginCommand,
    dto::{AuthenticatedAccount, ClientMeta},
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        token_revocation::TokenRevocationStore,
    },
    services::{ApplicationServices, ServiceSettings},
};
use wafa_leads::domain::{
    account::AccountRepository, activity::ActivityLogRepository, lead::LeadRepository,
};
use wafa_leads::infrastructure::security::revocation_store::InMemoryTokenRevocationStore;
use wafa_leads::presentation::http::{routes::build_router_with_rate_limiter, state::HttpState};

use super::builders::{ADMIN_EMAIL, PASSWORD, STAFF_EMAIL, seeded_accounts};
use super::mocks::{
    FailingActivityLogRepo, FailingRevocationStore, FakeTokenManager, FixedClock,
    GatedLeadRepo, InMemoryAccountRepo, InMemoryActivityLogRepo, InMemoryLeadRepo, StrictPasswordHasher,
};

/// Application services over in-memory adapters, with handles on every
/// adapter so tests can inspect what was written.
pub struct TestApp {
    pub accounts: Arc<InMemoryAccountRepo>,
    pub leads: Arc<InMemoryLeadRepo>,
    pub activity: Arc<InMemoryActivityLogRepo>,
    pub clock: Arc<FixedClock>,
    pub tokens: Arc<FakeTokenManager>,
    pub hasher: Arc<StrictPasswordHasher>,
    pub services: Arc<ApplicationServices>,
}

#[derive(Default)]
pub struct TestAppOptions {
    pub failing_audit: bool,
    pub failing_revocation: bool,
    /// Lead reads wait until this many callers have read the row.
    pub concurrent_lead_readers: Option<usize>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_options(TestAppOptions::default())
    }

    pub fn with_failing_audit() -> Self {
        Self::with_options(TestAppOptions {
            failing_audit: true,
            ..TestAppOptions::default()
        })
    }

    pub fn with_options(options: TestAppOptions) -> Self {
        let accounts = Arc::new(InMemoryAccountRepo::with(seeded_accounts()));
        let leads = Arc::new(InMemoryLeadRepo::default());
        let activity = Arc::new(InMemoryActivityLogRepo::new(
            Arc::clone(&accounts),
            Arc::clone(&leads),
        ));
        let clock = Arc::new(FixedClock::default());
        let tokens = Arc::new(FakeTokenManager::default());

        let audit_repo: Arc<dyn ActivityLogRepository> = if options.failing_audit {
            Arc::new(FailingActivityLogRepo)
        } else {
            activity.clone()
        };
        let clock_port: Arc<dyn Clock> = clock.clone();
        let revocation_store: Arc<dyn TokenRevocationStore> = if options.failing_revocation {
            Arc::new(FailingRevocationStore)
        } else {
            Arc::new(InMemoryTokenRevocationStore::new(Arc::clone(&clock_port)))
        };
        let account_repo: Arc<dyn AccountRepository> = accounts.clone();
        let lead_repo: Arc<dyn LeadRepository> = match options.concurrent_lead_readers {
            Some(readers) => Arc::new(GatedLeadRepo::new(Arc::clone(&leads), readers)),
            None => leads.clone(),
        };
        let hasher = Arc::new(StrictPasswordHasher::default());
        let password_hasher: Arc<dyn PasswordHasher> = hasher.clone();
        let token_manager: Arc<dyn TokenManager> = tokens.clone();

        let services = Arc::new(ApplicationServices::new(
            account_repo,
            lead_repo,
            audit_repo,
            password_hasher,
            token_manager,
            revocation_store,
            clock_port,
            ServiceSettings::default(),
        ));

        Self {
            accounts,
            leads,
            activity,
            clock,
            tokens,
            hasher,
            services,
        }
    }

    pub fn router(&self) -> Router {
        build_router_with_rate_limiter(
            HttpState {
                services: Arc::clone(&self.services),
            },
            false,
        )
    }

    pub async fn token_for(&self, email: &str) -> String {
        self.services
            .auth
            .authenticate(
                LoginCommand {
                    email: email.into(),
                    password: PASSWORD.into(),
                },
                &ClientMeta::default(),
            )
            .await
            .expect("seeded login")
            .value
            .access_token
    }

    pub async fn admin_token(&self) -> String {
        self.token_for(ADMIN_EMAIL).await
    }

    pub async fn admin(&self) -> AuthenticatedAccount {
        let token = self.admin_token().await;
        self.services.auth.resolve(&token).await.expect("resolve admin")
    }

    pub async fn staff(&self) -> AuthenticatedAccount {
        let token = self.token_for(STAFF_EMAIL).await;
        self.services.auth.resolve(&token).await.expect("resolve staff")
    }
}

pub fn meta() -> ClientMeta {
    ClientMeta::new(Some("203.0.113.7".into()), Some("integration-test".into()))
}

pub fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, HeaderMap, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!("expected json body, got {}", String::from_utf8_lossy(&bytes))
        })
    };
    (status, parts.headers, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    let (status, headers, json) = read_json(resp).await;
    assert_eq!(status, expected_status, "body: {json}");
    let ct = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    assert_eq!(json["error"].as_str(), Some(expected_error), "body: {json}");
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty message field in ErrorResponse"
    );
    json
}
