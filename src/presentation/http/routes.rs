// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{activity_logs, auth, leads},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, HealthResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use chrono::Utc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            rate_limit: true,
        }
    }
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with(state, RouterOptions::default())
}

/// Any-origin CORS; `rate_limit = false` is what the HTTP tests use since
/// oneshot requests carry no peer address for the IP key extractor.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    build_router_with(
        state,
        RouterOptions {
            rate_limit,
            ..RouterOptions::default()
        },
    )
}

pub fn build_router_with(state: HttpState, options: RouterOptions) -> Router {
    let mut throttled = Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/leads/submit", post(leads::submit_lead));
    if options.rate_limit {
        if let Some(layer) = rate_limit_layer() {
            throttled = throttled.layer(layer);
        }
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/leads", get(leads::list_leads).post(leads::create_lead))
        .route(
            "/api/leads/{id}",
            get(leads::get_lead)
                .put(leads::update_lead)
                .delete(leads::delete_lead),
        )
        .route("/api/activity-logs", get(activity_logs::list_activity_logs))
        .merge(throttled)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::HealthResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "ok".into(),
        timestamp: Utc::now(),
    })
}
