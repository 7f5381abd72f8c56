// src/presentation/http/openapi.rs
use crate::application::dto::{ActivityLogDto, LeadDto};
use axum::{Router, response::Redirect, routing::get};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Shape of `data` on `GET /api/leads`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LeadPageResponse {
    pub items: Vec<LeadDto>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub last_page: u32,
}

/// Shape of `data` on `GET /api/activity-logs`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActivityLogPageResponse {
    pub items: Vec<ActivityLogDto>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub last_page: u32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        crate::presentation::http::controllers::auth::me,
        crate::presentation::http::controllers::auth::refresh,
        crate::presentation::http::controllers::leads::submit_lead,
        crate::presentation::http::controllers::leads::list_leads,
        crate::presentation::http::controllers::leads::get_lead,
        crate::presentation::http::controllers::leads::create_lead,
        crate::presentation::http::controllers::leads::update_lead,
        crate::presentation::http::controllers::leads::delete_lead,
        crate::presentation::http::controllers::activity_logs::list_activity_logs,
        super::routes::health
    ),
    components(
        schemas(
            HealthResponse,
            LeadPageResponse,
            ActivityLogPageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::leads::LeadRequest,
            crate::presentation::http::controllers::leads::LeadListParams,
            crate::presentation::http::controllers::activity_logs::ActivityLogListParams,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::LoginResultDto,
            crate::application::dto::AccountSummaryDto,
            crate::application::dto::AccountProfileDto,
            crate::application::dto::LeadDto,
            crate::application::dto::ActivityLogDto,
            crate::application::dto::ActivityActorDto,
            crate::application::dto::ActivityLeadDto
        )
    ),
    tags(
        (name = "Auth", description = "Staff authentication"),
        (name = "Leads", description = "Public submission and lead administration"),
        (name = "Activity Logs", description = "Audit trail of logins and lead mutations"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Wafa Leads API",
        description = "Lead capture with an audited admin surface",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
