// src/presentation/http/controllers/leads.rs
use crate::application::{
    commands::leads::{CreateLeadCommand, DeleteLeadCommand, SubmitLeadCommand, UpdateLeadCommand},
    queries::leads::ListLeadsQuery,
};
use crate::domain::lead::LeadInput;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, RequestMeta};
use crate::presentation::http::response::{ApiResponse, respond, respond_audited};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Lead fields as submitted. Absent fields are `null`; on update only the
/// present ones are changed.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LeadRequest {
    pub nama: Option<String>,
    pub nomor_whatsapp: Option<String>,
    pub email: Option<String>,
    pub nama_lembaga: Option<String>,
}

impl From<LeadRequest> for LeadInput {
    fn from(request: LeadRequest) -> Self {
        LeadInput {
            nama: request.nama,
            nomor_whatsapp: request.nomor_whatsapp,
            email: request.email,
            nama_lembaga: request.nama_lembaga,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct LeadListParams {
    /// Substring of name, email, institution or phone.
    pub search: Option<String>,
    /// One of `id`, `nama`, `email`, `nama_lembaga`, `created_at`.
    pub order_by: Option<String>,
    /// `asc` or `desc` (default).
    pub order_direction: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[utoipa::path(
    post,
    path = "/api/leads/submit",
    request_body = LeadRequest,
    responses(
        (status = 201, description = "Lead created.", body = crate::application::dto::LeadDto),
        (status = 422, description = "Field validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many submissions.")
    ),
    tag = "Leads"
)]
pub async fn submit_lead(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LeadRequest>,
) -> HttpResult<Response> {
    let lead = state
        .services
        .lead_commands
        .submit_public(SubmitLeadCommand {
            input: payload.into(),
        })
        .await
        .into_http()?;

    Ok(respond(
        StatusCode::CREATED,
        ApiResponse::ok("Thank you, your data has been received", lead),
    ))
}

#[utoipa::path(
    get,
    path = "/api/leads",
    params(LeadListParams),
    responses(
        (status = 200, description = "One page of live leads.", body = crate::presentation::http::openapi::LeadPageResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Leads"
)]
pub async fn list_leads(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<LeadListParams>,
) -> HttpResult<Response> {
    let page = state
        .services
        .lead_queries
        .list_leads(
            &actor,
            ListLeadsQuery {
                search: params.search,
                order_by: params.order_by,
                order_direction: params.order_direction,
                page: params.page,
                per_page: params.per_page,
            },
        )
        .await
        .into_http()?;

    Ok(respond(StatusCode::OK, ApiResponse::ok("Leads", page)))
}

#[utoipa::path(
    get,
    path = "/api/leads/{id}",
    params(("id" = i64, Path, description = "Lead identifier")),
    responses(
        (status = 200, description = "The lead.", body = crate::application::dto::LeadDto),
        (status = 404, description = "No live lead with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Leads"
)]
pub async fn get_lead(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let lead = state
        .services
        .lead_queries
        .get_lead(&actor, id)
        .await
        .into_http()?;

    Ok(respond(StatusCode::OK, ApiResponse::ok("Lead", lead)))
}

#[utoipa::path(
    post,
    path = "/api/leads",
    request_body = LeadRequest,
    responses(
        (status = 201, description = "Lead created and audited.", body = crate::application::dto::LeadDto),
        (status = 422, description = "Field validation failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Leads"
)]
pub async fn create_lead(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    RequestMeta(meta): RequestMeta,
    Json(payload): Json<LeadRequest>,
) -> HttpResult<Response> {
    let result = state
        .services
        .lead_commands
        .create_as_admin(
            &actor,
            &meta,
            CreateLeadCommand {
                input: payload.into(),
            },
        )
        .await
        .into_http()?;

    Ok(respond_audited(
        StatusCode::CREATED,
        "Lead created successfully",
        result,
    ))
}

#[utoipa::path(
    put,
    path = "/api/leads/{id}",
    params(("id" = i64, Path, description = "Lead identifier")),
    request_body = LeadRequest,
    responses(
        (status = 200, description = "Lead updated and audited.", body = crate::application::dto::LeadDto),
        (status = 404, description = "No live lead with this id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Field validation failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Leads"
)]
pub async fn update_lead(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    RequestMeta(meta): RequestMeta,
    Path(id): Path<i64>,
    Json(payload): Json<LeadRequest>,
) -> HttpResult<Response> {
    let result = state
        .services
        .lead_commands
        .update(
            &actor,
            &meta,
            UpdateLeadCommand {
                id,
                input: payload.into(),
            },
        )
        .await
        .into_http()?;

    Ok(respond_audited(
        StatusCode::OK,
        "Lead updated successfully",
        result,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/leads/{id}",
    params(("id" = i64, Path, description = "Lead identifier")),
    responses(
        (status = 200, description = "Lead soft-deleted and audited."),
        (status = 404, description = "No live lead with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Leads"
)]
pub async fn delete_lead(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    RequestMeta(meta): RequestMeta,
    Path(id): Path<i64>,
) -> HttpResult<Response> {
    let result = state
        .services
        .lead_commands
        .delete(&actor, &meta, DeleteLeadCommand { id })
        .await
        .into_http()?;

    Ok(respond_audited(
        StatusCode::OK,
        "Lead deleted successfully",
        result.map(|_| ()),
    ))
}
