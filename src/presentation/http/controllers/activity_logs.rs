// src/presentation/http/controllers/activity_logs.rs
use crate::application::queries::activity::ListActivityLogsQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::{ApiResponse, respond};
use crate::presentation::http::state::HttpState;
use axum::{Extension, extract::Query, http::StatusCode, response::Response};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ActivityLogListParams {
    /// `login`, `logout`, `create_lead`, `update_lead` or `delete_lead`.
    pub action: Option<String>,
    /// Acting account id.
    pub user_id: Option<i64>,
    /// Substring of the description or the actor's name.
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[utoipa::path(
    get,
    path = "/api/activity-logs",
    params(ActivityLogListParams),
    responses(
        (status = 200, description = "One page of audit entries, newest first.", body = crate::presentation::http::openapi::ActivityLogPageResponse),
        (status = 400, description = "Unknown action filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Activity Logs"
)]
pub async fn list_activity_logs(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<ActivityLogListParams>,
) -> HttpResult<Response> {
    let page = state
        .services
        .activity_queries
        .list_activity_logs(
            &actor,
            ListActivityLogsQuery {
                action: params.action,
                user_id: params.user_id,
                search: params.search,
                page: params.page,
                per_page: params.per_page,
            },
        )
        .await
        .into_http()?;

    Ok(respond(StatusCode::OK, ApiResponse::ok("Activity logs", page)))
}
