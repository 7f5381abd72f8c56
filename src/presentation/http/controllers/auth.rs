// src/presentation/http/controllers/auth.rs
use crate::application::commands::auth::{LoginCommand, RefreshTokenCommand};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, BearerToken, RequestMeta};
use crate::presentation::http::response::{ApiResponse, respond, respond_audited};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode, response::Response};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued. `data` holds the token and account summary.", body = crate::application::dto::LoginResultDto),
        (status = 401, description = "Invalid credentials.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many attempts.")
    ),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    RequestMeta(meta): RequestMeta,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Response> {
    let command = LoginCommand {
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .auth
        .authenticate(command, &meta)
        .await
        .into_http()?;

    Ok(respond_audited(StatusCode::OK, "Login successful", result))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Token revoked."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn logout(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    RequestMeta(meta): RequestMeta,
) -> HttpResult<Response> {
    let result = state
        .services
        .auth
        .invalidate(&actor, &meta)
        .await
        .into_http()?;

    Ok(respond_audited(
        StatusCode::OK,
        "Successfully logged out",
        result,
    ))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Profile of the calling account.", body = crate::application::dto::AccountProfileDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn me(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<Response> {
    let profile = state.services.auth.me(&actor).await.into_http()?;
    Ok(respond(StatusCode::OK, ApiResponse::ok("Profile", profile)))
}

#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    responses(
        (status = 200, description = "Replacement token. The presented one is revoked.", body = crate::application::dto::AuthTokenDto),
        (status = 401, description = "Token cannot be refreshed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Auth"
)]
pub async fn refresh(
    Extension(state): Extension<HttpState>,
    BearerToken(token): BearerToken,
) -> HttpResult<Response> {
    let token = state
        .services
        .auth
        .refresh(RefreshTokenCommand { token })
        .await
        .into_http()?;

    Ok(respond(
        StatusCode::OK,
        ApiResponse::ok("Token refreshed", token),
    ))
}
