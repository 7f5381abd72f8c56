// src/presentation/http/response.rs
use crate::application::commands::{AuditStatus, Audited};
use axum::{
    Json,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const AUDIT_STATUS_HEADER: HeaderName = HeaderName::from_static("x-audit-status");

/// `{ "success": true, "message": ..., "data": ... }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    /// `recorded` or `degraded`; only on audited writes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            audit: None,
        }
    }
}

pub fn respond<T: Serialize>(status: StatusCode, body: ApiResponse<T>) -> Response {
    (status, Json(body)).into_response()
}

/// Like [`respond`], but surfaces the audit outcome. A degraded audit adds
/// the `x-audit-status: degraded` header.
pub fn respond_audited<T: Serialize>(
    status: StatusCode,
    message: impl Into<String>,
    audited: Audited<T>,
) -> Response {
    let Audited { value, audit } = audited;
    let body = ApiResponse {
        success: true,
        message: message.into(),
        data: Some(value),
        audit: Some(audit.as_str().to_string()),
    };

    let mut response = (status, Json(body)).into_response();
    if let AuditStatus::Degraded(_) = audit {
        response
            .headers_mut()
            .insert(AUDIT_STATUS_HEADER, HeaderValue::from_static("degraded"));
    }
    response
}
