// src/presentation/http/extractors.rs
use crate::{
    application::{
        dto::{AuthenticatedAccount, ClientMeta},
        error::{ApplicationError, AuthFailure},
    },
    presentation::http::state::HttpState,
};
use axum::{
    Extension,
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, header::USER_AGENT, request::Parts},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use std::{convert::Infallible, net::SocketAddr};

use super::error::HttpError;

/// The resolved caller. Rejects with 401 before the handler runs.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedAccount);

/// The raw bearer token, unchecked. Used where an expired token is still
/// meaningful (refresh).
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

/// Caller IP and user agent, for audit rows.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta(pub ClientMeta);

fn bearer_from(parts: &Parts) -> Result<String, HttpError> {
    parts
        .headers
        .typed_get::<Authorization<Bearer>>()
        .map(|header| header.token().to_string())
        .ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized(AuthFailure::MissingToken))
        })
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let token = bearer_from(parts)?;
        let account = app_state
            .services
            .auth
            .resolve(&token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(account))
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer_from(parts).map(Self)
    }
}

impl<S> FromRequestParts<S> for RequestMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        Ok(Self(ClientMeta::new(
            client_ip(&parts.headers).or(peer),
            header_str(&parts.headers, USER_AGENT.as_str()),
        )))
    }
}

/// First hop of `X-Forwarded-For`, then `X-Real-IP`.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    header_str(headers, "x-forwarded-for")
        .and_then(|value| {
            value
                .split(',')
                .map(str::trim)
                .find(|hop| !hop.is_empty())
                .map(str::to_string)
        })
        .or_else(|| header_str(headers, "x-real-ip"))
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn forwarded_for_wins_over_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("203.0.113.7, 10.0.0.1"));
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(client_ip(&headers).as_deref(), Some("203.0.113.7"));

        headers.remove("x-forwarded-for");
        assert_eq!(client_ip(&headers).as_deref(), Some("10.0.0.2"));
    }
}
