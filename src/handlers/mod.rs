//! HTTP handlers grouped by resource.

pub mod entries;
pub mod items;
pub mod tokens;
pub mod users;

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRequest, FromRequestParts, Request};
use http::request::Parts;

use crate::backend::Galaxy;
use crate::error::ApiError;
use crate::middleware::ClientIp;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub galaxy: Arc<dyn Galaxy>,
}

impl AppState {
    pub fn new(galaxy: Arc<dyn Galaxy>) -> Self {
        Self { galaxy }
    }
}

/// Request metadata forwarded to the backend on session creation.
pub struct ClientContext {
    pub ip: String,
    pub user_agent: String,
}

impl<S: Send + Sync> FromRequestParts<S> for ClientContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ip = parts
            .extensions
            .get::<ClientIp>()
            .and_then(ClientIp::ip)
            .map(|ip| ip.to_string())
            .unwrap_or_default();
        let user_agent = parts
            .headers
            .get(http::header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        Ok(Self { ip, user_agent })
    }
}

/// JSON body extractor whose rejection is a 400 with the standard error
/// envelope instead of axum's default 422.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
        }
    }
}

/// Path ids are positive database keys. Zero or negative ids are rejected
/// before any backend call.
pub(crate) fn require_positive_id(id: i32) -> Result<(), ApiError> {
    if id >= 1 {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "id must be a positive integer, got {id}"
        )))
    }
}
