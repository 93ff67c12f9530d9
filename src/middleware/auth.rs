//! Bearer-token authentication middleware.
//!
//! Parses the `Authorization` header, resolves the token to a session via
//! the backend Authorize RPC, and injects a typed [`AuthSession`] into the
//! request extensions. Handlers get the session back through the extractor;
//! a protected handler mounted outside this layer is a wiring bug and
//! surfaces as a 500, never as a client error.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use http::Request;
use http::request::Parts;
use metrics::counter;
use phf::phf_set;
use tower::{Layer, Service};
use tracing::{Span, debug, warn};

use super::client_ip::ClientIp;
use crate::backend::{BackendCode, Galaxy};
use crate::error::ApiError;
use crate::extensions::TimestampExt;
use crate::pb;

/// Routes that bypass authentication.
static PUBLIC_ROUTES: phf::Set<&'static str> = phf_set! {
    "/user/login",
    "/user/create",
    "/token/renew",
    "/",
    "/health",
    "/metrics",
};

/// Identity resolved from a bearer token, valid for one request.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub session_id: String,
    pub user_id: i32,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    fn from_grant(grant: pb::AuthResponse) -> Self {
        Self {
            session_id: grant.id,
            user_id: grant.user_id,
            issued_at: grant.created_at.to_utc(),
            expires_at: grant.expired_at.to_utc(),
        }
    }

    /// Ownership check for per-user resources: the caller may only touch
    /// resources owned by their own user id. Pure comparison, no RPC.
    pub fn require_owner(&self, owner_id: i32) -> Result<(), ApiError> {
        if self.user_id == owner_id {
            Ok(())
        } else {
            warn!(
                user_id = self.user_id,
                owner_id, "rejected access to another user's resource"
            );
            Err(ApiError::Forbidden)
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Self>().cloned().ok_or_else(|| {
            ApiError::Internal("auth session missing: handler mounted outside AuthLayer".to_string())
        })
    }
}

/// Tower layer for bearer-token authentication.
#[derive(Clone)]
pub struct AuthLayer {
    backend: Arc<dyn Galaxy>,
}

impl AuthLayer {
    pub fn new(backend: Arc<dyn Galaxy>) -> Self {
        Self { backend }
    }
}

impl<S> Layer<S> for AuthLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware {
            inner,
            backend: self.backend.clone(),
        }
    }
}

/// Authentication middleware service.
#[derive(Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
    backend: Arc<dyn Galaxy>,
}

impl<S> Service<Request<Body>> for AuthMiddleware<S>
where
    S: Service<Request<Body>, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        // Client IP is recorded for every request; login forwards it to the
        // backend session.
        let client_ip = ClientIp::from_request(&req);
        req.extensions_mut().insert(client_ip);

        // CORS preflight never carries credentials.
        if req.method() == http::Method::OPTIONS || is_public_route(req.uri().path()) {
            debug!(path = req.uri().path(), "public route, skipping auth");
            let mut inner = self.inner.clone();
            return Box::pin(async move { inner.call(req).await });
        }

        let token = match parse_bearer(&req) {
            Ok(token) => token,
            Err(err) => {
                counter!("gateway_auth_rejected_total").increment(1);
                return Box::pin(async move { Ok(err.into_response()) });
            }
        };

        let backend = self.backend.clone();
        let mut inner = self.inner.clone();
        Box::pin(async move {
            match backend.authorize(pb::AuthRequest { token }).await {
                Ok(grant) => {
                    let session = AuthSession::from_grant(grant);
                    Span::current().record("user_id", session.user_id);
                    debug!(user_id = session.user_id, "authenticated");
                    req.extensions_mut().insert(session);
                    inner.call(req).await
                }
                Err(err) if err.code == BackendCode::Unauthenticated => {
                    counter!("gateway_auth_rejected_total").increment(1);
                    Ok(ApiError::InvalidCredential(err.message).into_response())
                }
                Err(err) => {
                    Ok(ApiError::Internal(format!("authorize call failed: {err}")).into_response())
                }
            }
        })
    }
}

fn is_public_route(path: &str) -> bool {
    PUBLIC_ROUTES.contains(path)
}

/// Extract the bearer token from the `Authorization` header.
///
/// The header must hold exactly a scheme and a value separated by
/// whitespace, the scheme must be "bearer" in any casing, and the value
/// must be non-empty. All failures map to 401.
fn parse_bearer<T>(req: &Request<T>) -> Result<String, ApiError> {
    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if header.is_empty() {
        return Err(ApiError::MissingCredential);
    }

    let mut fields = header.split_whitespace();
    let (Some(scheme), Some(token)) = (fields.next(), fields.next()) else {
        return Err(ApiError::MalformedCredential(
            "authorization header is invalid",
        ));
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(ApiError::MalformedCredential(
            "authorization header is invalid",
        ));
    }

    if token.is_empty() {
        return Err(ApiError::MalformedCredential("access token is required"));
    }

    Ok(token.to_string())
}
