//! Gateway error taxonomy and backend-failure translation.
//!
//! Every response body produced here has the shape `{"error": "<message>"}`.
//! Backend failures are translated to HTTP statuses by a per-endpoint table:
//! the same backend code deliberately maps to different statuses on different
//! endpoints (not-found is 400 on entry creation, 404 on direct user fetch,
//! and a disguised 401 on login). Clients depend on the existing mapping, so
//! the table preserves it instead of normalizing.

use std::collections::HashMap;
use std::sync::OnceLock;

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::json;
use tracing::error;

use crate::backend::{BackendCode, BackendError};

/// Gateway-visible error. Internal detail never reaches the client; it is
/// logged when the response is built.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed JSON or URI input, rejected before any RPC.
    #[error("{0}")]
    Validation(String),

    /// No `Authorization` header at all.
    #[error("authorization header is required")]
    MissingCredential,

    /// Header present but not a usable bearer credential.
    #[error("{0}")]
    MalformedCredential(&'static str),

    /// Backend rejected the bearer token.
    #[error("{0}")]
    InvalidCredential(String),

    /// Authenticated caller does not own the requested resource.
    #[error("you are not allowed to access this resource")]
    Forbidden,

    /// Login failed. One message for every cause so responses never reveal
    /// whether a username exists.
    #[error("username or password is incorrect")]
    InvalidLogin,

    /// Backend failure already mapped by the translation table.
    #[error("{message}")]
    Backend { status: StatusCode, message: String },

    /// Anything unclassified. The payload is for server-side diagnostics.
    #[error("internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::MissingCredential
            | Self::MalformedCredential(_)
            | Self::InvalidCredential(_)
            | Self::InvalidLogin => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::Backend { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            error!(detail = %detail, "internal error");
        }
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Translation-table key. Keys identify the RPC step, not just the route:
/// the two login calls and the user-create uniqueness pre-check each accept
/// a different backend code, so each gets its own row set. A code arriving
/// on the wrong step falls through to 500 instead of borrowing the other
/// step's mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    LoginLookup,
    LoginSession,
    CreateUserLookup,
    CreateUser,
    GetUser,
    UpdateUser,
    RenewToken,
    CreateItem,
    GetItem,
    ListItems,
    UpdateItem,
    DeleteItem,
    CreateEntry,
    GetEntry,
    ListEntries,
    ListEntriesByUser,
    ListEntriesByItem,
}

/// Client-visible message for a mapped failure: a fixed string, or the
/// backend's own detail where the endpoint has always echoed it.
type MessageOverride = Option<&'static str>;

/// The per-endpoint mapping, declarative so the known inconsistencies stay
/// visible in one place. Anything not listed falls through to HTTP 500 with
/// a generic message.
const MAPPINGS: &[((Endpoint, BackendCode), (StatusCode, MessageOverride))] = &[
    // Login disguises credential failures as one generic 401, but each step
    // recognizes exactly one code: an unknown username surfaces as NotFound
    // from the lookup, a rejected session as InvalidArgument from session
    // creation. Anything else is an outage, not bad credentials.
    (
        (Endpoint::LoginLookup, BackendCode::NotFound),
        (
            StatusCode::UNAUTHORIZED,
            Some("username or password is incorrect"),
        ),
    ),
    (
        (Endpoint::LoginSession, BackendCode::InvalidArgument),
        (
            StatusCode::UNAUTHORIZED,
            Some("username or password is incorrect"),
        ),
    ),
    // CreateUserLookup (the uniqueness pre-check) intentionally has no rows:
    // NotFound means the name is free and is handled at the call site, and
    // every other code is a 500.
    (
        (Endpoint::RenewToken, BackendCode::Unauthenticated),
        (StatusCode::UNAUTHORIZED, None),
    ),
    (
        (Endpoint::CreateUser, BackendCode::InvalidArgument),
        (StatusCode::BAD_REQUEST, None),
    ),
    (
        (Endpoint::GetUser, BackendCode::NotFound),
        (StatusCode::NOT_FOUND, None),
    ),
    (
        (Endpoint::UpdateUser, BackendCode::InvalidArgument),
        (StatusCode::BAD_REQUEST, None),
    ),
    (
        (Endpoint::UpdateItem, BackendCode::NotFound),
        (StatusCode::BAD_REQUEST, None),
    ),
    (
        (Endpoint::DeleteItem, BackendCode::NotFound),
        (StatusCode::BAD_REQUEST, None),
    ),
    // Entry creation validates its user/item references first; a missing
    // reference is the caller's mistake, not a missing entry.
    (
        (Endpoint::CreateEntry, BackendCode::NotFound),
        (StatusCode::BAD_REQUEST, None),
    ),
    (
        (Endpoint::GetEntry, BackendCode::NotFound),
        (StatusCode::NOT_FOUND, None),
    ),
];

fn mapping_table() -> &'static HashMap<(Endpoint, BackendCode), (StatusCode, MessageOverride)> {
    static TABLE: OnceLock<HashMap<(Endpoint, BackendCode), (StatusCode, MessageOverride)>> =
        OnceLock::new();
    TABLE.get_or_init(|| MAPPINGS.iter().copied().collect())
}

/// Translate a classified backend failure for one endpoint.
pub fn translate(endpoint: Endpoint, err: BackendError) -> ApiError {
    match mapping_table().get(&(endpoint, err.code)) {
        Some(&(status, Some(message))) => ApiError::Backend {
            status,
            message: message.to_string(),
        },
        Some(&(status, None)) => ApiError::Backend {
            status,
            message: err.message,
        },
        None => ApiError::Internal(format!(
            "{endpoint:?}: unhandled backend failure {:?}: {}",
            err.code, err.message
        )),
    }
}
