//! Access token renewal.

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{AppState, JsonBody};
use crate::error::{ApiError, Endpoint, translate};
use crate::extensions::TimestampExt;
use crate::pb;

#[derive(Debug, Deserialize)]
pub struct RenewAccessTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct RenewAccessTokenResponse {
    pub access_token: String,
    pub access_expired_at: DateTime<Utc>,
}

/// Exchange a refresh token for a fresh access token. The refresh token is
/// validated entirely by the backend; its rejection detail is safe to echo.
#[instrument(skip_all)]
pub async fn renew_access_token(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RenewAccessTokenRequest>,
) -> Result<Json<RenewAccessTokenResponse>, ApiError> {
    let result = state
        .galaxy
        .renew_access_token(pb::RenewAccessTokenRequest {
            refresh_token: req.refresh_token,
        })
        .await
        .map_err(|err| translate(Endpoint::RenewToken, err))?;

    Ok(Json(RenewAccessTokenResponse {
        access_token: result.access_token,
        access_expired_at: result.expired_at.to_utc(),
    }))
}
