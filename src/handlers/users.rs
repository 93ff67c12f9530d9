//! User account handlers: login, registration, fetch, partial update.

use axum::Json;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::{AppState, ClientContext, JsonBody};
use crate::backend::BackendCode;
use crate::error::{ApiError, Endpoint, translate};
use crate::extensions::TimestampExt;
use crate::middleware::AuthSession;
use crate::password::Encryptor;
use crate::patch::Patch;
use crate::pb;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Public view of a user account. Password material never appears here.
#[derive(Debug, Serialize)]
pub struct UserBody {
    pub id: i32,
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub plan: i32,
    pub created_at: DateTime<Utc>,
    pub expired_at: DateTime<Utc>,
    pub auto_renew: bool,
}

impl UserBody {
    fn from_proto(user: pb::User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            fullname: user.fullname,
            email: user.email,
            plan: user.plan,
            created_at: user.created_at.to_utc(),
            expired_at: user.expired_at.to_utc(),
            auto_renew: user.auto_renew,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserBody,
    pub access_token: String,
    pub access_expired_at: DateTime<Utc>,
    pub refresh_token: String,
    pub refresh_expired_at: DateTime<Utc>,
}

/// Authenticate a username/password pair and mint a session.
///
/// Every failure caused by the credentials themselves collapses to the
/// same 401 body, so a caller cannot probe which usernames exist.
#[instrument(skip_all, fields(username = %req.username))]
pub async fn login(
    State(state): State<AppState>,
    client: ClientContext,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let lookup = state
        .galaxy
        .get_user_by_username(pb::GetUserByUsernameRequest {
            username: req.username.clone(),
        })
        .await
        .map_err(|err| translate(Endpoint::LoginLookup, err))?;

    if !Encryptor::verify(&req.password, &lookup.password) {
        warn!("login rejected: password mismatch");
        return Err(ApiError::InvalidLogin);
    }

    let user = lookup.user.unwrap_or_default();
    let session = state
        .galaxy
        .create_session(pb::CreateSessionRequest {
            user_id: user.id,
            client_ip: client.ip,
            user_agent: client.user_agent,
        })
        .await
        .map_err(|err| translate(Endpoint::LoginSession, err))?;

    let refresh = session.session.unwrap_or_default();
    info!(user_id = user.id, "login succeeded");

    Ok(Json(LoginResponse {
        user: UserBody::from_proto(user),
        access_token: session.access_token,
        access_expired_at: session.expired_at.to_utc(),
        refresh_token: refresh.refresh_token,
        refresh_expired_at: refresh.expired_at.to_utc(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub plan: i32,
    #[serde(default)]
    pub auto_renew: bool,
}

/// Register a new account. The username is checked for uniqueness first;
/// an existing account is reported outright since registration is public.
#[instrument(skip_all, fields(username = %req.username))]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<Json<UserBody>, ApiError> {
    match state
        .galaxy
        .get_user_by_username(pb::GetUserByUsernameRequest {
            username: req.username.clone(),
        })
        .await
    {
        Ok(_) => {
            return Err(ApiError::Validation("username already exists".to_string()));
        }
        Err(err) if err.code == BackendCode::NotFound => {}
        Err(err) => return Err(translate(Endpoint::CreateUserLookup, err)),
    }

    let hashed = Encryptor::hash(&req.password)?;

    let result = state
        .galaxy
        .create_user(pb::CreateUserRequest {
            username: req.username,
            fullname: req.fullname,
            email: req.email,
            password: hashed,
            plan: req.plan,
            auto_renew: req.auto_renew,
        })
        .await
        .map_err(|err| translate(Endpoint::CreateUser, err))?;

    let user = result.user.unwrap_or_default();
    info!(user_id = user.id, "user created");
    Ok(Json(UserBody::from_proto(user)))
}

/// Fetch a user by id. Callers may only fetch their own account.
///
/// Only a zero id is rejected as missing input; any other id goes through
/// the ownership check, so a bogus negative id reads as someone else's
/// account (403), not as malformed input.
#[instrument(skip(state, session), fields(user_id = session.user_id, target_id = id))]
pub async fn get_user(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<i32>,
) -> Result<Json<UserBody>, ApiError> {
    if id == 0 {
        return Err(ApiError::Validation("id is required".to_string()));
    }
    session.require_owner(id)?;

    let result = state
        .galaxy
        .get_user(pb::GetUserRequest { id })
        .await
        .map_err(|err| translate(Endpoint::GetUser, err))?;

    Ok(Json(UserBody::from_proto(result.user.unwrap_or_default())))
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub id: i32,
    #[serde(default)]
    pub username: Patch<String>,
    #[serde(default)]
    pub fullname: Patch<String>,
    #[serde(default)]
    pub email: Patch<String>,
    #[serde(default)]
    pub password: Patch<String>,
    #[serde(default)]
    pub plan: Patch<i32>,
    #[serde(default)]
    pub auto_renew: Patch<bool>,
}

/// Partial update of the caller's own account. Absent and null fields are
/// left untouched; a provided password is hashed before it leaves the
/// gateway.
#[instrument(skip_all, fields(user_id = session.user_id, target_id = req.id))]
pub async fn update_user(
    State(state): State<AppState>,
    session: AuthSession,
    JsonBody(req): JsonBody<UpdateUserRequest>,
) -> Result<Json<UserBody>, ApiError> {
    session.require_owner(req.id)?;

    let password = match req.password {
        Patch::Set(ref plain) => Some(Encryptor::hash(plain)?),
        Patch::Unset => None,
    };

    let result = state
        .galaxy
        .update_user(pb::UpdateUserRequest {
            id: req.id,
            username: req.username.into_option(),
            fullname: req.fullname.into_option(),
            email: req.email.into_option(),
            password,
            plan: req.plan.into_option(),
            auto_renew: req.auto_renew.into_option(),
        })
        .await
        .map_err(|err| translate(Endpoint::UpdateUser, err))?;

    info!("user updated");
    Ok(Json(UserBody::from_proto(result.user.unwrap_or_default())))
}
