//! Purchase entry handlers.
//!
//! The public JSON field for the purchasing user is `member_id`, a wire
//! name inherited from the client contract. Internally and on the gRPC
//! side it is `user_id`.

use axum::Json;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::{AppState, JsonBody, require_positive_id};
use crate::error::{ApiError, Endpoint, translate};
use crate::extensions::TimestampExt;
use crate::pb;

#[derive(Debug, Serialize)]
pub struct EntryBody {
    pub id: i32,
    #[serde(rename = "member_id")]
    pub user_id: i32,
    pub item_id: i32,
    pub quantity: i32,
    pub total: i32,
    pub created_at: DateTime<Utc>,
}

impl EntryBody {
    fn from_proto(entry: pb::Entry) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            item_id: entry.item_id,
            quantity: entry.quantity,
            total: entry.total,
            created_at: entry.created_at.to_utc(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    #[serde(rename = "member_id")]
    pub user_id: i32,
    pub item_id: i32,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub total: i32,
}

/// Record a purchase. Both referenced rows are checked first so a dangling
/// reference comes back as a 400 instead of a backend constraint failure.
#[instrument(skip_all, fields(user_id = req.user_id, item_id = req.item_id))]
pub async fn create_entry(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateEntryRequest>,
) -> Result<Json<EntryBody>, ApiError> {
    state
        .galaxy
        .get_user(pb::GetUserRequest { id: req.user_id })
        .await
        .map_err(|err| translate(Endpoint::CreateEntry, err))?;

    state
        .galaxy
        .get_item(pb::GetItemRequest { id: req.item_id })
        .await
        .map_err(|err| translate(Endpoint::CreateEntry, err))?;

    let result = state
        .galaxy
        .create_entry(pb::CreateEntryRequest {
            user_id: req.user_id,
            item_id: req.item_id,
            quantity: req.quantity,
            total: req.total,
        })
        .await
        .map_err(|err| translate(Endpoint::CreateEntry, err))?;

    let entry = result.entry.unwrap_or_default();
    info!(entry_id = entry.id, "entry created");
    Ok(Json(EntryBody::from_proto(entry)))
}

#[instrument(skip(state), fields(entry_id = id))]
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<EntryBody>, ApiError> {
    require_positive_id(id)?;

    let result = state
        .galaxy
        .get_entry(pb::GetEntryRequest { id })
        .await
        .map_err(|err| translate(Endpoint::GetEntry, err))?;

    Ok(Json(EntryBody::from_proto(result.entry.unwrap_or_default())))
}

#[derive(Debug, Deserialize)]
pub struct ListEntriesRequest {
    #[serde(default)]
    pub offset: i32,
    #[serde(default)]
    pub limit: i32,
}

#[derive(Debug, Serialize)]
pub struct ListEntriesResponse {
    pub entries: Vec<EntryBody>,
}

fn collect(entries: Vec<pb::Entry>) -> ListEntriesResponse {
    ListEntriesResponse {
        entries: entries.into_iter().map(EntryBody::from_proto).collect(),
    }
}

#[instrument(skip_all, fields(offset = req.offset, limit = req.limit))]
pub async fn list_entries(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ListEntriesRequest>,
) -> Result<Json<ListEntriesResponse>, ApiError> {
    let result = state
        .galaxy
        .list_entries(pb::ListEntriesRequest {
            offset: req.offset,
            limit: req.limit,
        })
        .await
        .map_err(|err| translate(Endpoint::ListEntries, err))?;

    Ok(Json(collect(result.entries)))
}

/// Filtered list requests use `user_id` on the wire, unlike the entry body.
#[derive(Debug, Deserialize)]
pub struct ListEntriesByUserRequest {
    pub user_id: i32,
    #[serde(default)]
    pub offset: i32,
    #[serde(default)]
    pub limit: i32,
}

#[instrument(skip_all, fields(user_id = req.user_id))]
pub async fn list_entries_by_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ListEntriesByUserRequest>,
) -> Result<Json<ListEntriesResponse>, ApiError> {
    let result = state
        .galaxy
        .list_entries_by_user(pb::ListEntriesByUserRequest {
            user_id: req.user_id,
            offset: req.offset,
            limit: req.limit,
        })
        .await
        .map_err(|err| translate(Endpoint::ListEntriesByUser, err))?;

    Ok(Json(collect(result.entries)))
}

#[derive(Debug, Deserialize)]
pub struct ListEntriesByItemRequest {
    pub item_id: i32,
    #[serde(default)]
    pub offset: i32,
    #[serde(default)]
    pub limit: i32,
}

#[instrument(skip_all, fields(item_id = req.item_id))]
pub async fn list_entries_by_item(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ListEntriesByItemRequest>,
) -> Result<Json<ListEntriesResponse>, ApiError> {
    let result = state
        .galaxy
        .list_entries_by_item(pb::ListEntriesByItemRequest {
            item_id: req.item_id,
            offset: req.offset,
            limit: req.limit,
        })
        .await
        .map_err(|err| translate(Endpoint::ListEntriesByItem, err))?;

    Ok(Json(collect(result.entries)))
}
