//! Item catalog handlers. Items are shared resources, not scoped to the
//! calling user, so these handlers take no ownership decision.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::{AppState, JsonBody, require_positive_id};
use crate::error::{ApiError, Endpoint, translate};
use crate::patch::Patch;
use crate::pb;

#[derive(Debug, Serialize)]
pub struct ItemBody {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: i32,
}

impl ItemBody {
    fn from_proto(item: pb::Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub price: i32,
}

#[instrument(skip_all, fields(name = %req.name))]
pub async fn create_item(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateItemRequest>,
) -> Result<Json<ItemBody>, ApiError> {
    let result = state
        .galaxy
        .create_item(pb::CreateItemRequest {
            name: req.name,
            quantity: req.quantity,
            price: req.price,
        })
        .await
        .map_err(|err| translate(Endpoint::CreateItem, err))?;

    let item = result.item.unwrap_or_default();
    info!(item_id = item.id, "item created");
    Ok(Json(ItemBody::from_proto(item)))
}

#[instrument(skip(state), fields(item_id = id))]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ItemBody>, ApiError> {
    require_positive_id(id)?;

    let result = state
        .galaxy
        .get_item(pb::GetItemRequest { id })
        .await
        .map_err(|err| translate(Endpoint::GetItem, err))?;

    Ok(Json(ItemBody::from_proto(result.item.unwrap_or_default())))
}

#[derive(Debug, Deserialize)]
pub struct ListItemsRequest {
    #[serde(default)]
    pub offset: i32,
    #[serde(default)]
    pub limit: i32,
}

#[derive(Debug, Serialize)]
pub struct ListItemsResponse {
    pub items: Vec<ItemBody>,
}

/// Pagination is forwarded untouched and the backend ordering is preserved.
#[instrument(skip_all, fields(offset = req.offset, limit = req.limit))]
pub async fn list_items(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ListItemsRequest>,
) -> Result<Json<ListItemsResponse>, ApiError> {
    let result = state
        .galaxy
        .list_items(pb::ListItemsRequest {
            offset: req.offset,
            limit: req.limit,
        })
        .await
        .map_err(|err| translate(Endpoint::ListItems, err))?;

    Ok(Json(ListItemsResponse {
        items: result.items.into_iter().map(ItemBody::from_proto).collect(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub id: i32,
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub quantity: Patch<i32>,
    #[serde(default)]
    pub price: Patch<i32>,
}

/// Partial update: absent and null fields stay untouched, zero values are
/// applied.
#[instrument(skip_all, fields(item_id = req.id))]
pub async fn update_item(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UpdateItemRequest>,
) -> Result<Json<ItemBody>, ApiError> {
    let result = state
        .galaxy
        .update_item(pb::UpdateItemRequest {
            id: req.id,
            name: req.name.into_option(),
            quantity: req.quantity.into_option(),
            price: req.price.into_option(),
        })
        .await
        .map_err(|err| translate(Endpoint::UpdateItem, err))?;

    info!("item updated");
    Ok(Json(ItemBody::from_proto(result.item.unwrap_or_default())))
}

#[instrument(skip(state), fields(item_id = id))]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    require_positive_id(id)?;

    state
        .galaxy
        .delete_item(pb::DeleteItemRequest { id })
        .await
        .map_err(|err| translate(Endpoint::DeleteItem, err))?;

    info!("item deleted");
    Ok(Json(serde_json::Value::Null))
}
