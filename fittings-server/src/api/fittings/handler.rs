//! Fittings API Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::{analytics, item};
use crate::utils::error::create_failed;
use crate::utils::{AppError, AppJson, AppPath, AppQuery, AppResult};
use shared::models::{AnalyticsSummary, DeleteResult, Item, ItemCreate, ItemUpdate};

const DEFAULT_LIMIT: u32 = 100;

/// Paging parameters; unsigned so negative values are rejected at extraction
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// GET /api/fittings?skip=&limit= - page of items in insertion order
pub async fn list(
    State(state): State<ServerState>,
    AppQuery(query): AppQuery<ListQuery>,
) -> AppResult<Json<Vec<Item>>> {
    let items = item::find_page(state.pool(), query.skip.into(), query.limit.into()).await?;
    Ok(Json(items))
}

/// GET /api/fittings/{qr_id}
pub async fn get_by_qr_id(
    State(state): State<ServerState>,
    AppPath(qr_id): AppPath<String>,
) -> AppResult<Json<Item>> {
    let found = item::find_by_qr_id(state.pool(), &qr_id)
        .await?
        .ok_or_else(|| AppError::item_not_found(&qr_id))?;
    Ok(Json(found))
}

/// POST /api/fittings - create an item
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ItemCreate>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let created = item::create(state.pool(), payload)
        .await
        .map_err(create_failed)?;

    tracing::info!(
        id = created.id,
        qr_id = %created.qr_id,
        fitting_type = %created.fitting_type,
        "Item created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/fittings/{qr_id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    AppPath(qr_id): AppPath<String>,
    AppJson(payload): AppJson<ItemUpdate>,
) -> AppResult<Json<Item>> {
    // Nothing to write; answer with the stored record
    if payload.is_empty() {
        return get_by_qr_id(State(state), AppPath(qr_id)).await;
    }

    let updated = item::update(state.pool(), &qr_id, payload).await?;

    tracing::info!(qr_id = %qr_id, status = %updated.status, "Item updated");

    Ok(Json(updated))
}

/// DELETE /api/fittings/{qr_id}
pub async fn delete(
    State(state): State<ServerState>,
    AppPath(qr_id): AppPath<String>,
) -> AppResult<Json<DeleteResult>> {
    item::delete(state.pool(), &qr_id).await?;

    tracing::info!(qr_id = %qr_id, "Item deleted");

    Ok(Json(DeleteResult {
        message: "Item deleted".to_string(),
    }))
}

/// GET /api/fittings/analytics/summary
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<AnalyticsSummary>> {
    let summary = analytics::summary(state.pool()).await?;
    Ok(Json(summary))
}
