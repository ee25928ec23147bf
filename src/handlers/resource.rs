//! Resource CRUD handlers: create, read, update, delete, list.

use crate::error::AppError;
use crate::model::Resource;
use crate::schema::{Deleted, ResourceCreate, ResourceUpdate};
use crate::service::ResourceService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Resource>>, AppError> {
    let resources = ResourceService::list(&state.pool).await?;
    Ok(Json(resources))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ResourceCreate>,
) -> Result<Json<Resource>, AppError> {
    let resource = ResourceService::create(&state.pool, &payload).await?;
    Ok(Json(resource))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Resource>, AppError> {
    let resource = ResourceService::get(&state.pool, id).await?;
    Ok(Json(resource))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<ResourceUpdate>,
) -> Result<Json<Resource>, AppError> {
    let resource = ResourceService::update(&state.pool, id, &patch).await?;
    Ok(Json(resource))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Deleted>, AppError> {
    ResourceService::delete(&state.pool, id).await?;
    Ok(Json(Deleted {
        detail: format!("Resource {} deleted", id),
    }))
}
