//! Item CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use document_store::DocumentStore;
use inventory::{DocumentId, Item, RepositoryError};

use super::{AppState, ResultResponse};
use crate::error::ApiError;

/// GET /items: list every item.
#[tracing::instrument(skip(state))]
pub async fn list<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.items.get_all().await?;
    Ok(Json(items))
}

/// GET /items/{id}: fetch one item.
#[tracing::instrument(skip(state))]
pub async fn get<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let item = state.items.get_by_id(&DocumentId::from(id)).await?;
    Ok(Json(item))
}

/// POST /items: create an item and echo it back with its identity.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(mut item) = payload?;
    item.id = state.items.create(&item).await?;

    tracing::info!(item_id = %item.id, sku = %item.sku, "item created");
    Ok(Json(item))
}

/// PUT /items/{id}: overwrite the fields of an existing item.
#[tracing::instrument(skip(state, payload))]
pub async fn update<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<Item>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(mut item) = payload?;
    let id = DocumentId::from(id);

    let outcome = state.items.update(&id, &item).await?;
    if !outcome.matched() {
        return Err(RepositoryError::NotFound { entity: "Item", id }.into());
    }

    item.id = id;
    Ok(Json(item))
}

/// DELETE /items/{id}: remove an item; a miss is not an error.
#[tracing::instrument(skip(state))]
pub async fn delete<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<ResultResponse>, ApiError> {
    let outcome = state.items.delete(&DocumentId::from(id)).await?;

    let result = if outcome.deleted() {
        "Item deleted"
    } else {
        "No item found to delete"
    };
    Ok(Json(ResultResponse::new(result)))
}
