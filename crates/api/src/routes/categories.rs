//! Category CRUD and subcategory endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use document_store::DocumentStore;
use inventory::{Category, DocumentId, RepositoryError};

use super::{AppState, ResultResponse};
use crate::error::ApiError;

/// GET /categories: list every category.
#[tracing::instrument(skip(state))]
pub async fn list<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.categories.get_all().await?;
    Ok(Json(categories))
}

/// GET /categories/{id}: fetch one category.
#[tracing::instrument(skip(state))]
pub async fn get<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Category>, ApiError> {
    let category = state.categories.get_by_id(&DocumentId::from(id)).await?;
    Ok(Json(category))
}

/// POST /categories: create a category and echo it back with its identity.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<Category>, JsonRejection>,
) -> Result<Json<Category>, ApiError> {
    let Json(mut category) = payload?;
    category.id = state.categories.create(&category).await?;

    tracing::info!(category_id = %category.id, "category created");
    Ok(Json(category))
}

/// PUT /categories/{id}: overwrite the fields of an existing category.
#[tracing::instrument(skip(state, payload))]
pub async fn update<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<Category>, JsonRejection>,
) -> Result<Json<Category>, ApiError> {
    let Json(mut category) = payload?;
    let id = DocumentId::from(id);

    let outcome = state.categories.update(&id, &category).await?;
    if !outcome.matched() {
        return Err(RepositoryError::NotFound {
            entity: "Category",
            id,
        }
        .into());
    }

    category.id = id;
    Ok(Json(category))
}

/// DELETE /categories/{id}: remove a category; a miss is not an error.
#[tracing::instrument(skip(state))]
pub async fn delete<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<ResultResponse>, ApiError> {
    let outcome = state.categories.delete(&DocumentId::from(id)).await?;

    let result = if outcome.deleted() {
        "Category deleted"
    } else {
        "No category found to delete"
    };
    Ok(Json(ResultResponse::new(result)))
}

/// POST /categories/{id}/subcategories: append a child category.
#[tracing::instrument(skip(state, payload))]
pub async fn add_sub_category<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<Category>, JsonRejection>,
) -> Result<(StatusCode, Json<ResultResponse>), ApiError> {
    let Json(sub) = payload?;
    state
        .categories
        .add_sub_category(&DocumentId::from(id), sub)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ResultResponse::new("Subcategory added successfully")),
    ))
}
