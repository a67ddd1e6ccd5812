//! HTTP API for the category and item inventory.
//!
//! Exposes CRUD endpoints over both collections plus subcategory appends,
//! with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use document_store::DocumentStore;
use inventory::{CategoryStore, Collections, ItemStore};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: DocumentStore + Clone + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/categories",
            get(routes::categories::list::<S>).post(routes::categories::create::<S>),
        )
        .route(
            "/categories/{id}",
            get(routes::categories::get::<S>)
                .put(routes::categories::update::<S>)
                .delete(routes::categories::delete::<S>),
        )
        .route(
            "/categories/{id}/subcategories",
            post(routes::categories::add_sub_category::<S>),
        )
        .route(
            "/items",
            get(routes::items::list::<S>).post(routes::items::create::<S>),
        )
        .route(
            "/items/{id}",
            get(routes::items::get::<S>)
                .put(routes::items::update::<S>)
                .delete(routes::items::delete::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Builds both gateways over one shared store handle.
pub fn create_state<S: DocumentStore + Clone>(store: S, collections: &Collections) -> AppState<S> {
    AppState {
        categories: CategoryStore::new(store.clone(), collections.categories.clone()),
        items: ItemStore::new(store, collections.items.clone()),
    }
}
