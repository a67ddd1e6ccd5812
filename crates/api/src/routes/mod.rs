//! HTTP route handlers.

pub mod categories;
pub mod health;
pub mod items;
pub mod metrics;

use document_store::DocumentStore;
use inventory::{CategoryStore, ItemStore};
use serde::Serialize;

/// Shared application state accessible from all handlers.
pub struct AppState<S: DocumentStore> {
    pub categories: CategoryStore<S>,
    pub items: ItemStore<S>,
}

/// Confirmation body returned by mutating endpoints that carry no entity.
#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: &'static str,
}

impl ResultResponse {
    pub fn new(result: &'static str) -> Self {
        Self { result }
    }
}
