//! Item gateway.

use document_store::{DeleteOutcome, DocumentStore, UpdateOutcome};

use super::EntityCollection;
use crate::{DocumentId, Item, RepositoryError};

/// Gateway for the item collection.
pub struct ItemStore<S: DocumentStore> {
    items: EntityCollection<S, Item>,
}

impl<S: DocumentStore + Clone> Clone for ItemStore<S> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
        }
    }
}

impl<S: DocumentStore> ItemStore<S> {
    /// Creates an item gateway over the given collection.
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        Self {
            items: EntityCollection::new(store, collection),
        }
    }

    /// Returns the underlying collection gateway.
    pub fn collection(&self) -> &EntityCollection<S, Item> {
        &self.items
    }

    pub async fn create(&self, item: &Item) -> Result<DocumentId, RepositoryError> {
        self.items.create(item).await
    }

    pub async fn get_by_id(&self, id: &DocumentId) -> Result<Item, RepositoryError> {
        self.items.get_by_id(id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Item>, RepositoryError> {
        self.items.get_all().await
    }

    pub async fn update(&self, id: &DocumentId, item: &Item) -> Result<UpdateOutcome, RepositoryError> {
        self.items.update(id, item).await
    }

    pub async fn delete(&self, id: &DocumentId) -> Result<DeleteOutcome, RepositoryError> {
        self.items.delete(id).await
    }
}
