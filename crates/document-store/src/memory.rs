use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    Document, DocumentId, Result, StoreError,
    document::{apply_set, document_id, ensure_id},
    store::{DeleteOutcome, DocumentStore, InsertOneOutcome, UpdateOutcome},
};

/// In-memory document store implementation.
///
/// Backs the API when no database is configured and is used throughout the
/// test suites. Behaves like the PostgreSQL implementation, including
/// insertion-ordered listing and duplicate identity detection.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
}

impl InMemoryDocumentStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of documents across all collections.
    pub async fn document_count(&self) -> usize {
        self.collections.read().await.values().map(Vec::len).sum()
    }

    /// Removes every document from every collection.
    pub async fn clear(&self) {
        self.collections.write().await.clear();
    }
}

fn matches_id(document: &Document, id: &DocumentId) -> bool {
    document_id(document).as_ref() == Some(id)
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<InsertOneOutcome> {
        let mut document = document;
        let id = ensure_id(&mut document)?;

        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection.to_string()).or_default();

        if documents.iter().any(|d| matches_id(d, &id)) {
            return Err(StoreError::DuplicateKey {
                collection: collection.to_string(),
                id,
            });
        }

        documents.push(document);
        Ok(InsertOneOutcome { inserted_id: id })
    }

    async fn find_one(&self, collection: &str, id: &DocumentId) -> Result<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|documents| documents.iter().find(|d| matches_id(d, id)))
            .cloned())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn update_one(
        &self,
        collection: &str,
        id: &DocumentId,
        set: Document,
    ) -> Result<UpdateOutcome> {
        let mut collections = self.collections.write().await;
        let Some(document) = collections
            .get_mut(collection)
            .and_then(|documents| documents.iter_mut().find(|d| matches_id(d, id)))
        else {
            return Ok(UpdateOutcome::default());
        };

        let modified = apply_set(document, &set)?;
        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }

    async fn delete_one(&self, collection: &str, id: &DocumentId) -> Result<DeleteOutcome> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(collection) else {
            return Ok(DeleteOutcome::default());
        };

        match documents.iter().position(|d| matches_id(d, id)) {
            Some(index) => {
                documents.remove(index);
                Ok(DeleteOutcome { deleted_count: 1 })
            }
            None => Ok(DeleteOutcome::default()),
        }
    }

    async fn count(&self, collection: &str) -> Result<u64> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).map_or(0, Vec::len) as u64)
    }
}
