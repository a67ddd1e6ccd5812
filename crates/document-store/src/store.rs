use async_trait::async_trait;
use serde::Serialize;

use crate::{Document, DocumentId, Result};

/// Result of inserting a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertOneOutcome {
    /// Identity the document was stored under (generated when the input had none).
    pub inserted_id: DocumentId,
}

/// Result of a field-level update keyed by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UpdateOutcome {
    /// Number of documents whose identity matched (0 or 1).
    pub matched_count: u64,
    /// Number of matched documents whose content actually changed.
    pub modified_count: u64,
}

impl UpdateOutcome {
    /// Returns true if a document with the requested identity existed.
    pub fn matched(&self) -> bool {
        self.matched_count > 0
    }
}

/// Result of deleting a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DeleteOutcome {
    /// Number of documents removed (0 or 1).
    pub deleted_count: u64,
}

impl DeleteOutcome {
    /// Returns true if a document was actually removed.
    pub fn deleted(&self) -> bool {
        self.deleted_count > 0
    }
}

/// Core trait for document store implementations.
///
/// Documents live in named collections and are addressed by their
/// [`ID_FIELD`](crate::ID_FIELD). Every method is a single round-trip to
/// the backing store. All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a document as given.
    ///
    /// A missing or empty identity is replaced by a freshly generated one.
    /// Fails with `DuplicateKey` if the identity is already taken.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<InsertOneOutcome>;

    /// Finds the document with the given identity.
    ///
    /// Returns None if nothing matches.
    async fn find_one(&self, collection: &str, id: &DocumentId) -> Result<Option<Document>>;

    /// Returns every document in the collection, oldest insert first.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>>;

    /// Overwrites the given top-level fields of one document (`$set` semantics).
    ///
    /// Fields absent from `set` are left untouched. A non-matching identity
    /// is reported through the outcome, not as an error.
    async fn update_one(
        &self,
        collection: &str,
        id: &DocumentId,
        set: Document,
    ) -> Result<UpdateOutcome>;

    /// Deletes the document with the given identity.
    async fn delete_one(&self, collection: &str, id: &DocumentId) -> Result<DeleteOutcome>;

    /// Counts the documents in a collection.
    async fn count(&self, collection: &str) -> Result<u64>;
}

/// Extension trait providing convenience methods for document stores.
#[async_trait]
pub trait DocumentStoreExt: DocumentStore {
    /// Checks whether a collection holds no documents.
    async fn is_empty(&self, collection: &str) -> Result<bool> {
        Ok(self.count(collection).await? == 0)
    }
}

// Blanket implementation for all DocumentStore implementations
impl<T: DocumentStore + ?Sized> DocumentStoreExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_outcome_matched() {
        assert!(!UpdateOutcome::default().matched());
        let outcome = UpdateOutcome {
            matched_count: 1,
            modified_count: 0,
        };
        assert!(outcome.matched());
    }

    #[test]
    fn delete_outcome_deleted() {
        assert!(!DeleteOutcome::default().deleted());
        assert!(DeleteOutcome { deleted_count: 1 }.deleted());
    }
}
