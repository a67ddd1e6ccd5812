//! Generic CRUD over one collection of entities.

use std::marker::PhantomData;

use document_store::{
    DeleteOutcome, DocumentStore, UpdateOutcome, from_document, insert_missing_lists, to_document,
};

use crate::{DocumentId, Entity, RepositoryError};

/// Maps entity-level CRUD onto a single collection of the document store.
///
/// Each method performs exactly one store round-trip. The store handle is
/// cloned in at construction; the collection name never changes afterwards.
pub struct EntityCollection<S: DocumentStore, T: Entity> {
    store: S,
    collection: String,
    _entity: PhantomData<fn() -> T>,
}

impl<S: DocumentStore + Clone, T: Entity> Clone for EntityCollection<S, T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            collection: self.collection.clone(),
            _entity: PhantomData,
        }
    }
}

impl<S: DocumentStore, T: Entity> EntityCollection<S, T> {
    /// Creates a collection gateway over `store`.
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
            _entity: PhantomData,
        }
    }

    /// Returns the name of the underlying collection.
    pub fn name(&self) -> &str {
        &self.collection
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Inserts the entity as given and returns its identity.
    #[tracing::instrument(skip(self, entity), fields(collection = %self.collection))]
    pub async fn create(&self, entity: &T) -> Result<DocumentId, RepositoryError> {
        let document = to_document(entity)?;
        let outcome = self.store.insert_one(&self.collection, document).await?;

        metrics::counter!("documents_inserted_total", "collection" => self.collection.clone())
            .increment(1);
        tracing::debug!(id = %outcome.inserted_id, "{} created", T::entity_type());

        Ok(outcome.inserted_id)
    }

    /// Loads the entity with the given identity.
    #[tracing::instrument(skip(self), fields(collection = %self.collection))]
    pub async fn get_by_id(&self, id: &DocumentId) -> Result<T, RepositoryError> {
        let document = self
            .store
            .find_one(&self.collection, id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: T::entity_type(),
                id: id.clone(),
            })?;

        Ok(from_document::<T>(document)?)
    }

    /// Loads every entity in the collection, oldest first.
    #[tracing::instrument(skip(self), fields(collection = %self.collection))]
    pub async fn get_all(&self) -> Result<Vec<T>, RepositoryError> {
        let documents = self.store.find_all(&self.collection).await?;
        let entities = documents
            .into_iter()
            .map(from_document::<T>)
            .collect::<Result<Vec<T>, _>>()?;
        Ok(entities)
    }

    /// Overwrites the stored fields with those of `entity`.
    ///
    /// Every field is written, including list fields the entity omits from
    /// its JSON when empty. A non-matching identity is reported in the outcome; callers decide
    /// whether that is an error.
    #[tracing::instrument(skip(self, entity), fields(collection = %self.collection))]
    pub async fn update(&self, id: &DocumentId, entity: &T) -> Result<UpdateOutcome, RepositoryError> {
        let mut set = to_document(entity)?;
        insert_missing_lists(&mut set, T::list_fields());
        let outcome = self.store.update_one(&self.collection, id, set).await?;

        if outcome.modified_count > 0 {
            metrics::counter!("documents_updated_total", "collection" => self.collection.clone())
                .increment(outcome.modified_count);
        }
        tracing::debug!(
            matched = outcome.matched_count,
            modified = outcome.modified_count,
            "{} update applied",
            T::entity_type()
        );

        Ok(outcome)
    }

    /// Deletes the entity; a zero count means nothing matched.
    #[tracing::instrument(skip(self), fields(collection = %self.collection))]
    pub async fn delete(&self, id: &DocumentId) -> Result<DeleteOutcome, RepositoryError> {
        let outcome = self.store.delete_one(&self.collection, id).await?;

        if outcome.deleted() {
            metrics::counter!("documents_deleted_total", "collection" => self.collection.clone())
                .increment(outcome.deleted_count);
        }

        Ok(outcome)
    }
}
