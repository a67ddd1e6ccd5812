//! Category gateway.

use document_store::{DeleteOutcome, DocumentStore, UpdateOutcome};

use super::EntityCollection;
use crate::{Category, DocumentId, RepositoryError};

/// Gateway for the category collection.
///
/// Besides plain CRUD it supports appending a subcategory, which loads the
/// whole category, appends in memory and writes the document back. Two
/// concurrent appends to the same category can therefore lose one of the
/// children.
pub struct CategoryStore<S: DocumentStore> {
    categories: EntityCollection<S, Category>,
}

impl<S: DocumentStore + Clone> Clone for CategoryStore<S> {
    fn clone(&self) -> Self {
        Self {
            categories: self.categories.clone(),
        }
    }
}

impl<S: DocumentStore> CategoryStore<S> {
    /// Creates a category gateway over the given collection.
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        Self {
            categories: EntityCollection::new(store, collection),
        }
    }

    /// Returns the underlying collection gateway.
    pub fn collection(&self) -> &EntityCollection<S, Category> {
        &self.categories
    }

    pub async fn create(&self, category: &Category) -> Result<DocumentId, RepositoryError> {
        self.categories.create(category).await
    }

    pub async fn get_by_id(&self, id: &DocumentId) -> Result<Category, RepositoryError> {
        self.categories.get_by_id(id).await
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, RepositoryError> {
        self.categories.get_all().await
    }

    pub async fn update(
        &self,
        id: &DocumentId,
        category: &Category,
    ) -> Result<UpdateOutcome, RepositoryError> {
        self.categories.update(id, category).await
    }

    pub async fn delete(&self, id: &DocumentId) -> Result<DeleteOutcome, RepositoryError> {
        self.categories.delete(id).await
    }

    /// Appends `sub` to the children of the category `category_id`.
    ///
    /// A subcategory without an identity is given a fresh one so it can be
    /// addressed later. Fails with `DuplicateSubcategory` if a child with
    /// the same identity already exists, leaving the stored category as is.
    #[tracing::instrument(skip(self, sub), fields(collection = %self.categories.name()))]
    pub async fn add_sub_category(
        &self,
        category_id: &DocumentId,
        sub: Category,
    ) -> Result<(), RepositoryError> {
        let mut sub = sub;
        if sub.id.is_empty() {
            sub.id = DocumentId::generate();
        }

        let mut category = self.categories.get_by_id(category_id).await?;

        if category.has_child_category(&sub) {
            return Err(RepositoryError::DuplicateSubcategory {
                category_id: category_id.clone(),
                subcategory_id: sub.id,
            });
        }

        let subcategory_id = sub.id.clone();
        category.add_child_category(sub);

        let outcome = self.categories.update(category_id, &category).await?;
        if !outcome.matched() {
            // Deleted between the read and the write
            return Err(RepositoryError::NotFound {
                entity: "Category",
                id: category_id.clone(),
            });
        }

        metrics::counter!("subcategories_added_total").increment(1);
        tracing::info!(%category_id, %subcategory_id, "subcategory added");

        Ok(())
    }
}
