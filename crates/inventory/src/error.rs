//! Domain and gateway error types.

use document_store::StoreError;
use thiserror::Error;

use crate::DocumentId;

/// Errors raised by the in-memory entity helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    /// A deduction asked for more than is in stock.
    #[error("Insufficient quantity: requested {requested}, available {available}")]
    InsufficientQuantity { requested: u32, available: u32 },

    /// Height or width is zero, so no area can be computed.
    #[error("Invalid dimensions: height and width must be non-zero")]
    InvalidDimensions,

    /// No item with this identity in the category.
    #[error("Item not found: {0}")]
    ItemNotFound(DocumentId),

    /// No child category with this identity in the category.
    #[error("Child category not found: {0}")]
    ChildCategoryNotFound(DocumentId),
}

/// Errors returned by the persistence gateways.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No document matched the identity.
    #[error("{entity} not found: {id}")]
    NotFound {
        entity: &'static str,
        id: DocumentId,
    },

    /// The category already has a child with the subcategory's identity.
    #[error("Subcategory {subcategory_id} already exists in category {category_id}")]
    DuplicateSubcategory {
        category_id: DocumentId,
        subcategory_id: DocumentId,
    },

    /// The document store failed, or a stored document no longer decodes.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
