use thiserror::Error;

use crate::DocumentId;

/// Errors that can occur when interacting with the document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A document with the same identity already exists in the collection.
    #[error("Duplicate key: document {id} already exists in collection {collection}")]
    DuplicateKey { collection: String, id: DocumentId },

    /// An update tried to change a field that cannot change after insert.
    #[error("Cannot modify immutable field '{0}'")]
    ImmutableField(&'static str),

    /// The document is not a JSON object or carries a malformed identity.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A serialization/deserialization error occurred.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for document store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
