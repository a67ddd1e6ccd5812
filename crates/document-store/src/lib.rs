pub mod document;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use common::DocumentId;
pub use document::{Document, ID_FIELD, from_document, insert_missing_lists, to_document};
pub use error::{Result, StoreError};
pub use memory::InMemoryDocumentStore;
pub use postgres::PostgresDocumentStore;
pub use store::{DeleteOutcome, DocumentStore, DocumentStoreExt, InsertOneOutcome, UpdateOutcome};
