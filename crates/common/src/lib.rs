//! Types shared by the document store, the inventory domain and the API.

mod types;

pub use types::DocumentId;
