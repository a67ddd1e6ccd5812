//! Core entity trait.

use serde::{Serialize, de::DeserializeOwned};

/// A record persisted as one document in its own collection.
///
/// The serialized form exposes its identity as `id`; the document store
/// codec takes care of the store-native key.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    /// Returns the entity type name used in errors and logs.
    fn entity_type() -> &'static str;

    /// List fields the serialized form skips when empty.
    ///
    /// Updates write these as empty arrays when absent so a full update
    /// really replaces every field.
    fn list_fields() -> &'static [&'static str] {
        &[]
    }
}
