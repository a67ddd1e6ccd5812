//! Document representation and the codec between API-facing JSON and
//! store-native documents.
//!
//! Entities expose their identity as `id`; stored documents carry it under
//! [`ID_FIELD`]. The rename is applied recursively so that embedded
//! documents (child categories, items inside a category) follow the same
//! layout as top-level ones.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{DocumentId, Result, StoreError};

/// A stored document: a JSON object keyed by field name.
pub type Document = Map<String, Value>;

/// Store-native name of the identity field.
pub const ID_FIELD: &str = "_id";

/// Name of the identity field in serialized entities.
const ENTITY_ID_FIELD: &str = "id";

/// Serializes an entity into a store document.
///
/// Empty identities are dropped so the store can assign one on insert.
pub fn to_document<T: Serialize>(entity: &T) -> Result<Document> {
    match serde_json::to_value(entity)? {
        Value::Object(map) => Ok(rename_identity(map, ENTITY_ID_FIELD, ID_FIELD)),
        other => Err(StoreError::InvalidDocument(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}

/// Deserializes a store document back into an entity.
pub fn from_document<T: DeserializeOwned>(document: Document) -> Result<T> {
    let map = rename_identity(document, ID_FIELD, ENTITY_ID_FIELD);
    Ok(serde_json::from_value(Value::Object(map))?)
}

/// Adds an empty array for each of `fields` the document does not carry.
///
/// Entities that omit empty lists from their JSON need this before a `$set`,
/// otherwise clearing a list leaves the stored one in place.
pub fn insert_missing_lists(document: &mut Document, fields: &[&str]) {
    for field in fields {
        document
            .entry(field.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
    }
}

/// Returns the identity stored in a document, if any.
pub fn document_id(document: &Document) -> Option<DocumentId> {
    document
        .get(ID_FIELD)
        .and_then(Value::as_str)
        .map(DocumentId::from)
}

/// Makes sure the document has an identity, generating one when it is
/// missing or empty. Returns the identity the document will be stored under.
pub(crate) fn ensure_id(document: &mut Document) -> Result<DocumentId> {
    match document.get(ID_FIELD) {
        Some(Value::String(id)) if !id.is_empty() => Ok(DocumentId::from(id.as_str())),
        Some(Value::String(_)) | Some(Value::Null) | None => {
            let id = DocumentId::generate();
            document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
            Ok(id)
        }
        Some(other) => Err(StoreError::InvalidDocument(format!(
            "{ID_FIELD} must be a string, got {other}"
        ))),
    }
}

/// Merges `set` into `target` field by field.
///
/// Returns whether any field actually changed. The identity may be repeated
/// with its current value but never changed.
pub(crate) fn apply_set(target: &mut Document, set: &Document) -> Result<bool> {
    if let Some(new_id) = set.get(ID_FIELD)
        && target.get(ID_FIELD) != Some(new_id)
    {
        return Err(StoreError::ImmutableField(ID_FIELD));
    }

    let mut modified = false;
    for (key, value) in set {
        if key == ID_FIELD {
            continue;
        }
        if target.get(key) != Some(value) {
            target.insert(key.clone(), value.clone());
            modified = true;
        }
    }
    Ok(modified)
}

/// Converts a raw JSON value read from storage into a document.
pub(crate) fn into_document(value: Value) -> Result<Document> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::InvalidDocument(format!(
            "stored body is not an object: {other}"
        ))),
    }
}

fn rename_identity(map: Document, from: &str, to: &str) -> Document {
    map.into_iter()
        .filter(|(key, value)| !(key == from && is_empty_id(value)))
        .map(|(key, value)| {
            let key = if key == from { to.to_string() } else { key };
            (key, rename_nested(value, from, to))
        })
        .collect()
}

fn rename_nested(value: Value, from: &str, to: &str) -> Value {
    match value {
        Value::Object(map) => Value::Object(rename_identity(map, from, to)),
        Value::Array(values) => Value::Array(
            values
                .into_iter()
                .map(|v| rename_nested(v, from, to))
                .collect(),
        ),
        other => other,
    }
}

fn is_empty_id(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
