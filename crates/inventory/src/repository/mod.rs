//! Persistence gateways translating entity operations into document store calls.

mod category;
mod collection;
mod item;

pub use category::CategoryStore;
pub use collection::EntityCollection;
pub use item::ItemStore;

/// Names of the collections the gateways read and write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collections {
    pub categories: String,
    pub items: String,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            categories: "categories".to_string(),
            items: "items".to_string(),
        }
    }
}
