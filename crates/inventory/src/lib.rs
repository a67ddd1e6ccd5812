//! Inventory domain for the document-backed CRUD service.
//!
//! This crate provides:
//! - `Category` and `Item` entities with their invariant-preserving helpers
//! - the `Entity` trait tying an entity type to its stored form
//! - `CategoryStore` and `ItemStore`, the gateways translating entity
//!   operations into document store calls

pub mod category;
pub mod entity;
pub mod error;
pub mod item;
pub mod repository;

pub use category::Category;
pub use common::DocumentId;
pub use entity::Entity;
pub use error::{InventoryError, RepositoryError};
pub use item::{Item, ItemType};
pub use repository::{CategoryStore, Collections, EntityCollection, ItemStore};
