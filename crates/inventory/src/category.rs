//! Category entity.
//!
//! Categories embed their children and items by value. Membership is keyed
//! by identity; nothing here checks the embedded copies against the
//! standalone item collection.

use serde::{Deserialize, Serialize};

use crate::{DocumentId, Entity, InventoryError, Item};

/// A category with nested subcategories and directly contained items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Category {
    pub id: DocumentId,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub child_categories: Vec<Category>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
}

impl Entity for Category {
    fn entity_type() -> &'static str {
        "Category"
    }

    fn list_fields() -> &'static [&'static str] {
        &["childCategories", "items"]
    }
}

impl Category {
    /// Creates an empty category.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Appends a child without checking for duplicates; see [`Self::has_child_category`].
    pub fn add_child_category(&mut self, child: Category) {
        self.child_categories.push(child);
    }

    pub fn add_child_categories(&mut self, children: impl IntoIterator<Item = Category>) {
        self.child_categories.extend(children);
    }

    /// Returns true if a child with the same identity is already present.
    pub fn has_child_category(&self, child: &Category) -> bool {
        self.child_categories.iter().any(|c| c.id == child.id)
    }

    /// Removes the first child with the given identity.
    pub fn remove_child_category(&mut self, child_id: &DocumentId) -> Result<(), InventoryError> {
        let index = self
            .child_categories
            .iter()
            .position(|c| &c.id == child_id)
            .ok_or_else(|| InventoryError::ChildCategoryNotFound(child_id.clone()))?;
        self.child_categories.remove(index);
        Ok(())
    }

    pub fn child_category_by_id(&self, child_id: &DocumentId) -> Result<&Category, InventoryError> {
        self.child_categories
            .iter()
            .find(|c| &c.id == child_id)
            .ok_or_else(|| InventoryError::ChildCategoryNotFound(child_id.clone()))
    }

    /// Appends an item without checking for duplicates; see [`Self::has_item`].
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn add_items(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items.extend(items);
    }

    /// Returns true if an item with the same identity is already present.
    pub fn has_item(&self, item: &Item) -> bool {
        self.items.iter().any(|i| i.id == item.id)
    }

    /// Removes the first item with the given identity.
    pub fn remove_item(&mut self, item_id: &DocumentId) -> Result<(), InventoryError> {
        let index = self
            .items
            .iter()
            .position(|i| &i.id == item_id)
            .ok_or_else(|| InventoryError::ItemNotFound(item_id.clone()))?;
        self.items.remove(index);
        Ok(())
    }

    /// Replaces the embedded item that shares `item`'s identity.
    pub fn update_item(&mut self, item: Item) -> Result<(), InventoryError> {
        let slot = self
            .items
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or_else(|| InventoryError::ItemNotFound(item.id.clone()))?;
        *slot = item;
        Ok(())
    }

    pub fn item_by_id(&self, item_id: &DocumentId) -> Result<&Item, InventoryError> {
        self.items
            .iter()
            .find(|i| &i.id == item_id)
            .ok_or_else(|| InventoryError::ItemNotFound(item_id.clone()))
    }
}
