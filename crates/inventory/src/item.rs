//! Item entity.

use serde::{Deserialize, Serialize};

use crate::{DocumentId, Entity, InventoryError};

/// How an item is priced and sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemType {
    /// Sold by the unit.
    #[default]
    PerItem,

    /// Sold by size (area or volume).
    PerSize,

    /// Sold by weight.
    PerWeight,
}

impl ItemType {
    /// Returns the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::PerItem => "PerItem",
            ItemType::PerSize => "PerSize",
            ItemType::PerWeight => "PerWeight",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stocked item.
///
/// Every field is optional on input and falls back to its zero value, so a
/// request body only needs to carry the fields it cares about.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub id: DocumentId,
    pub name: String,
    pub sku: String,
    pub image: String,
    pub price: f64,
    pub purchase_price: f64,
    pub weight: f64,
    pub quantity: u32,
    pub item_type: ItemType,
    pub height: f64,
    pub width: f64,
    pub length: f64,
}

impl Entity for Item {
    fn entity_type() -> &'static str {
        "Item"
    }
}

impl Item {
    /// Creates an item with a name, SKU, price and stock; everything else zeroed.
    pub fn new(name: impl Into<String>, sku: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            price,
            quantity,
            ..Self::default()
        }
    }

    /// Returns true if at least one unit is in stock.
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Removes `amount` units from stock.
    ///
    /// Leaves the quantity untouched and fails if fewer than `amount` units
    /// are available.
    pub fn deduct_quantity(&mut self, amount: u32) -> Result<(), InventoryError> {
        if amount > self.quantity {
            return Err(InventoryError::InsufficientQuantity {
                requested: amount,
                available: self.quantity,
            });
        }
        self.quantity -= amount;
        Ok(())
    }

    /// Adds `amount` units to stock.
    pub fn add_quantity(&mut self, amount: u32) {
        self.quantity = self.quantity.saturating_add(amount);
    }

    pub fn update_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn update_purchase_price(&mut self, price: f64) {
        self.purchase_price = price;
    }

    /// Copies every field except the identity from `other`.
    pub fn update_from(&mut self, other: &Item) {
        self.name.clone_from(&other.name);
        self.sku.clone_from(&other.sku);
        self.image.clone_from(&other.image);
        self.price = other.price;
        self.purchase_price = other.purchase_price;
        self.weight = other.weight;
        self.quantity = other.quantity;
        self.item_type = other.item_type;
        self.height = other.height;
        self.width = other.width;
        self.length = other.length;
    }

    /// Price per unit of area (height × width).
    pub fn price_per_area(&self) -> Result<f64, InventoryError> {
        if self.height == 0.0 || self.width == 0.0 {
            return Err(InventoryError::InvalidDimensions);
        }
        Ok(self.price / (self.height * self.width))
    }

    /// Height × width × length; zero if any dimension is unset.
    pub fn volume(&self) -> f64 {
        self.height * self.width * self.length
    }

    /// Price per unit of volume, or 0 when the volume is 0.
    pub fn price_per_volume(&self) -> f64 {
        per_volume(self.price, self.volume())
    }

    /// Weight per unit of volume, or 0 when the volume is 0.
    pub fn weight_per_volume(&self) -> f64 {
        per_volume(self.weight, self.volume())
    }

    pub fn update_dimensions(&mut self, height: f64, width: f64, length: f64) {
        self.height = height;
        self.width = width;
        self.length = length;
    }
}

fn per_volume(value: f64, volume: f64) -> f64 {
    if volume == 0.0 { 0.0 } else { value / volume }
}
