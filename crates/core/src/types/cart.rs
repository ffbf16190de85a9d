//! The client-held shopping cart.
//!
//! The cart lives in the shopper's session as a single serialized string
//! slot: read on page load, written back on every mutation. Items merge
//! by product id - adding a product twice increments its quantity, it
//! never duplicates rows.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::ProductId;
use super::price::Price;

/// Errors reading or writing the serialized cart.
#[derive(Debug, Error)]
pub enum CartError {
    /// The persisted payload is not a valid cart. Callers fall back to an
    /// empty cart rather than surfacing this to the shopper.
    #[error("malformed cart payload: {0}")]
    Parse(#[source] serde_json::Error),

    /// The cart could not be serialized.
    #[error("cart serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// One purchased line in the cart.
///
/// Carries the description and unit price captured at add time, so a
/// rehydrated cart can display and price itself before the catalog has
/// loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub description: String,
    pub unit_price: Price,
    pub quantity: u32,
}

impl CartItem {
    /// Create a cart line. Quantity is clamped to at least 1.
    #[must_use]
    pub fn new(
        product_id: ProductId,
        description: impl Into<String>,
        unit_price: Price,
        quantity: u32,
    ) -> Self {
        Self {
            product_id,
            description: description.into(),
            unit_price,
            quantity: quantity.max(1),
        }
    }

    /// Quantity times unit price for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// The shopper's cart: at most one line per product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a line to the cart.
    ///
    /// If a line for the same product already exists its quantity is
    /// increased by the incoming quantity, saturating at `u32::MAX` so
    /// client-supplied quantities can never wrap; otherwise the line is
    /// appended. Always succeeds.
    pub fn add_item(&mut self, item: CartItem) {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.product_id == item.product_id)
        {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => self.items.push(item),
        }
    }

    /// Sum of quantity times unit price over all lines. Zero when empty.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Quantity held for a product, or 0 when absent.
    #[must_use]
    pub fn quantity_for(&self, product_id: ProductId) -> u32 {
        self.items
            .iter()
            .find(|item| item.product_id == product_id)
            .map_or(0, |item| item.quantity)
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize the cart for the session slot.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Serialize`] if encoding fails.
    pub fn to_json(&self) -> Result<String, CartError> {
        serde_json::to_string(self).map_err(CartError::Serialize)
    }

    /// Rebuild a cart from a persisted payload.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Parse`] on malformed input. Callers treat
    /// that as "no cart" and start from an empty one.
    pub fn from_json(text: &str) -> Result<Self, CartError> {
        serde_json::from_str(text).map_err(CartError::Parse)
    }
}
