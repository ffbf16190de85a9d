//! Catalog entities: products and their producers.

use std::sync::Arc;

use super::category::Category;
use super::id::{ProducerId, ProductId};
use super::price::Price;

/// A vendor selling on the marketplace.
///
/// Producers are shared by reference: several products from the same
/// vendor point at one `Arc<Producer>`, deduplicated by id when the
/// catalog is materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Producer {
    pub id: ProducerId,
    pub name: String,
    pub available: bool,
    pub phone: String,
}

/// A catalog product.
///
/// Immutable once constructed from a catalog response. Never serialized:
/// decoding happens on the wire DTOs, and the cart captures the fields it
/// needs in its own lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub description: String,
    /// Unit price in reais.
    pub price: Price,
    /// Unit of measure, e.g. `kg` or `dz`.
    pub unit: String,
    pub stock_quantity: u32,
    pub category: Category,
    /// Image reference served by the backend.
    pub image: String,
    pub available: bool,
    pub producer: Arc<Producer>,
}
