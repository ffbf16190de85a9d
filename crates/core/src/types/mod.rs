//! Domain types for the Feira Astral marketplace.

pub mod cart;
pub mod category;
pub mod id;
pub mod price;
pub mod product;

pub use cart::{Cart, CartError, CartItem};
pub use category::Category;
pub use id::{ProducerId, ProductId};
pub use price::Price;
pub use product::{Producer, Product};
