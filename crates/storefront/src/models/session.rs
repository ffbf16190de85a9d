//! Session-stored cart state.
//!
//! The cart is persisted as one serialized string in a single session
//! slot: read on page load, written back on every mutation. A malformed
//! slot is treated as "no cart" - the shopper starts over with an empty
//! one instead of seeing an error.

use tower_sessions::Session;

use feira_astral_core::Cart;

use crate::error::Result;

/// Session keys for storefront data.
pub mod keys {
    /// Key for the serialized shopping cart.
    pub const CARRINHO: &str = "carrinho";
}

/// Load the cart from the session, failing closed on bad data.
pub async fn load_cart(session: &Session) -> Cart {
    let raw = match session.get::<String>(keys::CARRINHO).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("failed to read cart from session: {e}");
            None
        }
    };

    match raw {
        None => Cart::new(),
        Some(text) => Cart::from_json(&text).unwrap_or_else(|e| {
            tracing::warn!("discarding malformed persisted cart: {e}");
            Cart::new()
        }),
    }
}

/// Persist the cart back into its session slot.
///
/// # Errors
///
/// Returns an error if the cart cannot be serialized or the session
/// store rejects the write.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    let json = cart.to_json()?;
    session.insert(keys::CARRINHO, json).await?;
    Ok(())
}
