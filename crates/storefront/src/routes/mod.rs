//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                    - Product listing (category/search/producer filters)
//! GET  /health              - Health check
//!
//! # Cart (HTMX fragments)
//! GET  /carrinho            - Cart page
//! POST /carrinho/adicionar  - Add to cart (returns total fragment, triggers cart-updated)
//! GET  /carrinho/total      - Cart total badge (fragment)
//!
//! # Market
//! GET  /feira-fechada       - Page shown while the market is closed
//! ```
//!
//! Everything except `/feira-fechada` and `/health` sits behind the
//! market-open guard.

pub mod cart;
pub mod home;
pub mod market;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::market::CLOSED_PATH;
use crate::middleware::require_open_market;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/adicionar", post(cart::add))
        .route("/total", get(cart::total))
}

/// Create all routes for the storefront.
pub fn routes(state: &AppState) -> Router<AppState> {
    // Shopper-facing pages never render while the market is closed
    let shopper = Router::new()
        .route("/", get(home::index))
        .nest("/carrinho", cart_routes())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_open_market,
        ));

    Router::new()
        .merge(shopper)
        .route(CLOSED_PATH, get(market::closed))
}
