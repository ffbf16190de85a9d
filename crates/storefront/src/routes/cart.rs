//! Cart route handlers.
//!
//! Cart mutations use HTMX fragments so the page keeps its filter state.
//! The cart itself lives in the session as a single serialized slot; every
//! mutation rewrites the slot and recomputes the total.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use feira_astral_core::{Cart, CartItem, ProductId};

use crate::filters;
use crate::models::session::{load_cart, save_cart};
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub description: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .items()
                .iter()
                .map(|item| CartItemView {
                    description: item.description.clone(),
                    quantity: item.quantity,
                    unit_price: item.unit_price.to_string(),
                    line_total: item.line_total().to_string(),
                })
                .collect(),
            total: cart.total().to_string(),
            item_count: cart.item_count(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub produto_id: i64,
    pub quantidade: Option<u32>,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "carrinho/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart total badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_total.html")]
pub struct CartTotalTemplate {
    pub total: String,
    pub count: u32,
}

/// Display the cart page.
///
/// Needs no backend data: the cart prices itself from the unit prices
/// captured when each item was added.
#[instrument(skip(session))]
pub async fn show(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CartShowTemplate {
        cart: CartView::from(&cart),
    }
}

/// Add an item to the cart (HTMX).
///
/// Looks the product up in a fresh catalog fetch, merges it into the
/// session cart (same product id increments quantity), re-persists the
/// slot, and returns the updated total fragment.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let quantity = form.quantidade.unwrap_or(1);

    let catalog = match state.marketplace().get_products().await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("failed to load catalog for add-to-cart: {e}");
            return (
                StatusCode::BAD_GATEWAY,
                Html("<span class=\"erro\">Erro ao adicionar ao carrinho</span>"),
            )
                .into_response();
        }
    };

    let product_id = ProductId::new(form.produto_id);
    let Some(product) = catalog.into_iter().find(|p| p.id == product_id) else {
        return (
            StatusCode::NOT_FOUND,
            Html("<span class=\"erro\">Produto não encontrado</span>"),
        )
            .into_response();
    };

    let mut cart = load_cart(&session).await;
    cart.add_item(CartItem::new(
        product.id,
        product.description,
        product.price,
        quantity,
    ));

    if let Err(e) = save_cart(&session, &cart).await {
        tracing::error!("failed to persist cart: {e}");
    }

    // Return the total badge with an HTMX trigger to update other elements
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartTotalTemplate {
            total: cart.total().to_string(),
            count: cart.item_count(),
        },
    )
        .into_response()
}

/// Get the cart total badge (HTMX).
#[instrument(skip(session))]
pub async fn total(session: Session) -> impl IntoResponse {
    let cart = load_cart(&session).await;

    CartTotalTemplate {
        total: cart.total().to_string(),
        count: cart.item_count(),
    }
}
