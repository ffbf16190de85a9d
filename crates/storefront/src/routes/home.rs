//! Product listing page - the storefront's home.
//!
//! Owns the page state: the active category toggles, the search query,
//! the producer selection, and the cart summary shown in the header. Each
//! interaction is a plain GET with the full filter state in the query
//! string, so every render re-derives the visible subset from scratch.

use std::collections::HashSet;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use feira_astral_core::{Category, Product};

use crate::error::Result;
use crate::filter::ProductFilter;
use crate::filters;
use crate::models::session::load_cart;
use crate::state::AppState;

/// Listing page query parameters. Lists are comma-separated.
#[derive(Debug, Deserialize)]
pub struct ListingQuery {
    pub categorias: Option<String>,
    pub busca: Option<String>,
    pub produtores: Option<String>,
}

/// Category toggle display data for templates.
#[derive(Clone)]
pub struct CategoryToggleView {
    pub label: &'static str,
    pub image: String,
    pub active: bool,
    pub href: String,
}

/// Producer toggle display data for templates.
#[derive(Clone)]
pub struct ProducerToggleView {
    pub name: String,
    pub active: bool,
    pub href: String,
}

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i64,
    pub description: String,
    pub price: String,
    pub unit: String,
    pub image: String,
    pub producer_name: String,
    pub stock_quantity: u32,
    /// Quantity of this product already in the shopper's cart.
    pub quantity_in_cart: u32,
}

/// Listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub categories: Vec<CategoryToggleView>,
    pub producers: Vec<ProducerToggleView>,
    pub products: Vec<ProductCardView>,
    /// Number of visible products; the "nothing found" message renders
    /// exactly once when this is zero.
    pub product_count: usize,
    pub busca: String,
    /// Current list parameters, carried through the search form.
    pub categorias_param: String,
    pub produtores_param: String,
    pub cart_total: String,
    pub cart_count: u32,
}

/// Image filename for a category toggle.
const fn category_image(category: Category) -> &'static str {
    match category {
        Category::Frutas => "frutas.png",
        Category::Legumes => "legumes.png",
        Category::Verduras => "verduras.png",
        Category::Embalados => "embalados.png",
        Category::Doces => "doces-e-frutas.png",
        Category::Granja => "granja-e-pescados.png",
        Category::Outros => "outros.png",
    }
}

/// Build a listing URL for a filter state, omitting empty criteria.
fn listing_href(categories: &HashSet<Category>, busca: &str, producers: &HashSet<String>) -> String {
    let mut params = Vec::new();

    let active: Vec<&str> = Category::ALL
        .iter()
        .filter(|c| categories.contains(c))
        .map(|c| c.as_str())
        .collect();
    if !active.is_empty() {
        params.push(format!("categorias={}", active.join(",")));
    }

    if !busca.is_empty() {
        params.push(format!("busca={}", urlencoding::encode(busca)));
    }

    if !producers.is_empty() {
        let mut names: Vec<&str> = producers.iter().map(String::as_str).collect();
        names.sort_unstable();
        params.push(format!(
            "produtores={}",
            urlencoding::encode(&names.join(","))
        ));
    }

    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

/// Build the category toggles: each link flips one category and keeps the
/// rest of the filter state.
fn category_toggles(filter: &ProductFilter) -> Vec<CategoryToggleView> {
    Category::ALL
        .iter()
        .map(|&category| {
            let mut toggled = filter.categories().clone();
            if !toggled.remove(&category) {
                toggled.insert(category);
            }

            CategoryToggleView {
                label: category.label(),
                image: format!("/static/images/{}", category_image(category)),
                active: filter.categories().contains(&category),
                href: listing_href(&toggled, filter.query(), filter.producers()),
            }
        })
        .collect()
}

/// Build the producer toggles from the distinct producers in the catalog.
fn producer_toggles(catalog: &[Product], filter: &ProductFilter) -> Vec<ProducerToggleView> {
    let mut names: Vec<&str> = catalog
        .iter()
        .map(|product| product.producer.name.as_str())
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    names.sort_unstable();

    names
        .into_iter()
        .map(|name| {
            let mut toggled = filter.producers().clone();
            if !toggled.remove(name) {
                toggled.insert(name.to_string());
            }

            ProducerToggleView {
                name: name.to_string(),
                active: filter.producers().contains(name),
                href: listing_href(filter.categories(), filter.query(), &toggled),
            }
        })
        .collect()
}

/// Comma-joined active categories, for the search form's hidden field.
fn categorias_param(filter: &ProductFilter) -> String {
    Category::ALL
        .iter()
        .filter(|c| filter.categories().contains(c))
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Comma-joined selected producers, for the search form's hidden field.
fn produtores_param(filter: &ProductFilter) -> String {
    let mut names: Vec<&str> = filter.producers().iter().map(String::as_str).collect();
    names.sort_unstable();
    names.join(",")
}

/// Display the product listing page.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListingQuery>,
) -> Result<HomeTemplate> {
    let cart = load_cart(&session).await;

    // A catalog failure is logged, never shown: the page renders with
    // whatever is loaded, which on failure is nothing.
    let catalog = match state.marketplace().get_products().await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!("failed to load catalog: {e}");
            Vec::new()
        }
    };

    let filter = ProductFilter::from_query(
        query.categorias.as_deref(),
        query.busca.as_deref(),
        query.produtores.as_deref(),
    );

    let visible = filter.apply(&catalog);
    let product_count = visible.len();

    let products = visible
        .into_iter()
        .map(|product| ProductCardView {
            id: product.id.as_i64(),
            description: product.description.clone(),
            price: product.price.to_string(),
            unit: product.unit.clone(),
            image: product.image.clone(),
            producer_name: product.producer.name.clone(),
            stock_quantity: product.stock_quantity,
            quantity_in_cart: cart.quantity_for(product.id),
        })
        .collect();

    Ok(HomeTemplate {
        categories: category_toggles(&filter),
        producers: producer_toggles(&catalog, &filter),
        products,
        product_count,
        busca: filter.query().to_string(),
        categorias_param: categorias_param(&filter),
        produtores_param: produtores_param(&filter),
        cart_total: cart.total().to_string(),
        cart_count: cart.item_count(),
    })
}
