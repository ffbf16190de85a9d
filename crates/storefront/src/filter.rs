//! Product filtering for the listing page.
//!
//! Three independent criteria, AND-combined, each permissive when empty:
//! active categories, a free-text search over the description, and
//! selected producer names. The filter is evaluated fresh on every render
//! against the in-memory catalog; there is no index.

use std::collections::HashSet;

use feira_astral_core::{Category, Product};

/// The shopper's current filter selection.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    categories: HashSet<Category>,
    query: String,
    producers: HashSet<String>,
}

impl ProductFilter {
    /// Build a filter from the listing page's query-string parameters.
    ///
    /// `categorias` and `produtores` are comma-separated lists; category
    /// values that are not part of the closed enumeration are ignored.
    #[must_use]
    pub fn from_query(
        categorias: Option<&str>,
        busca: Option<&str>,
        produtores: Option<&str>,
    ) -> Self {
        let categories = categorias
            .unwrap_or_default()
            .split(',')
            .filter_map(|value| value.trim().parse::<Category>().ok())
            .collect();

        let producers = produtores
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            categories,
            query: busca.unwrap_or_default().trim().to_string(),
            producers,
        }
    }

    /// The active category set (empty means no category filter).
    #[must_use]
    pub const fn categories(&self) -> &HashSet<Category> {
        &self.categories
    }

    /// The free-text search query (empty means no text filter).
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The selected producer names (empty means no producer filter).
    #[must_use]
    pub const fn producers(&self) -> &HashSet<String> {
        &self.producers
    }

    /// Whether a product passes all three criteria.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let category_ok =
            self.categories.is_empty() || self.categories.contains(&product.category);

        let query_ok = self.query.is_empty()
            || product
                .description
                .to_lowercase()
                .contains(&self.query.to_lowercase());

        let producer_ok =
            self.producers.is_empty() || self.producers.contains(&product.producer.name);

        category_ok && query_ok && producer_ok
    }

    /// The visible subset of the catalog, in catalog order.
    #[must_use]
    pub fn apply<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        catalog.iter().filter(|p| self.matches(p)).collect()
    }
}
