//! Marketplace backend API client.
//!
//! The backend is the source of truth for the catalog and for whether the
//! market is currently open. The storefront keeps no local copy: every
//! page load issues its own requests, exactly once each, with no retries.
//!
//! # Endpoints
//!
//! - `GET /produto` - the full product catalog as a JSON array
//! - `GET /feira/aberta` - HTTP 200 means the market is open

mod conversions;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::instrument;

use feira_astral_core::Product;

use crate::config::MarketplaceConfig;
use conversions::convert_catalog;
use types::ProductRecord;

/// Errors that can occur when talking to the marketplace backend.
#[derive(Debug, Error)]
pub enum MarketplaceError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("marketplace returned {0}")]
    Status(reqwest::StatusCode),

    /// JSON decoding failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the marketplace backend API.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct MarketplaceClient {
    inner: Arc<MarketplaceClientInner>,
}

struct MarketplaceClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl MarketplaceClient {
    /// Create a new marketplace client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed, which
    /// only happens when the TLS backend fails to initialize.
    #[must_use]
    pub fn new(config: &MarketplaceConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(MarketplaceClientInner {
                client,
                base_url: config.base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.inner.base_url)
    }

    /// Fetch the full product catalog.
    ///
    /// The response is decoded and converted as one batch: either the
    /// complete catalog is returned or an error is, never a partial list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend answers with a
    /// non-success status, or the body is not a valid catalog.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, MarketplaceError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("produto"))
            .send()
            .await?;

        let status = response.status();

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "catalog request returned non-success status"
            );
            return Err(MarketplaceError::Status(status));
        }

        let records: Vec<ProductRecord> = match serde_json::from_str(&body) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "failed to parse catalog response"
                );
                return Err(MarketplaceError::Parse(e));
            }
        };

        Ok(convert_catalog(records))
    }

    /// Whether the market is currently open.
    ///
    /// Open means exactly HTTP 200 from `GET /feira/aberta`. Any other
    /// status, and any transport failure, counts as closed; failures are
    /// logged but never surfaced to the shopper.
    #[instrument(skip(self))]
    pub async fn is_open(&self) -> bool {
        match self
            .inner
            .client
            .get(self.endpoint("feira/aberta"))
            .send()
            .await
        {
            Ok(response) => {
                let open = response.status() == reqwest::StatusCode::OK;
                if !open {
                    tracing::info!(status = %response.status(), "market reported closed");
                }
                open
            }
            Err(e) => {
                tracing::warn!("market-open check failed, treating as closed: {e}");
                false
            }
        }
    }
}
