//! Market status pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

use crate::filters;

/// Page shown while the market is closed.
#[derive(Template, WebTemplate)]
#[template(path = "feira_fechada.html")]
pub struct MarketClosedTemplate;

/// Display the "market closed" page.
#[instrument]
pub async fn closed() -> impl IntoResponse {
    MarketClosedTemplate
}
