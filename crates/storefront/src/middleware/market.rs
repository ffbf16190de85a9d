//! Market-open guard.
//!
//! The marketplace only sells while the weekly market is open. Every
//! shopper-facing page checks `GET /feira/aberta` on the backend before
//! rendering; when the market is closed, or the backend is unreachable,
//! the shopper is redirected to the closed page and the listing is never
//! rendered.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::state::AppState;

/// Path of the page shown while the market is closed.
pub const CLOSED_PATH: &str = "/feira-fechada";

/// Middleware that redirects to the closed page unless the market is open.
pub async fn require_open_market(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if state.marketplace().is_open().await {
        next.run(request).await
    } else {
        Redirect::to(CLOSED_PATH).into_response()
    }
}
