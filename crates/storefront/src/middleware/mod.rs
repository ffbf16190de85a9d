//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)
//! 4. Session layer (tower-sessions, in-memory store)
//! 5. Market-open guard (shopper pages only)

pub mod market;
pub mod request_id;
pub mod session;

pub use market::require_open_market;
pub use request_id::request_id_middleware;
pub use session::create_session_layer;
