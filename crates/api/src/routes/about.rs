//! Static contact pages, mounted at root level under `/pages/about/bob`.
//!
//! The path is linked from published material and must stay stable.

use axum::routing::get;
use axum::Router;

use crate::handlers::about;
use crate::state::AppState;

/// Routes:
///
/// ```text
/// GET /pages/about/bob/phone    -> phone number (text/plain)
/// GET /pages/about/bob/address  -> postal address (text/plain)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pages/about/bob/phone", get(about::phone))
        .route("/pages/about/bob/address", get(about::address))
}
