//! Route definitions for the `/restaurants` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::restaurant;
use crate::state::AppState;

/// Routes mounted at `/restaurants`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(restaurant::list).post(restaurant::create))
        .route(
            "/{id}",
            get(restaurant::get_by_id)
                .put(restaurant::update)
                .delete(restaurant::delete),
        )
}
