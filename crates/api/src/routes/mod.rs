pub mod about;
pub mod health;
pub mod restaurant;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /restaurants          list, create
/// /restaurants/{id}     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/restaurants", restaurant::router())
}
