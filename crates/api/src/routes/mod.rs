pub mod health;
pub mod orders;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /orders                 list, create
/// /orders/{id}            get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/orders", orders::router())
}
