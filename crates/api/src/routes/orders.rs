//! Route definitions for the order resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Order routes mounted at `/orders`.
///
/// ```text
/// GET    /       -> list_orders
/// POST   /       -> create_order
/// GET    /{id}   -> get_order
/// PUT    /{id}   -> update_order
/// DELETE /{id}   -> delete_order
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list_orders).post(orders::create_order))
        .route(
            "/{id}",
            get(orders::get_order)
                .put(orders::update_order)
                .delete(orders::delete_order),
        )
}
