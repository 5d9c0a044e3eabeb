//! Handlers for the `/orders` resource.
//!
//! Each handler maps one service call onto a status code. Request bodies
//! arrive through [`ValidatedJson`] and ids through [`ValidatedPath`], so a
//! rejected request never reaches the service.

use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use orders_core::types::DbId;
use orders_db::models::order::{CreateOrder, UpdateOrder};

use crate::error::AppResult;
use crate::extract::{ValidatedJson, ValidatedPath};
use crate::state::AppState;

/// Path prefix the orders router is mounted at, used for `Location` headers.
pub const ORDERS_PATH: &str = "/api/orders";

/// POST /api/orders
///
/// Create a new order. Responds 201 with the order and a `Location` header.
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateOrder>,
) -> AppResult<impl IntoResponse> {
    let order = state.orders.create(input).await?;

    tracing::info!(order_id = order.id, status = %order.status, "Order created");

    let location = format!("{ORDERS_PATH}/{}", order.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(order)))
}

/// GET /api/orders
///
/// List all orders (possibly an empty array).
pub async fn list_orders(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let orders = state.orders.find_all().await?;

    Ok(Json(orders))
}

/// GET /api/orders/{id}
///
/// Retrieve a single order. Responds 404 with an empty body if absent.
pub async fn get_order(
    State(state): State<AppState>,
    ValidatedPath(order_id): ValidatedPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let order = state.orders.find_by_id(order_id).await?;

    match order {
        Some(o) => Ok(Json(o).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// PUT /api/orders/{id}
///
/// Replace notes, status, and total of an existing order.
pub async fn update_order(
    State(state): State<AppState>,
    ValidatedPath(order_id): ValidatedPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateOrder>,
) -> AppResult<impl IntoResponse> {
    let Some(order) = state.orders.update(order_id, input).await? else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    tracing::info!(order_id, status = %order.status, "Order updated");

    Ok(Json(order).into_response())
}

/// DELETE /api/orders/{id}
///
/// Delete an order. Responds 204 on success, 404 if it did not exist.
pub async fn delete_order(
    State(state): State<AppState>,
    ValidatedPath(order_id): ValidatedPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.orders.delete(order_id).await?;

    if !deleted {
        return Ok(StatusCode::NOT_FOUND);
    }

    tracing::info!(order_id, "Order deleted");

    Ok(StatusCode::NO_CONTENT)
}
