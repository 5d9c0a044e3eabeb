//! Order CRUD service.
//!
//! The only place order business rules live. Handlers hand it already
//! validated DTOs; it turns them into entity mutations against the
//! [`OrderStore`] and maps persisted rows back to [`OrderResponse`].
//!
//! A missing order is a normal outcome here: lookups return `None` and
//! deletes return `false`. Only store failures surface as errors.

use std::sync::Arc;

use orders_core::types::DbId;
use orders_db::models::order::{CreateOrder, Order, OrderResponse, UpdateOrder};
use orders_db::repositories::OrderStore;

use crate::error::AppResult;

#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Persist a new order and return it with its generated id.
    pub async fn create(&self, req: CreateOrder) -> AppResult<OrderResponse> {
        let saved = self.store.save(Order::from(req)).await?;
        to_response(saved)
    }

    /// All orders, possibly none.
    pub async fn find_all(&self) -> AppResult<Vec<OrderResponse>> {
        self.store
            .find_all()
            .await?
            .into_iter()
            .map(to_response)
            .collect()
    }

    pub async fn find_by_id(&self, id: DbId) -> AppResult<Option<OrderResponse>> {
        self.store
            .find_by_id(id)
            .await?
            .map(to_response)
            .transpose()
    }

    /// Replace notes, status, and total of an existing order.
    ///
    /// Returns `None` without writing anything when `id` does not exist.
    pub async fn update(&self, id: DbId, req: UpdateOrder) -> AppResult<Option<OrderResponse>> {
        let Some(mut existing) = self.store.find_by_id(id).await? else {
            return Ok(None);
        };
        existing.apply_update(req);
        let saved = self.store.save(existing).await?;
        to_response(saved).map(Some)
    }

    /// Delete an order. Returns `false` if it did not exist.
    pub async fn delete(&self, id: DbId) -> AppResult<bool> {
        if !self.store.exists_by_id(id).await? {
            return Ok(false);
        }
        self.store.delete_by_id(id).await?;
        Ok(true)
    }
}

fn to_response(order: Order) -> AppResult<OrderResponse> {
    Ok(OrderResponse::try_from(order)?)
}
