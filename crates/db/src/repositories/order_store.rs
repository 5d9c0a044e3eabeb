//! The persistence gateway used by the service layer.

use async_trait::async_trait;
use orders_core::types::DbId;

use crate::models::order::Order;
use crate::repositories::OrderRepo;
use crate::DbPool;

/// Save/find/delete-by-id access to stored orders.
///
/// Each call is independently atomic. Absence is reported through `Option`
/// or `bool`, never as an error.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert when `order.id` is `None` (assigning a fresh id), otherwise
    /// overwrite the row with that id. Returns the persisted order.
    ///
    /// Saving an order whose id matches no row fails with
    /// [`sqlx::Error::RowNotFound`].
    async fn save(&self, order: Order) -> Result<Order, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Order>, sqlx::Error>;

    /// Every stored order. Callers must not rely on the order of the result.
    async fn find_all(&self) -> Result<Vec<Order>, sqlx::Error>;

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Remove the row with the given id. Deleting a missing id is a no-op.
    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

/// [`OrderStore`] backed by the `orders` table in PostgreSQL.
#[derive(Clone)]
pub struct PgOrderStore {
    pool: DbPool,
}

impl PgOrderStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn save(&self, order: Order) -> Result<Order, sqlx::Error> {
        match order.id {
            None => OrderRepo::insert(&self.pool, &order).await,
            Some(id) => OrderRepo::update(&self.pool, id, &order)
                .await?
                .ok_or(sqlx::Error::RowNotFound),
        }
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        OrderRepo::find_by_id(&self.pool, id).await
    }

    async fn find_all(&self) -> Result<Vec<Order>, sqlx::Error> {
        OrderRepo::list(&self.pool).await
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        OrderRepo::exists(&self.pool, id).await
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error> {
        let deleted = OrderRepo::delete(&self.pool, id).await?;
        if !deleted {
            tracing::debug!(order_id = id, "Delete matched no order row");
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
