//! Repository for the `orders` table.

use sqlx::PgPool;
use orders_core::types::DbId;

use crate::models::order::Order;

/// Column list for `orders` queries.
const COLUMNS: &str = "id, notes, status, total";

/// Provides data access for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new order, letting the database assign its id.
    pub async fn insert(pool: &PgPool, order: &Order) -> Result<Order, sqlx::Error> {
        let query = format!(
            "INSERT INTO orders (notes, status, total) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(&order.notes)
            .bind(&order.status)
            .bind(order.total)
            .fetch_one(pool)
            .await
    }

    /// Overwrite notes, status, and total of the row with the given id.
    ///
    /// Returns `None` if no row matched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        order: &Order,
    ) -> Result<Option<Order>, sqlx::Error> {
        let query = format!(
            "UPDATE orders SET notes = $2, status = $3, total = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .bind(&order.notes)
            .bind(&order.status)
            .bind(order.total)
            .fetch_optional(pool)
            .await
    }

    /// Find an order by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every order, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders ORDER BY id");
        sqlx::query_as::<_, Order>(&query).fetch_all(pool).await
    }

    /// Check whether a row with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM orders WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Delete an order by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
