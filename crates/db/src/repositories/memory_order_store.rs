//! In-process [`OrderStore`] for tests and database-free local runs.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use orders_core::types::DbId;
use tokio::sync::RwLock;

use crate::models::order::Order;
use crate::repositories::OrderStore;

/// Orders kept in a map keyed by id, with ids handed out from 1 upwards.
///
/// Ids are never reused, even after a delete.
#[derive(Debug)]
pub struct MemoryOrderStore {
    rows: RwLock<BTreeMap<DbId, Order>>,
    next_id: AtomicI64,
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn save(&self, mut order: Order) -> Result<Order, sqlx::Error> {
        let mut rows = self.rows.write().await;
        let id = match order.id {
            None => self.next_id.fetch_add(1, Ordering::Relaxed),
            Some(id) if rows.contains_key(&id) => id,
            Some(_) => return Err(sqlx::Error::RowNotFound),
        };
        order.id = Some(id);
        rows.insert(id, order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Order>, sqlx::Error> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.rows.read().await.contains_key(&id))
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error> {
        self.rows.write().await.remove(&id);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
