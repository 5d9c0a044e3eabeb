//! Repository layer.
//!
//! [`OrderRepo`] is a zero-sized struct of async SQL calls that accept
//! `&PgPool` as the first argument. [`OrderStore`] is the gateway the service
//! layer talks to; [`PgOrderStore`] adapts `OrderRepo` to it and
//! [`MemoryOrderStore`] keeps rows in process.

pub mod memory_order_store;
pub mod order_repo;
pub mod order_store;

pub use memory_order_store::MemoryOrderStore;
pub use order_repo::OrderRepo;
pub use order_store::{OrderStore, PgOrderStore};
