//! Application services sitting between handlers and the persistence layer.

pub mod order_service;

pub use order_service::OrderService;
