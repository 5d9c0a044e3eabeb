use std::sync::Arc;

use orders_db::repositories::OrderStore;

use crate::config::ServerConfig;
use crate::services::OrderService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway, also probed by the health check.
    pub store: Arc<dyn OrderStore>,
    /// Order business rules over `store`.
    pub orders: OrderService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn OrderStore>, config: ServerConfig) -> Self {
        Self {
            orders: OrderService::new(Arc::clone(&store)),
            store,
            config: Arc::new(config),
        }
    }
}
