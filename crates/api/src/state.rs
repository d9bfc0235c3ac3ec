use std::sync::Arc;

use sava_db::Store;

use crate::config::ServerConfig;
use crate::revalidation::Revalidator;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Persistence (PostgreSQL in production).
    pub store: Arc<dyn Store>,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Side channel into the frontend's page cache.
    pub revalidator: Arc<dyn Revalidator>,
}
