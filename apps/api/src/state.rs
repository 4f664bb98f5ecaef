use std::sync::Arc;

use sqlx::PgPool;

use crate::cache::Cache;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Injected TTL cache. Production wires in `MemoryCache`; tests substitute
    /// a deterministic fake through the same trait.
    pub cache: Arc<dyn Cache>,
    pub config: Config,
}
