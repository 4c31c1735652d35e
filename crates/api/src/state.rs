use std::sync::Arc;

use crate::config::ServerConfig;
use crate::middleware::rate_limit::RateLimiter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Handle to the webtoon database.
    pub db: mongodb::Database,
    /// Server configuration (JWT secret, rate limits, CORS origins).
    pub config: Arc<ServerConfig>,
    /// Per-client request counters, shared across all requests.
    pub rate_limiter: Arc<RateLimiter>,
}
