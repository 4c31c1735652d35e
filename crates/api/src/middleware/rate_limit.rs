//! Fixed-window rate limiting keyed by client address.
//!
//! Every request passes through [`rate_limit`] ahead of authorization.
//! Windows are fixed, not sliding: a client's counter resets completely
//! when its window expires. State lives in an injected [`RateLimiter`]
//! rather than module globals so tests can drive it directly.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;
use crate::state::AppState;

/// Default request budget per client per window.
const DEFAULT_MAX_REQUESTS: u32 = 100;

/// Default window length in seconds (15 minutes).
const DEFAULT_WINDOW_SECS: u64 = 15 * 60;

/// Rate limiter configuration.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests allowed per client within one window.
    pub max_requests: u32,
    /// Window length.
    pub window: Duration,
}

impl RateLimitConfig {
    /// Load rate-limit configuration from environment variables.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `RATE_LIMIT_MAX_REQUESTS` | `100`   |
    /// | `RATE_LIMIT_WINDOW_SECS`  | `900`   |
    pub fn from_env() -> Self {
        let max_requests: u32 = std::env::var("RATE_LIMIT_MAX_REQUESTS")
            .unwrap_or_else(|_| DEFAULT_MAX_REQUESTS.to_string())
            .parse()
            .expect("RATE_LIMIT_MAX_REQUESTS must be a valid u32");

        let window_secs: u64 = std::env::var("RATE_LIMIT_WINDOW_SECS")
            .unwrap_or_else(|_| DEFAULT_WINDOW_SECS.to_string())
            .parse()
            .expect("RATE_LIMIT_WINDOW_SECS must be a valid u64");

        Self {
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }
}

/// A single client's request counter within the current window.
struct Window {
    count: u32,
    started_at: Instant,
}

/// Process-wide fixed-window rate limiter.
///
/// Counters are keyed by client address and guarded by a mutex so updates
/// are atomic under concurrent bursts.
pub struct RateLimiter {
    config: RateLimitConfig,
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Count one request for `key` at `now`.
    ///
    /// Returns whether the request is within the client's budget for the
    /// current window. Time is a parameter so tests can step through
    /// window boundaries without sleeping.
    pub fn check(&self, key: &str, now: Instant) -> bool {
        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");

        // Expired windows are evicted wholesale; the caller's entry is
        // recreated below if it was dropped.
        let window_len = self.config.window;
        windows.retain(|_, w| now.duration_since(w.started_at) < window_len);

        let window = windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            started_at: now,
        });

        window.count += 1;
        window.count <= self.config.max_requests
    }
}

/// Middleware applying the per-client request budget to every route,
/// ahead of authorization.
pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_key(&request);

    if state.rate_limiter.check(&key, Instant::now()) {
        next.run(request).await
    } else {
        tracing::warn!(client = %key, "Rate limit exceeded");
        AppError::RateLimitExceeded.into_response()
    }
}

/// Resolve the client identity used as the rate-limit key: the first
/// `x-forwarded-for` hop when behind a proxy, else the peer address.
fn client_key(request: &Request) -> String {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(ip) = forwarded
            .split(',')
            .next()
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
        {
            return ip.to_string();
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
