use crate::auth::jwt::JwtConfig;
use crate::middleware::rate_limit::RateLimitConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Per-client request budget configuration.
    pub rate_limit: RateLimitConfig,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var        | Default                    |
    /// |----------------|----------------------------|
    /// | `HOST`         | `0.0.0.0`                  |
    /// | `PORT`         | `4000`                     |
    /// | `CORS_ORIGINS` | `http://localhost:5173`    |
    ///
    /// See [`JwtConfig::from_env`] and [`RateLimitConfig::from_env`] for
    /// the nested tables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let rate_limit = RateLimitConfig::from_env();
        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            rate_limit,
            jwt,
        }
    }
}
