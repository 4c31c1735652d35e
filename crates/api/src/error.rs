use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use webtoon_core::error::CoreError;

/// Fixed client-facing message for rate-limited requests.
pub const RATE_LIMIT_MESSAGE: &str = "Too many requests from this IP, please try again later.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce plain-text error responses;
/// store-layer detail never reaches the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `webtoon_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from the MongoDB driver.
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// No bearer token was presented on a protected route.
    #[error("Token is required")]
    MissingToken,

    /// The presented token failed verification.
    #[error("Invalid token")]
    InvalidToken,

    /// The client exhausted its request budget for the current window.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::InvalidId(_) => {
                    (StatusCode::BAD_REQUEST, "Invalid webtoon id".to_string())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::MissingToken => (StatusCode::FORBIDDEN, "Token is required".to_string()),
            AppError::InvalidToken => (StatusCode::FORBIDDEN, "Invalid token".to_string()),
            AppError::RateLimitExceeded => {
                (StatusCode::TOO_MANY_REQUESTS, RATE_LIMIT_MESSAGE.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
