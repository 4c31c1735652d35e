use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Routes for token issuance.
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-token", post(handlers::auth::generate_token))
}
