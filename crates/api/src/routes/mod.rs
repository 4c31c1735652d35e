pub mod auth;
pub mod health;
pub mod webtoon;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// POST   /generate-token    issue a token (public)
///
/// GET    /webtoons          list all (public)
/// POST   /webtoons          create (requires auth)
/// GET    /webtoons/{id}     get by id (public)
/// DELETE /webtoons/{id}     delete (requires auth)
/// ```
///
/// The rate limiter and the tracing/request-id layers are applied on top
/// of this tree in `main.rs`.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(auth::router()).merge(webtoon::router())
}
