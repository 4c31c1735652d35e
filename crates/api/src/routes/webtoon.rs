//! Route definitions for the webtoon collection.

use axum::routing::get;
use axum::Router;

use crate::handlers::webtoon;
use crate::state::AppState;

/// Routes mounted at `/webtoons`.
///
/// ```text
/// GET    /webtoons         list_webtoons
/// POST   /webtoons         create_webtoon
/// GET    /webtoons/{id}    get_webtoon
/// DELETE /webtoons/{id}    delete_webtoon
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/webtoons",
            get(webtoon::list_webtoons).post(webtoon::create_webtoon),
        )
        .route(
            "/webtoons/{id}",
            get(webtoon::get_webtoon).delete(webtoon::delete_webtoon),
        )
}
