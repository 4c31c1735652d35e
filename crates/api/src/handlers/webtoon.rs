//! Handlers for the `/webtoons` resource.
//!
//! Reads are public; create and delete require authentication via
//! [`AuthUser`]. Each handler performs a single store operation and
//! serializes the result.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use validator::Validate;
use webtoon_core::error::CoreError;
use webtoon_core::validation::first_violation_message;
use webtoon_core::webtoon::CreateWebtoon;
use webtoon_db::models::webtoon::Webtoon;
use webtoon_db::repositories::WebtoonRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for a successful create.
#[derive(Debug, Serialize)]
pub struct CreateWebtoonResponse {
    /// Hex form of the id assigned by the storage layer.
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}

/// GET /webtoons
///
/// List every webtoon in the collection.
pub async fn list_webtoons(State(state): State<AppState>) -> AppResult<Json<Vec<Webtoon>>> {
    let webtoons = WebtoonRepo::list_all(&state.db).await?;

    Ok(Json(webtoons))
}

/// GET /webtoons/{id}
///
/// Fetch a single webtoon by id.
pub async fn get_webtoon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Webtoon>> {
    let oid = parse_webtoon_id(&id)?;

    let webtoon = WebtoonRepo::find_by_id(&state.db, oid)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Webtoon",
            id,
        })?;

    Ok(Json(webtoon))
}

/// POST /webtoons
///
/// Create a webtoon. The payload is validated before anything is written.
pub async fn create_webtoon(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateWebtoon>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(first_violation_message(&errors)))?;

    let inserted_id = WebtoonRepo::insert(&state.db, &input).await?;

    tracing::info!(webtoon_id = %inserted_id, user_id = auth.user_id, "Webtoon created");

    Ok((
        StatusCode::CREATED,
        Json(CreateWebtoonResponse {
            inserted_id: inserted_id.to_hex(),
        }),
    ))
}

/// DELETE /webtoons/{id}
///
/// Delete a webtoon by id.
pub async fn delete_webtoon(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let oid = parse_webtoon_id(&id)?;

    let deleted = WebtoonRepo::delete_by_id(&state.db, oid).await?;

    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Webtoon",
            id,
        }
        .into());
    }

    tracing::info!(webtoon_id = %oid, user_id = auth.user_id, "Webtoon deleted");

    Ok((StatusCode::OK, "Webtoon deleted successfully"))
}

/// Parse a path id into the store-native ObjectId form.
///
/// A string that is not a valid ObjectId is a client error, distinct from
/// a well-formed id that matches nothing.
fn parse_webtoon_id(id: &str) -> Result<ObjectId, CoreError> {
    ObjectId::parse_str(id).map_err(|_| CoreError::InvalidId(id.to_string()))
}
