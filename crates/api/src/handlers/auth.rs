//! Handler for the token issuance endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::auth::jwt::issue_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Fixed identity issued to every caller; there is no user store.
const TOKEN_SUBJECT_ID: i64 = 1;
const TOKEN_SUBJECT_USERNAME: &str = "testUser";

/// Response body for `POST /generate-token`.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /generate-token
///
/// Issue a signed, time-limited token for the fixed test identity.
pub async fn generate_token(State(state): State<AppState>) -> AppResult<Json<TokenResponse>> {
    let token = issue_token(TOKEN_SUBJECT_ID, TOKEN_SUBJECT_USERNAME, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token signing failed: {e}")))?;

    Ok(Json(TokenResponse { token }))
}
