//! The webtoon domain payload and its validation rules.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for creating a webtoon.
///
/// Validation runs before anything is written; nothing is enforced on
/// documents read back out of the store. Fields default when absent so a
/// missing field fails the length constraints rather than payload
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWebtoon {
    #[serde(default)]
    #[validate(length(min = 2, message = "title must be at least 2 characters long"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 10, message = "description must be at least 10 characters long"))]
    pub description: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "characters must contain at least one entry"))]
    pub characters: Vec<String>,
}
