use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Serialize};

/// A persisted webtoon document.
///
/// The id is assigned by the storage layer at insert time and serializes
/// to clients as a hex string under the store's `_id` key. Content fields
/// default when absent so documents inserted through other paths still
/// deserialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webtoon {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    pub id: ObjectId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub characters: Vec<String>,
}
