//! Repository for the `webtoons` collection.
//!
//! A thin operation set over the document store: list, point lookup,
//! insert, and delete-by-id. No transactional guarantees beyond the single
//! underlying operation.

use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::error::Error;
use mongodb::{Collection, Database};
use webtoon_core::webtoon::CreateWebtoon;

use crate::models::webtoon::Webtoon;

/// Name of the backing collection.
const COLLECTION: &str = "webtoons";

/// Provides the operation set over the persisted webtoon collection.
pub struct WebtoonRepo;

impl WebtoonRepo {
    fn collection(db: &Database) -> Collection<Webtoon> {
        db.collection(COLLECTION)
    }

    /// Fetch every webtoon in the collection.
    pub async fn list_all(db: &Database) -> Result<Vec<Webtoon>, Error> {
        let cursor = Self::collection(db).find(doc! {}).await?;

        cursor.try_collect().await
    }

    /// Fetch a single webtoon by its object id.
    pub async fn find_by_id(db: &Database, id: ObjectId) -> Result<Option<Webtoon>, Error> {
        Self::collection(db).find_one(doc! { "_id": id }).await
    }

    /// Insert a new webtoon and return the id generated by the store.
    pub async fn insert(db: &Database, input: &CreateWebtoon) -> Result<ObjectId, Error> {
        let result = db
            .collection::<CreateWebtoon>(COLLECTION)
            .insert_one(input)
            .await?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| Error::custom("insert did not produce an ObjectId".to_string()))
    }

    /// Delete a webtoon by id. Returns whether a document was removed.
    pub async fn delete_by_id(db: &Database, id: ObjectId) -> Result<bool, Error> {
        let result = Self::collection(db).delete_one(doc! { "_id": id }).await?;

        Ok(result.deleted_count > 0)
    }
}
