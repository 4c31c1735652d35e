//! MongoDB access layer: client construction, health check, models, and
//! the webtoon collection repository.

pub mod models;
pub mod repositories;

use mongodb::bson::doc;
use mongodb::{Client, Database};

/// Create a client and select the named database.
///
/// The driver connects lazily; use [`health_check`] to verify the server
/// is actually reachable.
pub async fn connect(uri: &str, db_name: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;
    tracing::debug!(database = %db_name, "Database client created");

    Ok(client.database(db_name))
}

/// Ping the server to verify the connection is usable.
pub async fn health_check(db: &Database) -> Result<(), mongodb::error::Error> {
    db.run_command(doc! { "ping": 1 }).await?;

    Ok(())
}
