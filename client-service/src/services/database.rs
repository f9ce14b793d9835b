use crate::config::COLLECTION_NAME;
use crate::models::Client;
use futures::stream::TryStreamExt;
use mongodb::{bson::doc, bson::oid::ObjectId, Client as MongoClient, Collection, Database};
use service_core::error::AppError;

/// Shared handle to the client collection.
///
/// Cloning is cheap: the driver client is reference counted internally and
/// owns its own connection pool.
#[derive(Clone)]
pub struct ClientDb {
    client: MongoClient,
    db: Database,
}

impl ClientDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "MongoDB client ready");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn clients(&self) -> Collection<Client> {
        self.db.collection(COLLECTION_NAME)
    }

    /// Every client in natural (store) order.
    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        let cursor = self.clients().find(None, None).await.map_err(|e| {
            tracing::error!("Failed to list clients: {}", e);
            AppError::from(e)
        })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect clients: {}", e);
            AppError::from(e)
        })
    }

    /// Insert a new client and return the id assigned by the store.
    pub async fn insert(&self, client: &Client) -> Result<ObjectId, AppError> {
        let result = self.clients().insert_one(client, None).await.map_err(|e| {
            tracing::error!("Failed to insert client: {}", e);
            AppError::from(e)
        })?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError(anyhow::anyhow!(
                "Store returned a non-ObjectId identifier: {}",
                result.inserted_id
            ))
        })
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<Client>, AppError> {
        self.clients()
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(client_id = %id, "Failed to find client: {}", e);
                AppError::from(e)
            })
    }

    /// Returns `true` when a document was removed.
    pub async fn delete_by_id(&self, id: ObjectId) -> Result<bool, AppError> {
        let result = self
            .clients()
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!(client_id = %id, "Failed to delete client: {}", e);
                AppError::from(e)
            })?;

        Ok(result.deleted_count == 1)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
