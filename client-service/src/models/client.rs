use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

/// A client record as stored in the `clients` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub address: String,
}

impl Client {
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        gender: String,
        address: String,
    ) -> Self {
        Self {
            id: None,
            first_name,
            last_name,
            email,
            gender,
            address,
        }
    }
}

/// Parse a path segment into an `ObjectId`.
///
/// A segment that cannot name any document is reported exactly like an absent
/// document.
pub fn parse_client_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|e| {
        tracing::debug!(client_id = %id, error = %e, "Malformed client id");
        not_found(id)
    })
}

pub(crate) fn not_found(id: &str) -> AppError {
    AppError::NotFound(anyhow::anyhow!("Client {} not found", id))
}
