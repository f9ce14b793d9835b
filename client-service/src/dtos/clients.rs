use crate::models::Client;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /clients`.
///
/// Fields are optional at the serde level so that a missing field is reported
/// through `validate()` alongside every other violation instead of aborting
/// deserialization at the first one. Any `id` in the body is ignored.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(
        required(message = "first_name is required"),
        length(min = 1, message = "first_name cannot be empty")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "last_name is required"),
        length(min = 1, message = "last_name cannot be empty")
    )]
    pub last_name: Option<String>,
    #[validate(
        required(message = "email is required"),
        email(message = "Invalid email address")
    )]
    pub email: Option<String>,
    #[validate(required(message = "gender is required"))]
    pub gender: Option<String>,
    #[validate(required(message = "address is required"))]
    pub address: Option<String>,
}

impl From<CreateClientRequest> for Client {
    // Only called on a request that passed `validate()`, so every field is set.
    fn from(req: CreateClientRequest) -> Self {
        Client::new(
            req.first_name.unwrap_or_default(),
            req.last_name.unwrap_or_default(),
            req.email.unwrap_or_default(),
            req.gender.unwrap_or_default(),
            req.address.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub address: String,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            first_name: client.first_name,
            last_name: client.last_name,
            email: client.email,
            gender: client.gender,
            address: client.address,
        }
    }
}
