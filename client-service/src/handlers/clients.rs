use crate::dtos::{ClientResponse, CreateClientRequest};
use crate::models::{client::not_found, parse_client_id, Client};
use crate::services::metrics::{CLIENTS_CREATED, CLIENTS_DELETED};
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use metrics::counter;
use service_core::error::AppError;

#[tracing::instrument(skip(state))]
pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientResponse>>, AppError> {
    let clients = state.db.list().await?;

    Ok(Json(clients.into_iter().map(ClientResponse::from).collect()))
}

#[tracing::instrument(skip(state, request))]
pub async fn create_client(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateClientRequest>,
) -> Result<(StatusCode, Json<ClientResponse>), AppError> {
    let client = Client::from(request);
    let id = state.db.insert(&client).await?;

    // Respond with what the store actually holds.
    let created = state.db.find_by_id(id).await?.ok_or_else(|| {
        AppError::InternalError(anyhow::anyhow!(
            "Client {} vanished immediately after insert",
            id
        ))
    })?;

    counter!(CLIENTS_CREATED).increment(1);
    tracing::info!(client_id = %id, "Client created");

    Ok((StatusCode::CREATED, Json(ClientResponse::from(created))))
}

#[tracing::instrument(skip(state))]
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ClientResponse>, AppError> {
    let oid = parse_client_id(&id)?;

    let client = state.db.find_by_id(oid).await?.ok_or_else(|| not_found(&id))?;

    Ok(Json(ClientResponse::from(client)))
}

#[tracing::instrument(skip(state))]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let oid = parse_client_id(&id)?;

    if !state.db.delete_by_id(oid).await? {
        return Err(not_found(&id));
    }

    counter!(CLIENTS_DELETED).increment(1);
    tracing::info!(client_id = %id, "Client deleted");

    Ok(StatusCode::NO_CONTENT)
}
