//! Handlers for the `/clientes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use deportivos_core::error::CoreError;
use deportivos_core::types::DbId;
use deportivos_db::models::client::{Client, CreateClient, UpdateClient};
use deportivos_db::repositories::ClientRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /clientes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// POST /clientes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    input.validate()?;
    if ClientRepo::find_by_ci(&state.pool, input.ci).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Client with ci {} is already registered",
            input.ci
        ))));
    }
    let client = ClientRepo::create(&state.pool, &input).await?;
    tracing::info!(ci = client.ci, "Client registered");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Cliente agregado correctamente")),
    ))
}

/// PUT /clientes/{ci}
pub async fn update(
    State(state): State<AppState>,
    Path(ci): Path<DbId>,
    Json(input): Json<UpdateClient>,
) -> AppResult<Json<MessageResponse>> {
    input.validate()?;
    ClientRepo::update(&state.pool, ci, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id: ci,
        }))?;
    Ok(Json(MessageResponse::new("Cliente actualizado correctamente")))
}

/// DELETE /clientes/{ci}
pub async fn delete(
    State(state): State<AppState>,
    Path(ci): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if ClientRepo::delete(&state.pool, ci).await? {
        tracing::info!(ci, "Client deleted");
        Ok(Json(MessageResponse::new("Cliente eliminado correctamente")))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id: ci,
        }))
    }
}
