//! Handlers for the `/deportivos/espacios` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use deportivos_core::error::CoreError;
use deportivos_db::models::facility::{CreateFacility, Facility, FacilitySummary};
use deportivos_db::repositories::FacilityRepo;
use validator::Validate;

use super::parse_code;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /deportivos/espacios
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Facility>>> {
    let facilities = FacilityRepo::list(&state.pool).await?;
    Ok(Json(facilities))
}

/// POST /deportivos/espacios
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFacility>,
) -> AppResult<(StatusCode, Json<Facility>)> {
    input.validate()?;
    let facility = FacilityRepo::create(&state.pool, &input).await?;
    tracing::info!(cod_espacio = facility.cod_espacio, "Facility created");
    Ok((StatusCode::CREATED, Json(facility)))
}

/// GET /deportivos/espacios/{codigo}
pub async fn summary(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
) -> AppResult<Json<FacilitySummary>> {
    let codigo = parse_code(&codigo, "facility")?;
    let summary = FacilityRepo::summary(&state.pool, codigo)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Facility",
            id: codigo,
        }))?;
    Ok(Json(summary))
}
