//! Reference data handlers backing the reservation form selectors.

use axum::extract::{Path, State};
use axum::Json;
use deportivos_core::types::DbId;
use deportivos_db::models::court::Court;
use deportivos_db::models::discipline::Discipline;
use deportivos_db::models::form_data::FormData;
use deportivos_db::repositories::{
    ClientRepo, CourtRepo, DisciplineRepo, EmployeeRepo, FacilityRepo,
};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /deportivos/datos-formulario
pub async fn get(State(state): State<AppState>) -> AppResult<Json<FormData>> {
    let pool = &state.pool;
    let (clientes, empleados, espacios, canchas, disciplinas) = tokio::try_join!(
        ClientRepo::list_options(pool),
        EmployeeRepo::list_options(pool),
        FacilityRepo::list(pool),
        CourtRepo::list(pool),
        DisciplineRepo::list(pool),
    )?;

    Ok(Json(FormData {
        clientes,
        empleados,
        espacios,
        canchas,
        disciplinas,
    }))
}

/// GET /deportivos/canchas/{cod_espacio}
///
/// An unknown facility yields an empty list.
pub async fn courts_for_facility(
    State(state): State<AppState>,
    Path(cod_espacio): Path<DbId>,
) -> AppResult<Json<Vec<Court>>> {
    let courts = CourtRepo::list_by_facility(&state.pool, cod_espacio).await?;
    Ok(Json(courts))
}

/// GET /deportivos/disciplinas/{cod_cancha}
pub async fn disciplines_for_court(
    State(state): State<AppState>,
    Path(cod_cancha): Path<DbId>,
) -> AppResult<Json<Vec<Discipline>>> {
    let disciplines = DisciplineRepo::list_by_court(&state.pool, cod_cancha).await?;
    Ok(Json(disciplines))
}
