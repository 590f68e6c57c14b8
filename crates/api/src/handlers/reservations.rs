//! Handlers for the `/deportivos/reservas` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use deportivos_core::error::CoreError;
use deportivos_db::models::reservation::{CreateReservation, Reservation, ReservationDetail};
use deportivos_db::repositories::{DisciplineRepo, ReservationRepo};

use super::parse_code;
use crate::error::{AppError, AppResult};
use crate::response::{ReservationCreated, ReservationLookup};
use crate::state::AppState;

/// GET /deportivos/reservas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ReservationDetail>>> {
    let reservations = ReservationRepo::list_detail(&state.pool).await?;
    Ok(Json(reservations))
}

/// POST /deportivos/reservas
///
/// Missing selections, an inverted time window and a discipline not offered
/// on the chosen court are rejected with 400 before anything is written. An
/// explicit `cod_reserva` that is already taken is a 409.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateReservation>,
) -> AppResult<(StatusCode, Json<ReservationCreated<Reservation>>)> {
    let today = chrono::Local::now().date_naive();
    let new = input.validate(today)?;

    if let Some(code) = new.cod_reserva {
        if ReservationRepo::exists(&state.pool, code).await? {
            return Err(AppError::Core(CoreError::Conflict(format!(
                "Reservation #{code} already exists"
            ))));
        }
    }

    let offered =
        DisciplineRepo::is_valid_for_court(&state.pool, new.cod_cancha, new.cod_disciplina).await?;
    if !offered {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Discipline {} is not offered on court {}",
            new.cod_disciplina, new.cod_cancha
        ))));
    }

    let reservation = ReservationRepo::create(&state.pool, &new).await?;
    tracing::info!(
        cod_reserva = reservation.cod_reserva,
        ci_cliente = reservation.ci_cliente,
        cod_cancha = reservation.cod_cancha,
        "Reservation created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ReservationCreated {
            mensaje: format!("Reserva #{} registrada correctamente", reservation.cod_reserva),
            reserva: reservation,
        }),
    ))
}

/// GET /deportivos/reservas/{codigo}
pub async fn get_by_code(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
) -> AppResult<Json<ReservationLookup<ReservationDetail>>> {
    let codigo = parse_code(&codigo, "reservation")?;
    let reserva = ReservationRepo::find_detail(&state.pool, codigo)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id: codigo,
        }))?;
    Ok(Json(ReservationLookup {
        encontrada: true,
        reserva,
    }))
}
