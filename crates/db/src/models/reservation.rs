//! Reservation entity model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use deportivos_core::error::CoreError;
use deportivos_core::reservation::{
    ensure_required, parse_clock_time, validate_time_window, RequiredField, ReservationStatus,
    DEFAULT_END_TIME, DEFAULT_START_TIME, DEFAULT_TOTAL_AMOUNT,
};
use deportivos_core::types::{lenient_opt, DbId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A reservation row from the `reserva` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub cod_reserva: DbId,
    pub ci_cliente: DbId,
    pub ci_empleado: DbId,
    pub cod_cancha: DbId,
    pub cod_disciplina: DbId,
    pub fecha: NaiveDate,
    pub hora_inicio: NaiveTime,
    pub hora_fin: NaiveTime,
    pub monto_total: Decimal,
    pub estado_reserva: String,
}

/// A reservation joined with the names the form displays.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReservationDetail {
    pub cod_reserva: DbId,
    pub ci_cliente: DbId,
    pub ci_empleado: DbId,
    pub cod_espacio: DbId,
    pub cod_cancha: DbId,
    pub cod_disciplina: DbId,
    pub fecha: NaiveDate,
    pub hora_inicio: NaiveTime,
    pub hora_fin: NaiveTime,
    pub monto_total: Decimal,
    pub estado_reserva: String,
    pub cliente_nombre: String,
    pub cliente_apellido: Option<String>,
    pub espacio_nombre: String,
    pub disciplina_nombre: String,
}

/// Raw create payload as posted by the reservation form.
///
/// Every field is optional at the wire level so that missing selections
/// surface as a validation error rather than a decode failure. Use
/// [`CreateReservation::validate`] to obtain a [`NewReservation`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateReservation {
    #[serde(default, deserialize_with = "lenient_opt")]
    pub cod_reserva: Option<DbId>,
    #[serde(default, deserialize_with = "lenient_opt")]
    pub ci_cliente: Option<DbId>,
    #[serde(default, deserialize_with = "lenient_opt")]
    pub ci_empleado: Option<DbId>,
    #[serde(default, deserialize_with = "lenient_opt")]
    pub cod_cancha: Option<DbId>,
    #[serde(default, deserialize_with = "lenient_opt")]
    pub cod_disciplina: Option<DbId>,
    #[serde(default, deserialize_with = "lenient_opt")]
    pub fecha: Option<NaiveDate>,
    pub hora_inicio: Option<String>,
    pub hora_fin: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt")]
    pub monto_total: Option<Decimal>,
    pub estado_reserva: Option<String>,
}

/// A fully validated reservation ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    pub cod_reserva: Option<DbId>,
    pub ci_cliente: DbId,
    pub ci_empleado: DbId,
    pub cod_cancha: DbId,
    pub cod_disciplina: DbId,
    pub fecha: NaiveDate,
    pub hora_inicio: NaiveTime,
    pub hora_fin: NaiveTime,
    pub monto_total: Decimal,
    pub estado_reserva: ReservationStatus,
}

impl CreateReservation {
    /// Check required selections, parse times, and apply defaults.
    ///
    /// `today` is used when no date was sent.
    pub fn validate(&self, today: NaiveDate) -> Result<NewReservation, CoreError> {
        ensure_required([
            (RequiredField::Client, self.ci_cliente.is_some()),
            (RequiredField::Employee, self.ci_empleado.is_some()),
            (RequiredField::Court, self.cod_cancha.is_some()),
            (RequiredField::Discipline, self.cod_disciplina.is_some()),
        ])?;

        let hora_inicio =
            parse_clock_time(self.hora_inicio.as_deref().unwrap_or(DEFAULT_START_TIME))?;
        let hora_fin = parse_clock_time(self.hora_fin.as_deref().unwrap_or(DEFAULT_END_TIME))?;
        validate_time_window(hora_inicio, hora_fin)?;

        let monto_total = match self.monto_total {
            Some(amount) => amount,
            None => DEFAULT_TOTAL_AMOUNT
                .parse()
                .map_err(|e| CoreError::Internal(format!("Bad default amount: {e}")))?,
        };
        if monto_total.is_sign_negative() {
            return Err(CoreError::Validation(
                "Total amount must not be negative".to_string(),
            ));
        }

        let estado_reserva = match self.estado_reserva.as_deref() {
            None | Some("") => ReservationStatus::default(),
            Some(raw) => ReservationStatus::from_str_db(raw)?,
        };

        // ensure_required above guarantees the four selections are present.
        Ok(NewReservation {
            cod_reserva: self.cod_reserva,
            ci_cliente: self.ci_cliente.unwrap_or_default(),
            ci_empleado: self.ci_empleado.unwrap_or_default(),
            cod_cancha: self.cod_cancha.unwrap_or_default(),
            cod_disciplina: self.cod_disciplina.unwrap_or_default(),
            fecha: self.fecha.unwrap_or(today),
            hora_inicio,
            hora_fin,
            monto_total,
            estado_reserva,
        })
    }
}
