//! Sports facility entity model and DTOs.

use deportivos_core::types::{blank_as_none, lenient, lenient_opt, DbId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A facility row from the `espacio_deportivo` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Facility {
    pub cod_espacio: DbId,
    pub nombre: String,
    pub ubicacion: Option<String>,
    pub capacidad: Option<i32>,
    pub estado: Option<String>,
    pub descripcion: Option<String>,
}

/// DTO for creating a new facility.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFacility {
    #[serde(deserialize_with = "lenient")]
    pub cod_espacio: DbId,
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub ubicacion: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt")]
    #[validate(range(min = 0))]
    pub capacidad: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub estado: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub descripcion: Option<String>,
}

/// Aggregate view of one facility: its courts, reservations and revenue.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FacilitySummary {
    pub cod_espacio: DbId,
    pub nombre: String,
    pub nro_canchas: i64,
    pub nro_reservas: i64,
    pub total_pago: Decimal,
}
