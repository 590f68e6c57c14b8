//! Court entity model.

use deportivos_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A court row from the `cancha` table. Every court belongs to one facility.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Court {
    pub cod_cancha: DbId,
    pub cod_espacio: DbId,
    pub tipo_superficie: Option<String>,
    /// `SI` when the court is covered, `NO` otherwise.
    pub techado: String,
}
