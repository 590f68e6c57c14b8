//! Discipline entity model.

use deportivos_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A discipline row from the `disciplina` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Discipline {
    pub cod_disciplina: DbId,
    pub nombre: String,
}
