//! Repository for the `cancha` table.

use deportivos_core::types::DbId;
use sqlx::PgPool;

use crate::models::court::Court;

const COLUMNS: &str = "cod_cancha, cod_espacio, tipo_superficie, techado";

/// Read access to courts. Courts are reference data created out of band.
pub struct CourtRepo;

impl CourtRepo {
    /// List every court ordered by code.
    pub async fn list(pool: &PgPool) -> Result<Vec<Court>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cancha ORDER BY cod_cancha");
        sqlx::query_as::<_, Court>(&query).fetch_all(pool).await
    }

    /// List the courts of one facility.
    pub async fn list_by_facility(
        pool: &PgPool,
        cod_espacio: DbId,
    ) -> Result<Vec<Court>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM cancha WHERE cod_espacio = $1 ORDER BY cod_cancha");
        sqlx::query_as::<_, Court>(&query)
            .bind(cod_espacio)
            .fetch_all(pool)
            .await
    }
}
