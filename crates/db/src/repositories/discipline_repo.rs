//! Repository for the `disciplina` table and its court association.

use deportivos_core::types::DbId;
use sqlx::PgPool;

use crate::models::discipline::Discipline;

/// Read access to disciplines.
pub struct DisciplineRepo;

impl DisciplineRepo {
    /// List the full discipline catalogue.
    pub async fn list(pool: &PgPool) -> Result<Vec<Discipline>, sqlx::Error> {
        sqlx::query_as::<_, Discipline>(
            "SELECT cod_disciplina, nombre FROM disciplina ORDER BY nombre",
        )
        .fetch_all(pool)
        .await
    }

    /// List the disciplines valid for a court.
    pub async fn list_by_court(
        pool: &PgPool,
        cod_cancha: DbId,
    ) -> Result<Vec<Discipline>, sqlx::Error> {
        sqlx::query_as::<_, Discipline>(
            "SELECT d.cod_disciplina, d.nombre
             FROM disciplina d
             JOIN cancha_disciplina cd ON cd.cod_disciplina = d.cod_disciplina
             WHERE cd.cod_cancha = $1
             ORDER BY d.nombre",
        )
        .bind(cod_cancha)
        .fetch_all(pool)
        .await
    }

    /// Whether `cod_disciplina` may be played on `cod_cancha`.
    pub async fn is_valid_for_court(
        pool: &PgPool,
        cod_cancha: DbId,
        cod_disciplina: DbId,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                 SELECT 1 FROM cancha_disciplina WHERE cod_cancha = $1 AND cod_disciplina = $2
             )",
        )
        .bind(cod_cancha)
        .bind(cod_disciplina)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }
}
