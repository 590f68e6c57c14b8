//! Repository for the `espacio_deportivo` table.

use deportivos_core::types::DbId;
use sqlx::PgPool;

use crate::models::facility::{CreateFacility, Facility, FacilitySummary};

const COLUMNS: &str = "cod_espacio, nombre, ubicacion, capacidad, estado, descripcion";

/// Provides create and read operations for sports facilities.
pub struct FacilityRepo;

impl FacilityRepo {
    /// Insert a new facility, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFacility) -> Result<Facility, sqlx::Error> {
        let query = format!(
            "INSERT INTO espacio_deportivo
                 (cod_espacio, nombre, ubicacion, capacidad, estado, descripcion)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'ACTIVO'), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Facility>(&query)
            .bind(input.cod_espacio)
            .bind(&input.nombre)
            .bind(&input.ubicacion)
            .bind(input.capacidad)
            .bind(&input.estado)
            .bind(&input.descripcion)
            .fetch_one(pool)
            .await
    }

    /// List all facilities ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Facility>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM espacio_deportivo ORDER BY nombre");
        sqlx::query_as::<_, Facility>(&query).fetch_all(pool).await
    }

    /// Court count, reservation count and revenue for one facility.
    pub async fn summary(
        pool: &PgPool,
        cod_espacio: DbId,
    ) -> Result<Option<FacilitySummary>, sqlx::Error> {
        sqlx::query_as::<_, FacilitySummary>(
            "SELECT e.cod_espacio,
                    e.nombre,
                    (SELECT COUNT(*) FROM cancha c
                      WHERE c.cod_espacio = e.cod_espacio) AS nro_canchas,
                    (SELECT COUNT(*) FROM reserva r
                      JOIN cancha c ON c.cod_cancha = r.cod_cancha
                      WHERE c.cod_espacio = e.cod_espacio) AS nro_reservas,
                    (SELECT COALESCE(SUM(r.monto_total), 0) FROM reserva r
                      JOIN cancha c ON c.cod_cancha = r.cod_cancha
                      WHERE c.cod_espacio = e.cod_espacio) AS total_pago
             FROM espacio_deportivo e
             WHERE e.cod_espacio = $1",
        )
        .bind(cod_espacio)
        .fetch_optional(pool)
        .await
    }
}
