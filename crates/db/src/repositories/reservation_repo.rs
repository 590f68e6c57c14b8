//! Repository for the `reserva` table.
//!
//! Reservations are insert-only: there is no update or delete path.

use deportivos_core::types::DbId;
use sqlx::PgPool;

use crate::models::reservation::{NewReservation, Reservation, ReservationDetail};

const COLUMNS: &str = "cod_reserva, ci_cliente, ci_empleado, cod_cancha, cod_disciplina, fecha, \
     hora_inicio, hora_fin, monto_total, estado_reserva";

const SELECT_DETAIL: &str = "SELECT r.cod_reserva, r.ci_cliente, r.ci_empleado, c.cod_espacio, \
     r.cod_cancha, r.cod_disciplina, r.fecha, r.hora_inicio, r.hora_fin, r.monto_total, \
     r.estado_reserva, p.nombre AS cliente_nombre, p.apellido AS cliente_apellido, \
     e.nombre AS espacio_nombre, d.nombre AS disciplina_nombre \
     FROM reserva r \
     JOIN cancha c ON c.cod_cancha = r.cod_cancha \
     JOIN espacio_deportivo e ON e.cod_espacio = c.cod_espacio \
     JOIN persona p ON p.ci = r.ci_cliente \
     JOIN disciplina d ON d.cod_disciplina = r.cod_disciplina";

/// Provides create and read operations for reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a validated reservation, returning the created row.
    ///
    /// When `cod_reserva` is `None` the store assigns the next code.
    pub async fn create(pool: &PgPool, input: &NewReservation) -> Result<Reservation, sqlx::Error> {
        let query = match input.cod_reserva {
            Some(_) => format!(
                "INSERT INTO reserva (cod_reserva, ci_cliente, ci_empleado, cod_cancha,
                                      cod_disciplina, fecha, hora_inicio, hora_fin,
                                      monto_total, estado_reserva)
                 VALUES ($10, $1, $2, $3, $4, $5, $6, $7, $8, $9)
                 RETURNING {COLUMNS}"
            ),
            None => format!(
                "INSERT INTO reserva (ci_cliente, ci_empleado, cod_cancha, cod_disciplina,
                                      fecha, hora_inicio, hora_fin, monto_total, estado_reserva)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                 RETURNING {COLUMNS}"
            ),
        };

        let mut insert = sqlx::query_as::<_, Reservation>(&query)
            .bind(input.ci_cliente)
            .bind(input.ci_empleado)
            .bind(input.cod_cancha)
            .bind(input.cod_disciplina)
            .bind(input.fecha)
            .bind(input.hora_inicio)
            .bind(input.hora_fin)
            .bind(input.monto_total)
            .bind(input.estado_reserva.as_str());
        if let Some(code) = input.cod_reserva {
            insert = insert.bind(code);
        }
        insert.fetch_one(pool).await
    }

    /// Whether a reservation with this code exists.
    pub async fn exists(pool: &PgPool, cod_reserva: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM reserva WHERE cod_reserva = $1)")
                .bind(cod_reserva)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Find a reservation with its display names by code.
    pub async fn find_detail(
        pool: &PgPool,
        cod_reserva: DbId,
    ) -> Result<Option<ReservationDetail>, sqlx::Error> {
        let query = format!("{SELECT_DETAIL} WHERE r.cod_reserva = $1");
        sqlx::query_as::<_, ReservationDetail>(&query)
            .bind(cod_reserva)
            .fetch_optional(pool)
            .await
    }

    /// List all reservations, most recent date first.
    pub async fn list_detail(pool: &PgPool) -> Result<Vec<ReservationDetail>, sqlx::Error> {
        let query = format!(
            "{SELECT_DETAIL} ORDER BY r.fecha DESC, r.hora_inicio DESC, r.cod_reserva DESC"
        );
        sqlx::query_as::<_, ReservationDetail>(&query)
            .fetch_all(pool)
            .await
    }
}
