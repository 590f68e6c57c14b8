//! Repository for employees (`persona` joined with `empleado`).

use sqlx::PgPool;

use crate::models::client::PersonOption;

/// Read access to employees. Employees are maintained out of band.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Employee options for the reservation form selector.
    pub async fn list_options(pool: &PgPool) -> Result<Vec<PersonOption>, sqlx::Error> {
        sqlx::query_as::<_, PersonOption>(
            "SELECT p.ci AS id, p.nombre, p.apellido AS apellido_p
             FROM persona p JOIN empleado e ON p.ci = e.idempleado
             ORDER BY p.nombre, p.ci",
        )
        .fetch_all(pool)
        .await
    }
}
