//! Repository for clients (`persona` joined with `cliente`).
//!
//! Writes touch both relations inside one transaction so a client never
//! exists without its person row or vice versa.

use deportivos_core::types::DbId;
use sqlx::PgPool;

use crate::models::client::{Client, CreateClient, PersonOption, UpdateClient};

const SELECT_CLIENTS: &str = "SELECT p.ci, p.nombre, p.apellido, p.telefono, p.fechanaci, p.sexo, \
     p.nacionalidad, c.categoria, c.email \
     FROM persona p JOIN cliente c ON p.ci = c.idcliente";

/// Provides CRUD operations for clients.
pub struct ClientRepo;

impl ClientRepo {
    /// List all clients ordered by national ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<Client>, sqlx::Error> {
        let query = format!("{SELECT_CLIENTS} ORDER BY p.ci");
        sqlx::query_as::<_, Client>(&query).fetch_all(pool).await
    }

    /// Find a client by national ID.
    pub async fn find_by_ci(pool: &PgPool, ci: DbId) -> Result<Option<Client>, sqlx::Error> {
        let query = format!("{SELECT_CLIENTS} WHERE p.ci = $1");
        sqlx::query_as::<_, Client>(&query)
            .bind(ci)
            .fetch_optional(pool)
            .await
    }

    /// Insert the person row, then the client row sharing its `ci`.
    pub async fn create(pool: &PgPool, input: &CreateClient) -> Result<Client, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "INSERT INTO persona (ci, nombre, apellido, telefono, fechanaci, sexo, nacionalidad)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(input.ci)
        .bind(&input.nombre)
        .bind(&input.apellido)
        .bind(&input.telefono)
        .bind(input.fechanaci)
        .bind(&input.sexo)
        .bind(&input.nacionalidad)
        .execute(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO cliente (idcliente, categoria, email) VALUES ($1, $2, $3)")
            .bind(input.ci)
            .bind(&input.categoria)
            .bind(&input.email)
            .execute(&mut *tx)
            .await?;

        let query = format!("{SELECT_CLIENTS} WHERE p.ci = $1");
        let client = sqlx::query_as::<_, Client>(&query)
            .bind(input.ci)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(client)
    }

    /// Replace a client's person and client data.
    ///
    /// Returns `None` if no client with the given `ci` exists.
    pub async fn update(
        pool: &PgPool,
        ci: DbId,
        input: &UpdateClient,
    ) -> Result<Option<Client>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE persona
             SET nombre = $1, apellido = $2, telefono = $3, fechanaci = $4, sexo = $5,
                 nacionalidad = $6
             WHERE ci = $7 AND EXISTS (SELECT 1 FROM cliente WHERE idcliente = $7)",
        )
        .bind(&input.nombre)
        .bind(&input.apellido)
        .bind(&input.telefono)
        .bind(input.fechanaci)
        .bind(&input.sexo)
        .bind(&input.nacionalidad)
        .bind(ci)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        sqlx::query("UPDATE cliente SET categoria = $1, email = $2 WHERE idcliente = $3")
            .bind(&input.categoria)
            .bind(&input.email)
            .bind(ci)
            .execute(&mut *tx)
            .await?;

        let query = format!("{SELECT_CLIENTS} WHERE p.ci = $1");
        let client = sqlx::query_as::<_, Client>(&query)
            .bind(ci)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(client))
    }

    /// Delete the client row, then its person row. Returns `true` if a
    /// client was removed.
    pub async fn delete(pool: &PgPool, ci: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let removed = sqlx::query("DELETE FROM cliente WHERE idcliente = $1")
            .bind(ci)
            .execute(&mut *tx)
            .await?;

        if removed.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM persona WHERE ci = $1")
            .bind(ci)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Client options for the reservation form selector.
    pub async fn list_options(pool: &PgPool) -> Result<Vec<PersonOption>, sqlx::Error> {
        sqlx::query_as::<_, PersonOption>(
            "SELECT p.ci AS id, p.nombre, p.apellido AS apellido_p
             FROM persona p JOIN cliente c ON p.ci = c.idcliente
             ORDER BY p.nombre, p.ci",
        )
        .fetch_all(pool)
        .await
    }
}
