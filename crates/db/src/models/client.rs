//! Client entity model and DTOs.
//!
//! A client is a `persona` row joined with its `cliente` row; both share
//! the person's national ID (`ci`).

use chrono::NaiveDate;
use deportivos_core::types::{blank_as_none, lenient, lenient_opt, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A client joined from the `persona` and `cliente` tables.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub ci: DbId,
    pub nombre: String,
    pub apellido: Option<String>,
    pub telefono: Option<String>,
    pub fechanaci: Option<NaiveDate>,
    pub sexo: Option<String>,
    pub nacionalidad: Option<String>,
    pub categoria: Option<String>,
    pub email: Option<String>,
}

/// DTO for registering a new client (person + client rows).
///
/// A blank `fechanaci` or blank optional text is stored as NULL.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClient {
    #[serde(deserialize_with = "lenient")]
    pub ci: DbId,
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub apellido: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub telefono: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt")]
    pub fechanaci: Option<NaiveDate>,
    #[validate(length(max = 1))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub sexo: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub nacionalidad: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub categoria: Option<String>,
    #[validate(email)]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub email: Option<String>,
}

/// DTO for replacing a client's person and client data.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateClient {
    #[validate(length(min = 1, max = 100))]
    pub nombre: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub apellido: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub telefono: Option<String>,
    #[serde(default, deserialize_with = "lenient_opt")]
    pub fechanaci: Option<NaiveDate>,
    #[validate(length(max = 1))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub sexo: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub nacionalidad: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub categoria: Option<String>,
    #[validate(email)]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub email: Option<String>,
}

/// A selectable person (client or employee) in the reservation form.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PersonOption {
    pub id: DbId,
    pub nombre: String,
    pub apellido_p: Option<String>,
}
