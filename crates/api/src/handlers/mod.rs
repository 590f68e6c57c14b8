//! HTTP handlers, one module per resource.

pub mod clients;
pub mod facilities;
pub mod form_data;
pub mod reservations;

use deportivos_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Parse a numeric code taken from the request path.
fn parse_code(raw: &str, what: &str) -> AppResult<DbId> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid {what} code '{raw}'")))
}
