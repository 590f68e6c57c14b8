//! Reservation vocabulary shared by the backend and the form client.
//!
//! Defines the reservation status enumeration, the form defaults applied on
//! every reset, the lookup debounce window, and validation helpers for the
//! required selections, clock times and the numeric lookup code.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status stored in `reserva.estado_reserva`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Confirmada,
    Pendiente,
    Cancelada,
}

impl ReservationStatus {
    /// Parse a status string from the database or a form field.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "CONFIRMADA" => Ok(Self::Confirmada),
            "PENDIENTE" => Ok(Self::Pendiente),
            "CANCELADA" => Ok(Self::Cancelada),
            _ => Err(CoreError::Validation(format!(
                "Invalid reservation status '{s}'. Must be one of: CONFIRMADA, PENDIENTE, CANCELADA"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmada => "CONFIRMADA",
            Self::Pendiente => "PENDIENTE",
            Self::Cancelada => "CANCELADA",
        }
    }
}

// ---------------------------------------------------------------------------
// Form defaults
// ---------------------------------------------------------------------------

/// Default start of the booked time window.
pub const DEFAULT_START_TIME: &str = "08:00";

/// Default end of the booked time window.
pub const DEFAULT_END_TIME: &str = "10:00";

/// Default total amount, in the form's text representation.
pub const DEFAULT_TOTAL_AMOUNT: &str = "100.00";

/// Quiet period after the last code keystroke before a lookup fires.
pub const LOOKUP_DEBOUNCE_MS: u64 = 800;

// ---------------------------------------------------------------------------
// Required selections
// ---------------------------------------------------------------------------

/// Selections that must be present before a reservation can be created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Client,
    Employee,
    Court,
    Discipline,
}

impl RequiredField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Employee => "employee",
            Self::Court => "court",
            Self::Discipline => "discipline",
        }
    }
}

/// Fail with a validation error naming every field whose flag is `false`.
pub fn ensure_required<I>(fields: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = (RequiredField, bool)>,
{
    let missing: Vec<&str> = fields
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(field, _)| field.label())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Required fields missing: {}",
            missing.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Clock times
// ---------------------------------------------------------------------------

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_clock_time(raw: &str) -> Result<NaiveTime, CoreError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| CoreError::Validation(format!("Invalid time '{raw}'. Expected HH:MM")))
}

/// The end of a reservation must be strictly after its start.
pub fn validate_time_window(start: NaiveTime, end: NaiveTime) -> Result<(), CoreError> {
    if end <= start {
        return Err(CoreError::Validation(format!(
            "End time {} must be after start time {}",
            end.format("%H:%M"),
            start.format("%H:%M")
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Lookup code
// ---------------------------------------------------------------------------

/// The lookup field only ever holds ASCII digits (or nothing).
pub fn is_lookup_code_input(raw: &str) -> bool {
    raw.chars().all(|c| c.is_ascii_digit())
}
