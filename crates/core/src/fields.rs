//! Field-name translation between form fields and persistence columns.
//!
//! Each form has one enum of fields. Its [`FieldName`] impl is the single
//! place that names the persistence column for a field, and the generic
//! [`to_persistence`] / [`from_persistence`] functions apply it to whole
//! payloads and records. Gateway operations never spell column names
//! themselves.

use serde_json::{Map, Value};

/// A form field with a fixed persistence column.
pub trait FieldName: Copy + PartialEq + Sized + 'static {
    /// Every field, in payload order.
    const ALL: &'static [Self];

    /// Persistence column for this field.
    fn column(self) -> &'static str;

    /// Whether the field is sent on writes. Read-only fields are still
    /// populated from records.
    fn is_writable(self) -> bool {
        true
    }

    /// Reverse lookup: the field stored under `column`, if any.
    fn from_column(column: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.column() == column)
    }
}

/// Build a persistence payload from form values.
///
/// Only writable fields are emitted. Blank values are sent as `null` so the
/// store applies its own default.
pub fn to_persistence<F, V>(value_of: V) -> Map<String, Value>
where
    F: FieldName,
    V: Fn(F) -> String,
{
    F::ALL
        .iter()
        .copied()
        .filter(|f| f.is_writable())
        .map(|f| {
            let value = value_of(f);
            let value = if value.trim().is_empty() {
                Value::Null
            } else {
                Value::String(value)
            };
            (f.column().to_string(), value)
        })
        .collect()
}

/// Extract form values from a persistence record.
///
/// Scalars are coerced to their text representation; unknown columns and
/// `null` values are skipped.
pub fn from_persistence<F: FieldName>(record: &Map<String, Value>) -> Vec<(F, String)> {
    F::ALL
        .iter()
        .copied()
        .filter_map(|f| record.get(f.column()).and_then(value_as_text).map(|v| (f, v)))
        .collect()
}

/// Text representation of a JSON scalar.
pub fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

// ---------------------------------------------------------------------------
// Reservation form
// ---------------------------------------------------------------------------

/// Fields of the reservation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationField {
    Client,
    Employee,
    Facility,
    Court,
    Discipline,
    Date,
    StartTime,
    EndTime,
    TotalAmount,
    Status,
}

impl FieldName for ReservationField {
    const ALL: &'static [Self] = &[
        Self::Client,
        Self::Employee,
        Self::Facility,
        Self::Court,
        Self::Discipline,
        Self::Date,
        Self::StartTime,
        Self::EndTime,
        Self::TotalAmount,
        Self::Status,
    ];

    fn column(self) -> &'static str {
        match self {
            Self::Client => "ci_cliente",
            Self::Employee => "ci_empleado",
            Self::Facility => "cod_espacio",
            Self::Court => "cod_cancha",
            Self::Discipline => "cod_disciplina",
            Self::Date => "fecha",
            Self::StartTime => "hora_inicio",
            Self::EndTime => "hora_fin",
            Self::TotalAmount => "monto_total",
            Self::Status => "estado_reserva",
        }
    }

    /// The facility is implied by the court and is never written.
    fn is_writable(self) -> bool {
        !matches!(self, Self::Facility)
    }
}

// ---------------------------------------------------------------------------
// Facility form
// ---------------------------------------------------------------------------

/// Fields of the sports-facility form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacilityField {
    Code,
    Name,
    Location,
    Capacity,
    Status,
    Description,
}

impl FieldName for FacilityField {
    const ALL: &'static [Self] = &[
        Self::Code,
        Self::Name,
        Self::Location,
        Self::Capacity,
        Self::Status,
        Self::Description,
    ];

    fn column(self) -> &'static str {
        match self {
            Self::Code => "cod_espacio",
            Self::Name => "nombre",
            Self::Location => "ubicacion",
            Self::Capacity => "capacidad",
            Self::Status => "estado",
            Self::Description => "descripcion",
        }
    }
}
