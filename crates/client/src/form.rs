//! Text-valued form state and its translation to and from persistence shape.
//!
//! Every field holds text, as an input control would. Conversion to a
//! write payload and population from a read record both go through the
//! [`FieldName`] table in `deportivos_core::fields`, so nothing here spells
//! a column name.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::NaiveDate;
use deportivos_core::fields::{from_persistence, to_persistence, FieldName, ReservationField};
use deportivos_core::reservation::{
    parse_clock_time, ReservationStatus, DEFAULT_END_TIME, DEFAULT_START_TIME,
    DEFAULT_TOTAL_AMOUNT,
};
use deportivos_core::types::Code;

use crate::model::{Payload, ReservationRecord};

// ---------------------------------------------------------------------------
// Generic field store
// ---------------------------------------------------------------------------

/// Text values for one form, keyed by field. Unset fields read as `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValues<F: FieldName + Eq + Hash> {
    values: HashMap<F, String>,
}

impl<F: FieldName + Eq + Hash> Default for FormValues<F> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<F: FieldName + Eq + Hash> FormValues<F> {
    pub fn get(&self, field: F) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: F, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn clear(&mut self, field: F) {
        self.values.remove(&field);
    }

    pub fn is_blank(&self, field: F) -> bool {
        self.get(field).trim().is_empty()
    }

    /// Persistence payload of the writable fields.
    pub fn to_payload(&self) -> Payload {
        to_persistence(|f: F| self.get(f).to_string())
    }
}

/// Values of the facility registration form.
pub type FacilityForm = FormValues<deportivos_core::fields::FacilityField>;

// ---------------------------------------------------------------------------
// Reservation form
// ---------------------------------------------------------------------------

/// The reservation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationForm {
    values: FormValues<ReservationField>,
}

impl ReservationForm {
    /// A blank form: no selections, `today`, 08:00-10:00, the default
    /// amount and status.
    pub fn with_defaults(today: NaiveDate) -> Self {
        let mut values = FormValues::default();
        values.set(ReservationField::Date, today.format("%Y-%m-%d").to_string());
        values.set(ReservationField::StartTime, DEFAULT_START_TIME);
        values.set(ReservationField::EndTime, DEFAULT_END_TIME);
        values.set(ReservationField::TotalAmount, DEFAULT_TOTAL_AMOUNT);
        values.set(
            ReservationField::Status,
            ReservationStatus::default().as_str(),
        );
        Self { values }
    }

    pub fn get(&self, field: ReservationField) -> &str {
        self.values.get(field)
    }

    /// The field's value as an identifier.
    pub fn code(&self, field: ReservationField) -> Code {
        Code::from(self.values.get(field))
    }

    pub fn set(&mut self, field: ReservationField, value: impl Into<String>) {
        self.values.set(field, value);
    }

    pub fn clear(&mut self, field: ReservationField) {
        self.values.clear(field);
    }

    pub fn is_blank(&self, field: ReservationField) -> bool {
        self.values.is_blank(field)
    }

    pub fn to_payload(&self) -> Payload {
        self.values.to_payload()
    }

    /// Overwrite the form from a reservation record.
    ///
    /// Identifiers and amounts become text; times are shortened to `HH:MM`.
    /// Fields the record does not carry keep their current value.
    pub fn apply_record(&mut self, record: &ReservationRecord) {
        for (field, value) in from_persistence::<ReservationField>(&record.fields()) {
            let value = match field {
                ReservationField::StartTime | ReservationField::EndTime => parse_clock_time(&value)
                    .map(|t| t.format("%H:%M").to_string())
                    .unwrap_or(value),
                _ => value,
            };
            self.values.set(field, value);
        }
    }
}
