//! Bulk reference data for the reservation form.

use serde::Serialize;

use crate::models::client::PersonOption;
use crate::models::court::Court;
use crate::models::discipline::Discipline;
use crate::models::facility::Facility;

/// Everything the reservation form needs to populate its selectors.
///
/// `disciplinas` is the full catalogue; the form narrows it per court.
#[derive(Debug, Clone, Serialize)]
pub struct FormData {
    pub clientes: Vec<PersonOption>,
    pub empleados: Vec<PersonOption>,
    pub espacios: Vec<Facility>,
    pub canchas: Vec<Court>,
    pub disciplinas: Vec<Discipline>,
}
