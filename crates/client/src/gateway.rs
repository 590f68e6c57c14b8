//! The seam between the form workflow and the reservation backend.

use async_trait::async_trait;
use deportivos_core::types::Code;

use crate::error::GatewayError;
use crate::model::{
    Court, Discipline, Facility, FacilitySummary, Payload, ReferenceData, ReservationRecord,
};

/// Typed operations against the reservation backend.
///
/// Payloads passed to write operations are already in persistence shape
/// (see [`crate::form`]); implementations never rename fields themselves.
#[async_trait]
pub trait ReservationGateway: Send + Sync {
    /// Summary of one facility. Fails with [`GatewayError::NotFound`] for an
    /// unknown code.
    async fn fetch_facility(&self, code: &Code) -> Result<FacilitySummary, GatewayError>;

    /// Bulk reference data, loaded once per form session.
    async fn fetch_form_reference_data(&self) -> Result<ReferenceData, GatewayError>;

    async fn fetch_disciplines_for_court(
        &self,
        court: &Code,
    ) -> Result<Vec<Discipline>, GatewayError>;

    /// `Ok(None)` when the backend has no reservation with this code.
    async fn fetch_reservation_by_code(
        &self,
        code: &Code,
    ) -> Result<Option<ReservationRecord>, GatewayError>;

    async fn create_reservation(&self, payload: &Payload)
        -> Result<ReservationRecord, GatewayError>;

    async fn list_reservations(&self) -> Result<Vec<ReservationRecord>, GatewayError>;

    async fn list_facilities(&self) -> Result<Vec<Facility>, GatewayError>;

    async fn create_facility(&self, payload: &Payload) -> Result<Facility, GatewayError>;

    /// Courts of one facility. Failures are logged and yield an empty list.
    async fn fetch_courts_for_facility(&self, facility: &Code) -> Vec<Court>;
}
