//! Response envelope types for API handlers.
//!
//! The reservation form reads `mensaje` for confirmations, `reserva` for the
//! affected reservation and `encontrada` for lookups, so handlers return
//! these typed envelopes instead of ad-hoc `json!` bodies.

use serde::Serialize;

/// `{ "mensaje": ... }` acknowledgement for writes without a body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensaje: String,
}

impl MessageResponse {
    pub fn new(mensaje: impl Into<String>) -> Self {
        Self {
            mensaje: mensaje.into(),
        }
    }
}

/// `{ "mensaje": ..., "reserva": T }` returned after creating a reservation.
#[derive(Debug, Serialize)]
pub struct ReservationCreated<T: Serialize> {
    pub mensaje: String,
    pub reserva: T,
}

/// `{ "encontrada": true, "reserva": T }` returned by the code lookup.
#[derive(Debug, Serialize)]
pub struct ReservationLookup<T: Serialize> {
    pub encontrada: bool,
    pub reserva: T,
}
