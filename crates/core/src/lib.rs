//! Shared domain vocabulary for the sports reservation system.
//!
//! Used by the backend (`deportivos-api`, `deportivos-db`) and by the
//! reservation form client (`deportivos-client`) so both sides agree on
//! identifiers, defaults, status values and persistence field names.

pub mod error;
pub mod fields;
pub mod reservation;
pub mod types;
