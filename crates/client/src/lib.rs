//! Reservation form client.
//!
//! Talks to the sports reservation backend through a [`ReservationGateway`]
//! and drives the reservation form: cascading facility/court/discipline
//! selection, debounced lookup of existing reservations by code, and
//! submission of new ones. [`FormSession`] ties the pieces together in a
//! single cooperative event loop.

pub mod cascade;
pub mod config;
pub mod error;
pub mod form;
pub mod gateway;
pub mod http;
pub mod lookup;
pub mod model;
pub mod session;
pub mod submit;

pub use config::{ConfigError, GatewayConfig};
pub use error::GatewayError;
pub use gateway::ReservationGateway;
pub use http::HttpGateway;
pub use session::{FormEvent, FormSession, FormView};
