//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where the resource is editable, a `Deserialize` update DTO

pub mod client;
pub mod court;
pub mod discipline;
pub mod facility;
pub mod form_data;
pub mod reservation;
