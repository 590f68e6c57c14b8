//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod client_repo;
pub mod court_repo;
pub mod discipline_repo;
pub mod employee_repo;
pub mod facility_repo;
pub mod reservation_repo;

pub use client_repo::ClientRepo;
pub use court_repo::CourtRepo;
pub use discipline_repo::DisciplineRepo;
pub use employee_repo::EmployeeRepo;
pub use facility_repo::FacilityRepo;
pub use reservation_repo::ReservationRepo;
