//! Pure business rules for the reservation engine.

pub mod admission;
pub mod authorization;
pub mod availability;
pub mod lifecycle;
pub mod notification;
pub mod sweep;

pub use availability::AvailabilityModel;
