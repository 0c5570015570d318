//! Orchestration services tying repositories to the domain rules.

pub mod availability;
pub mod notifications;
pub mod reservations;
pub mod sweeps;

pub use availability::AvailabilityService;
pub use notifications::NotificationEmitter;
pub use reservations::ReservationService;
pub use sweeps::SweepService;
