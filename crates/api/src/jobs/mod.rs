//! Background job scheduler and job implementations.

mod pool_metrics;
mod reservation_expirations;
mod reservation_reminders;
mod scheduler;

pub use pool_metrics::PoolMetricsJob;
pub use reservation_expirations::ReservationExpirationJob;
pub use reservation_reminders::ReservationReminderJob;
pub use scheduler::JobScheduler;
