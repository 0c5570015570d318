//! Reservation reminder background job.
//!
//! Periodically reminds users of pending reservations starting within the
//! next hour. The interval must stay under the one-hour reminder window so
//! no reservation slips through between sweeps; configuration validation
//! enforces that.

use chrono::Utc;
use sqlx::PgPool;
use tracing::info;

use crate::services::SweepService;

use super::scheduler::{Job, JobFrequency};

/// Background job running the reminder sweep.
pub struct ReservationReminderJob {
    service: SweepService,
    interval_minutes: u64,
}

impl ReservationReminderJob {
    /// Create a new reminder job.
    pub fn new(pool: PgPool, interval_minutes: u64) -> Self {
        Self {
            service: SweepService::new(pool),
            interval_minutes,
        }
    }
}

#[async_trait::async_trait]
impl Job for ReservationReminderJob {
    fn name(&self) -> &'static str {
        "reservation_reminders"
    }

    fn frequency(&self) -> JobFrequency {
        JobFrequency::Minutes(self.interval_minutes)
    }

    async fn execute(&self) -> Result<(), String> {
        let sent = self
            .service
            .run_reminder_sweep(Utc::now())
            .await
            .map_err(|e| format!("Reminder sweep failed: {}", e))?;

        if sent > 0 {
            info!(reminders_sent = sent, "Sent reservation reminders");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_job_frequency_follows_config() {
        let freq = JobFrequency::Minutes(15);
        assert_eq!(freq.duration(), Duration::from_secs(900));
    }

    #[test]
    fn test_interval_fits_reminder_window() {
        // any interval under an hour covers the window
        let interval_minutes = 15u64;
        assert!(interval_minutes < 60);
    }
}
