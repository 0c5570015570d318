//! Reservation expiration background job.
//!
//! Periodically transitions unconfirmed pending reservations inside the
//! 30-minute pre-start window to no-show and notifies the affected users.
//! The interval must stay under the window; configuration validation
//! enforces that.

use chrono::Utc;
use sqlx::PgPool;
use tracing::info;

use crate::services::SweepService;

use super::scheduler::{Job, JobFrequency};

/// Background job running the expiration sweep.
pub struct ReservationExpirationJob {
    service: SweepService,
    interval_minutes: u64,
}

impl ReservationExpirationJob {
    /// Create a new expiration job.
    pub fn new(pool: PgPool, interval_minutes: u64) -> Self {
        Self {
            service: SweepService::new(pool),
            interval_minutes,
        }
    }
}

#[async_trait::async_trait]
impl Job for ReservationExpirationJob {
    fn name(&self) -> &'static str {
        "reservation_expirations"
    }

    fn frequency(&self) -> JobFrequency {
        JobFrequency::Minutes(self.interval_minutes)
    }

    async fn execute(&self) -> Result<(), String> {
        let expired = self
            .service
            .run_expiration_sweep(Utc::now())
            .await
            .map_err(|e| format!("Expiration sweep failed: {}", e))?;

        if expired > 0 {
            info!(expired = expired, "Expired unconfirmed reservations");
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
        let freq = JobFrequency::Minutes(10);
        assert_eq!(freq.duration(), Duration::from_secs(600));
    }

    #[test]
    fn test_interval_fits_no_show_window() {
        let interval_minutes = 10u64;
        assert!(interval_minutes < 30);
    }
}
