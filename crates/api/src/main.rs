use anyhow::Result;
use std::time::Duration;
use tracing::info;

use condo_manager_api::jobs::{
    JobScheduler, PoolMetricsJob, ReservationExpirationJob, ReservationReminderJob,
};
use condo_manager_api::{app, config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging and metrics
    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics();

    info!("Starting Condo Manager API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Reservation engine running the {} availability model",
        config.reservations.model
    );

    // Create database pool
    let pool = persistence::db::create_pool(&config.pool_config()).await?;

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await?;
    info!("Migrations completed");

    // Start background jobs: the two reservation sweeps plus pool gauges
    let mut scheduler = JobScheduler::new();
    scheduler.register(ReservationReminderJob::new(
        pool.clone(),
        config.reservations.reminder_sweep_minutes,
    ));
    scheduler.register(ReservationExpirationJob::new(
        pool.clone(),
        config.reservations.expiration_sweep_minutes,
    ));
    scheduler.register(PoolMetricsJob::new(pool.clone()));
    scheduler.start();

    // Build application
    let addr = config.socket_addr();
    let app = app::create_app(config, pool);

    // Start server
    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Drain background jobs before exit
    scheduler.shutdown();
    scheduler.wait_for_shutdown(Duration::from_secs(10)).await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
