use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{
    common_areas, condos, health, notifications, reservations, unit_requests, users,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);
    let request_timeout = Duration::from_secs(config.server.request_timeout_secs);

    let state = AppState {
        pool,
        config: config.clone(),
    };

    // The gateway in front of this service handles authentication; CORS is
    // left open here.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Versioned API surface
    let api_routes = Router::new()
        // Reservations
        .route("/api/v1/reservations", post(reservations::create_reservation))
        .route("/api/v1/reservations", get(reservations::list_my_reservations))
        .route(
            "/api/v1/reservations/:reservation_id/confirm",
            post(reservations::confirm_reservation),
        )
        .route(
            "/api/v1/reservations/:reservation_id",
            delete(reservations::delete_reservation),
        )
        // Condos
        .route("/api/v1/condos", post(condos::create_condo))
        .route("/api/v1/condos/:condo_id", get(condos::get_condo))
        .route(
            "/api/v1/condos/:condo_id/reservations",
            get(reservations::list_condo_reservations),
        )
        // Common areas
        .route(
            "/api/v1/condos/:condo_id/common-areas",
            get(common_areas::list_condo_common_areas)
                .post(common_areas::create_common_area),
        )
        .route(
            "/api/v1/common-areas/:area_id",
            put(common_areas::update_common_area).delete(common_areas::delete_common_area),
        )
        .route(
            "/api/v1/common-areas/:area_id/availability",
            get(common_areas::get_area_availability),
        )
        .route(
            "/api/v1/common-areas/:area_id/quotas/:unit_id",
            put(common_areas::set_unit_quota),
        )
        // Unit requests
        .route(
            "/api/v1/condos/:condo_id/unit-requests",
            post(unit_requests::create_unit_request).get(unit_requests::list_unit_requests),
        )
        .route(
            "/api/v1/unit-requests/:request_id/approve",
            post(unit_requests::approve_unit_request),
        )
        // Users
        .route("/api/v1/users/me", get(users::me))
        // Notifications
        .route("/api/v1/notifications", get(notifications::list_notifications))
        .route(
            "/api/v1/notifications/unread-count",
            get(notifications::unread_count),
        )
        .route(
            "/api/v1/notifications/reset-unread",
            post(notifications::reset_unread),
        );

    // Public routes (no user identity required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(trace_id))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
