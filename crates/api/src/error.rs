use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::ReservationError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Domain(#[from] ReservationError),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

/// Error code and HTTP status for each domain rejection. Every rejection
/// keeps its own code so clients can show a precise message.
pub(crate) fn domain_error_parts(err: &ReservationError) -> (StatusCode, &'static str) {
    match err {
        ReservationError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        ReservationError::Forbidden(_) => (StatusCode::FORBIDDEN, "forbidden"),
        ReservationError::AmenityUnavailable => (StatusCode::CONFLICT, "amenity_unavailable"),
        ReservationError::OutsideSchedule => (StatusCode::CONFLICT, "outside_schedule"),
        ReservationError::NoQuota => (StatusCode::CONFLICT, "no_quota"),
        ReservationError::CapacityExceeded { .. } => (StatusCode::CONFLICT, "capacity_exceeded"),
        ReservationError::DailyQuotaExceeded { .. } => {
            (StatusCode::CONFLICT, "daily_quota_exceeded")
        }
        ReservationError::InvalidPartySize(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, "invalid_party_size")
        }
        ReservationError::WindowTooSoon => (StatusCode::UNPROCESSABLE_ENTITY, "window_too_soon"),
        ReservationError::WindowTooFar => (StatusCode::UNPROCESSABLE_ENTITY, "window_too_far"),
        ReservationError::TooLateToCancel => (StatusCode::CONFLICT, "too_late_to_cancel"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg.clone()),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone()),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg.clone()),
            ApiError::Domain(err) => {
                let (status, code) = domain_error_parts(err);
                (status, code, err.to_string())
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                )
            }
            ApiError::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "service_unavailable",
                msg.clone(),
            ),
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".into()),
            sqlx::Error::Database(db_err) => {
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        "23505" => ApiError::Conflict("Resource already exists".into()),
                        "23503" => ApiError::NotFound("Referenced resource not found".into()),
                        _ => ApiError::Internal(format!("Database error: {}", db_err)),
                    }
                } else {
                    ApiError::Internal(format!("Database error: {}", db_err))
                }
            }
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let detail = e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "invalid value".to_string());
                    format!("{field}: {detail}")
                })
            })
            .collect();

        ApiError::Validation(messages.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        let response = ApiError::NotFound("missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_forbidden_status() {
        let response = ApiError::Forbidden("denied".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_validation_status() {
        let response = ApiError::Validation("bad input".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_domain_capacity_exceeded_maps_to_conflict() {
        let err = ApiError::from(ReservationError::CapacityExceeded {
            requested: 5,
            remaining: 4,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_domain_window_maps_to_unprocessable() {
        let response = ApiError::from(ReservationError::WindowTooSoon).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = ApiError::from(ReservationError::WindowTooFar).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_domain_not_found_maps_to_404() {
        let response = ApiError::from(ReservationError::NotFound("Reservation")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_domain_invalid_party_size() {
        let response = ApiError::from(ReservationError::InvalidPartySize(0)).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_sqlx_row_not_found_maps_to_404() {
        let err = ApiError::from(sqlx::Error::RowNotFound);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", ApiError::Unauthorized("test".to_string())),
            "Unauthorized: test"
        );
        assert_eq!(
            format!("{}", ApiError::Domain(ReservationError::AmenityUnavailable)),
            "The common area is not available"
        );
    }
}
