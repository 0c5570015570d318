//! Requester identity extractor.
//!
//! Authentication lives at the upstream gateway, which injects the
//! authenticated user's id as the `X-User-Id` header. This backend treats
//! that id as an already-validated input; a request without the header is
//! unauthorized.

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::error::ApiError;

/// Header carrying the authenticated user's id.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// The authenticated user on whose behalf a request runs.
#[derive(Debug, Clone, Copy)]
pub struct Requester {
    pub user_id: Uuid,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for Requester
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing X-User-Id header".to_string()))?;

        let user_id = header
            .parse::<Uuid>()
            .map_err(|_| ApiError::Unauthorized("Invalid X-User-Id header".to_string()))?;

        Ok(Requester { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<Requester, ApiError> {
        let (mut parts, _) = request.into_parts();
        Requester::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_valid_user_id() {
        let id = Uuid::new_v4();
        let request = Request::builder()
            .header(USER_ID_HEADER, id.to_string())
            .body(())
            .unwrap();

        let requester = extract(request).await.unwrap();
        assert_eq!(requester.user_id, id);
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        let request = Request::builder().body(()).unwrap();
        let result = extract(request).await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_malformed_header_is_unauthorized() {
        let request = Request::builder()
            .header(USER_ID_HEADER, "not-a-uuid")
            .body(())
            .unwrap();
        let result = extract(request).await;
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }
}
