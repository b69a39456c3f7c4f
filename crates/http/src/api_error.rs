//! Typed API error for HTTP handlers.
//!
//! Converts operation failures into proper HTTP responses. Handlers return
//! `Result<Json<T>, ApiError>` instead of losing error context with bare
//! `StatusCode`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use invoicedash_storage::StorageError;

/// API error for the admin endpoints.
///
/// `Forbidden` renders a plain-text body, as the guard predates any JSON
/// contract. `Operation` renders `{"error": message}` with status 500, the
/// message carried verbatim from the failed statement.
#[derive(Debug)]
pub enum ApiError {
    /// 403 Forbidden — the deployment-mode guard refused the operation.
    Forbidden,
    /// 500 Internal Server Error — a database statement failed.
    Operation(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Forbidden => (StatusCode::FORBIDDEN, "Forbidden").into_response(),
            Self::Operation(message) => {
                tracing::error!(error = %message, "admin operation failed");
                let body = serde_json::json!({ "error": message });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            },
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        Self::Operation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn forbidden_renders_plain_text() {
        let response = ApiError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Forbidden");
    }

    #[tokio::test]
    async fn operation_renders_error_json() {
        let response = ApiError::Operation("relation does not exist".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "relation does not exist");
    }
}
