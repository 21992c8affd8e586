//! API error types with HTTP response mapping.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::InvalidEmail;
use domain::RequestError;
use orchestrator::OrchestrationError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be turned into a valid mutation.
    BadRequest(String),
    /// The mutation ran and ended in a terminal failure.
    Orchestration(OrchestrationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            ApiError::Orchestration(err) => orchestration_error_to_response(err),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn orchestration_error_to_response(err: OrchestrationError) -> (StatusCode, serde_json::Value) {
    match &err {
        OrchestrationError::CustomerNotFound { .. } => (
            StatusCode::NOT_FOUND,
            serde_json::json!({ "error": err.to_string() }),
        ),
        // The request itself is well-formed; its content was rejected.
        OrchestrationError::ProductValidationFailed { failed_lines } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            serde_json::json!({
                "error": err.to_string(),
                "failed_lines": failed_lines,
            }),
        ),
        OrchestrationError::CatalogUnavailable { lines } => (
            StatusCode::BAD_GATEWAY,
            serde_json::json!({
                "error": err.to_string(),
                "unreachable_lines": lines,
            }),
        ),
        OrchestrationError::DirectoryUnavailable { .. }
        | OrchestrationError::CartStoreUnavailable { .. } => (
            StatusCode::BAD_GATEWAY,
            serde_json::json!({ "error": err.to_string() }),
        ),
    }
}

/// `Json` extractor whose rejection is reported as [`ApiError::BadRequest`].
///
/// The stock extractor answers unparseable bodies in plain text with its
/// own status codes; this wrapper keeps every error the API emits in the
/// same `{ "error": ... }` shape.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<OrchestrationError> for ApiError {
    fn from(err: OrchestrationError) -> Self {
        ApiError::Orchestration(err)
    }
}

impl From<RequestError> for ApiError {
    fn from(err: RequestError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<InvalidEmail> for ApiError {
    fn from(err: InvalidEmail) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
