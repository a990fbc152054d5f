//! HTTP adapter mapping for store failures.
//!
//! Purpose: keep [`UserStoreError`] HTTP-agnostic while letting Actix handlers
//! turn failures into `ERROR` envelopes with a matching status code.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::ports::UserStoreError;
use crate::inbound::http::envelope::JsonResult;
use crate::middleware::trace::{TRACE_ID_HEADER, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Failure category deciding the response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested user does not exist.
    NotFound,
    /// The server could not complete the request.
    InternalError,
}

impl ErrorCode {
    fn status(self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error returned by HTTP handlers, rendered as an `ERROR` envelope.
///
/// # Examples
/// ```
/// use actix_web::ResponseError;
/// use actix_web::http::StatusCode;
/// use user_api::inbound::http::error::ApiError;
///
/// let err = ApiError::not_found("user not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl ApiError {
    /// Create an error, capturing the ambient trace identifier if any.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Message as logged; internal errors are redacted on the wire.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier captured at construction.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    fn client_message(&self) -> &str {
        match self.code {
            ErrorCode::InternalError => INTERNAL_MESSAGE,
            ErrorCode::InvalidRequest | ErrorCode::NotFound => self.message(),
        }
    }
}

impl From<UserStoreError> for ApiError {
    fn from(err: UserStoreError) -> Self {
        match err {
            UserStoreError::Validation { .. } => Self::invalid_request(err.to_string()),
            UserStoreError::NotFound { .. } => Self::not_found(err.to_string()),
            UserStoreError::IdsExhausted | UserStoreError::Unavailable { .. } => {
                Self::internal(err.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.code.status()
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = self.trace_id().unwrap_or_default();
        match self.code {
            ErrorCode::InternalError => {
                error!(trace_id, message = %self.message, "request failed");
            }
            ErrorCode::InvalidRequest | ErrorCode::NotFound => {
                warn!(trace_id, message = %self.message, "request rejected");
            }
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.clone()));
        }
        builder.json(JsonResult::<()>::error(self.client_message()))
    }
}

#[cfg(test)]
mod tests {
    //! Tests for the error envelope formatting and status mapping.

    use super::*;
    use crate::domain::UserId;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn body_json(err: &ApiError) -> Value {
        let bytes = to_bytes(err.error_response().into_body())
            .await
            .expect("read error body");
        serde_json::from_slice(&bytes).expect("error body is JSON")
    }

    #[rstest]
    #[case(UserStoreError::validation("user or username is empty"), StatusCode::BAD_REQUEST)]
    #[case(UserStoreError::not_found(UserId::new(9)), StatusCode::NOT_FOUND)]
    #[case(UserStoreError::IdsExhausted, StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(UserStoreError::unavailable("poisoned"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn store_errors_map_to_status(#[case] err: UserStoreError, #[case] expected: StatusCode) {
        assert_eq!(ApiError::from(err).status_code(), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn not_found_renders_error_envelope() {
        let err = ApiError::from(UserStoreError::not_found(UserId::new(999)));
        assert_eq!(
            body_json(&err).await,
            json!({"code": "ERROR", "message": "user not found"})
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn internal_errors_are_redacted() {
        let err = ApiError::from(UserStoreError::unavailable("user records lock poisoned"));
        assert_eq!(
            body_json(&err).await,
            json!({"code": "ERROR", "message": "Internal server error"})
        );
        assert_eq!(err.message(), "user store unavailable: user records lock poisoned");
    }

    #[rstest]
    #[tokio::test]
    async fn captures_trace_id_in_scope() {
        let trace_id: TraceId = "00000000-0000-0000-0000-000000000000"
            .parse()
            .expect("valid UUID");
        let err = TraceId::scope(trace_id, async { ApiError::invalid_request("bad") }).await;

        assert_eq!(err.trace_id(), Some("00000000-0000-0000-0000-000000000000"));
        let response = err.error_response();
        let header = response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|value| value.to_str().ok());
        assert_eq!(header, Some("00000000-0000-0000-0000-000000000000"));
    }

    #[rstest]
    fn trace_id_is_absent_out_of_scope() {
        assert!(ApiError::internal("boom").trace_id().is_none());
    }
}
