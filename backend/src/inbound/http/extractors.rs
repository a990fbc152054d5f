//! Extractors turning malformed input into `ERROR` envelopes.
//!
//! Without these, Actix answers bad JSON or a non-numeric path id with a
//! plain-text 400, breaking the uniform response shape.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::inbound::http::error::ApiError;

/// Default maximum request body size in bytes.
pub const DEFAULT_JSON_LIMIT: usize = 1024 * 1024;

/// Body size configuration read by [`OptionalJson`].
pub fn payload_config(limit: usize) -> web::PayloadConfig {
    web::PayloadConfig::new(limit)
}

/// Path parameter configuration with the envelope error handler.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ApiError::invalid_request(format!("invalid user id: {err}")).into())
}

fn malformed(reason: impl std::fmt::Display) -> ApiError {
    ApiError::invalid_request(format!("malformed request body: {reason}"))
}

fn is_json(content_type: &str) -> bool {
    content_type.is_empty() || content_type.ends_with("/json") || content_type.ends_with("+json")
}

/// JSON body that may be absent.
///
/// An empty or whitespace-only body and a literal `null` both yield `None`.
/// Anything else must be JSON for `T`, sent with a JSON content type (or
/// none), within the [`payload_config`] limit.
#[derive(Debug)]
pub struct OptionalJson<T>(pub Option<T>);

impl<T> OptionalJson<T> {
    /// Unwrap the decoded body.
    pub fn into_inner(self) -> Option<T> {
        self.0
    }
}

impl<T: DeserializeOwned + 'static> FromRequest for OptionalJson<T> {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, ApiError>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json_content = is_json(req.content_type());
        let body = web::Bytes::from_request(req, payload);
        Box::pin(async move {
            let bytes = body.await.map_err(malformed)?;
            if bytes.iter().all(u8::is_ascii_whitespace) {
                return Ok(Self(None));
            }
            if !json_content {
                return Err(malformed("expected a JSON content type"));
            }
            serde_json::from_slice::<Option<T>>(&bytes)
                .map(Self)
                .map_err(malformed)
        })
    }
}
