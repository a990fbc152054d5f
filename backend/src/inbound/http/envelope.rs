//! Uniform JSON result envelope returned by every user endpoint.
//!
//! On the wire the envelope is `{"code":"SUCCESS","data":...}` or
//! `{"code":"ERROR","message":"..."}`. In Rust it is a tagged union, so a
//! success can never carry a message and an error can never carry data.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Outcome discriminator serialised as `SUCCESS` or `ERROR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    /// The operation completed.
    Success,
    /// The operation was rejected; see the message.
    Error,
}

/// Result envelope generic over the success payload.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use user_api::inbound::http::envelope::JsonResult;
///
/// let ok = serde_json::to_value(JsonResult::success(6)).expect("serialise");
/// assert_eq!(ok, json!({"code": "SUCCESS", "data": 6}));
///
/// let err = serde_json::to_value(JsonResult::<u32>::error("user not found")).expect("serialise");
/// assert_eq!(err, json!({"code": "ERROR", "message": "user not found"}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonResult<T> {
    /// Successful outcome, optionally carrying a payload.
    Success(Option<T>),
    /// Failed outcome with a human-readable reason.
    Error(String),
}

impl<T> JsonResult<T> {
    /// Wrap a successful payload.
    pub fn success(data: T) -> Self {
        Self::Success(Some(data))
    }

    /// Success without a payload.
    pub fn empty() -> Self {
        Self::Success(None)
    }

    /// Wrap a failure reason.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Discriminator for this outcome.
    pub fn code(&self) -> ResultCode {
        match self {
            Self::Success(_) => ResultCode::Success,
            Self::Error(_) => ResultCode::Error,
        }
    }

    /// Error message, present only for [`JsonResult::Error`].
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error(message) => Some(message.as_str()),
        }
    }

    /// Payload, present only for a successful outcome that carries data.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => data.as_ref(),
            Self::Error(_) => None,
        }
    }

    /// Consume the envelope and return the payload, if any.
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => data,
            Self::Error(_) => None,
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for JsonResult<T> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(data) => Self::success(data),
            Err(err) => Self::error(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct JsonResultRef<'a, T> {
    code: ResultCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
}

impl<T: Serialize> Serialize for JsonResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        JsonResultRef {
            code: self.code(),
            message: self.message(),
            data: self.data(),
        }
        .serialize(serializer)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonResultDto<T> {
    code: ResultCode,
    message: Option<String>,
    data: Option<T>,
}

/// Violations of the envelope invariants found while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonResultValidationError {
    /// `SUCCESS` arrived with a `message`.
    MessageOnSuccess,
    /// `ERROR` arrived with `data`.
    DataOnError,
    /// `ERROR` arrived without a `message`.
    MissingMessage,
}

impl std::fmt::Display for JsonResultValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MessageOnSuccess => write!(f, "a SUCCESS result must not carry a message"),
            Self::DataOnError => write!(f, "an ERROR result must not carry data"),
            Self::MissingMessage => write!(f, "an ERROR result must carry a message"),
        }
    }
}

impl std::error::Error for JsonResultValidationError {}

impl<T> TryFrom<JsonResultDto<T>> for JsonResult<T> {
    type Error = JsonResultValidationError;

    fn try_from(value: JsonResultDto<T>) -> Result<Self, JsonResultValidationError> {
        let JsonResultDto {
            code,
            message,
            data,
        } = value;
        match (code, message, data) {
            (ResultCode::Success, None, data) => Ok(JsonResult::Success(data)),
            (ResultCode::Success, Some(_), _) => Err(JsonResultValidationError::MessageOnSuccess),
            (ResultCode::Error, _, Some(_)) => Err(JsonResultValidationError::DataOnError),
            (ResultCode::Error, Some(message), None) => Ok(JsonResult::Error(message)),
            (ResultCode::Error, None, None) => Err(JsonResultValidationError::MissingMessage),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for JsonResult<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dto = JsonResultDto::<T>::deserialize(deserializer)?;
        Self::try_from(dto).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    fn empty_success_omits_data_and_message() {
        let value = serde_json::to_value(JsonResult::<u32>::empty()).expect("serialise");
        assert_eq!(value, json!({"code": "SUCCESS"}));
    }

    #[rstest]
    fn success_carries_list_payloads() {
        let value = serde_json::to_value(JsonResult::success(vec![1, 2])).expect("serialise");
        assert_eq!(value, json!({"code": "SUCCESS", "data": [1, 2]}));
    }

    #[rstest]
    fn from_result_maps_errors_to_their_display_text() {
        let outcome: Result<u32, std::fmt::Error> = Err(std::fmt::Error);
        let envelope = JsonResult::from(outcome);
        assert_eq!(envelope.code(), ResultCode::Error);
        assert!(envelope.data().is_none());
        assert!(envelope.message().is_some());
    }

    #[rstest]
    fn from_result_maps_values_to_success() {
        let outcome: Result<u32, std::fmt::Error> = Ok(6);
        assert_eq!(JsonResult::from(outcome), JsonResult::success(6));
    }

    #[rstest]
    #[case(json!({"code": "SUCCESS", "data": 6}), JsonResult::success(6))]
    #[case(json!({"code": "SUCCESS"}), JsonResult::empty())]
    #[case(
        json!({"code": "ERROR", "message": "user not found"}),
        JsonResult::error("user not found")
    )]
    fn decodes_valid_envelopes(#[case] payload: Value, #[case] expected: JsonResult<u32>) {
        let decoded: JsonResult<u32> = serde_json::from_value(payload).expect("decode");
        assert_eq!(decoded, expected);
    }

    #[rstest]
    #[case(json!({"code": "SUCCESS", "message": "hi", "data": 1}))]
    #[case(json!({"code": "ERROR", "message": "bad", "data": 1}))]
    #[case(json!({"code": "ERROR"}))]
    #[case(json!({"code": "MAYBE"}))]
    fn rejects_envelopes_breaking_invariants(#[case] payload: Value) {
        let decoded: Result<JsonResult<u32>, _> = serde_json::from_value(payload);
        assert!(decoded.is_err());
    }

    #[rstest]
    fn into_data_drops_the_wrapper() {
        assert_eq!(JsonResult::success("Tom").into_data(), Some("Tom"));
        assert_eq!(JsonResult::<&str>::error("nope").into_data(), None);
    }
}
