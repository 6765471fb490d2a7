use serde::{Deserialize, Deserializer};
use serde_json::Value;
use strum_macros::Display;

/// Status codes that are never body-inspected.
pub const DENIED_STATUS_CODES: [u16; 4] = [400, 404, 415, 500];

/// Transport-level outcome of a request that reached the server.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    status: u16,
    body: Option<Value>,
}

impl RawResponse {
    pub fn new(status: u16, body: Option<Value>) -> Self { Self { status, body } }
    pub fn json(status: u16, body: Value) -> Self { Self::new(status, Some(body)) }
    pub fn status(&self) -> u16 { self.status }
    pub fn body(&self) -> Option<&Value> { self.body.as_ref() }
    pub fn into_body(self) -> Option<Value> { self.body }
}

/// Classification of every HTTP status code as seen by the normalizer.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 2xx: the body is authoritative.
    Success,
    /// One of [`DENIED_STATUS_CODES`]: the body is ignored.
    Denied,
    /// Any other code. The body is still inspected.
    Unlisted,
}

impl StatusClass {
    pub fn classify(status: u16) -> Self {
        match status {
            _ if DENIED_STATUS_CODES.contains(&status) => StatusClass::Denied,
            200..=299 => StatusClass::Success,
            _ => StatusClass::Unlisted,
        }
    }

    pub fn inspects_body(self) -> bool { !matches!(self, StatusClass::Denied) }
}

/// `[errorKey, errorVar]` pair attached by the server to describe an application failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ApplicationMessages(Vec<Value>);

impl ApplicationMessages {
    pub fn error_key(&self) -> Option<String> { self.0.first().and_then(value_as_text) }
    pub fn error_var(&self) -> Option<String> { self.0.get(1).and_then(value_as_text) }
}

fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Body shape every server endpoint answers with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerEnvelope {
    #[serde(default)]
    pub is_success: bool,
    #[serde(default)]
    pub result: Value,
    #[serde(default, deserialize_with = "lenient_application_messages")]
    pub application_messages: Option<ApplicationMessages>,
}

/// Anything but an array is ignored instead of rejecting the whole envelope.
fn lenient_application_messages<'de, D>(deserializer: D) -> Result<Option<ApplicationMessages>, D::Error>
where D: Deserializer<'de> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(ApplicationMessages(items)),
        _ => None,
    })
}

/// The uniform outcome every caller receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedResponse<T> {
    pub is_success: bool,
    pub result: T,
}

impl<T> NormalizedResponse<T> {
    pub fn success(result: T) -> Self { Self { is_success: true, result } }
    pub fn failure(result: T) -> Self { Self { is_success: false, result } }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    NoConnection,
    Timeout,
    Decode,
    Unknown,
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else if value.is_decode() || value.is_body() {
            ResponseError::Decode
        } else {
            ResponseError::Unknown
        }
    }
}
