use serde_json::Value;
use std::collections::BTreeMap;
use strum_macros::Display;

/// HTTP verbs supported by the client.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HTTPRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HTTPRequestMethod {
    /// Whether a JSON body is sent with this verb.
    pub fn carries_body(self) -> bool { matches!(self, HTTPRequestMethod::Post | HTTPRequestMethod::Put) }
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
            HTTPRequestMethod::Put => reqwest::Method::PUT,
            HTTPRequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully resolved request, ready to be handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HTTPRequestMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl PreparedRequest {
    pub fn header_map(&self) -> Result<reqwest::header::HeaderMap, RequestError> {
        let mut headers = reqwest::header::HeaderMap::new();
        for (name, value) in &self.headers {
            let header_name = reqwest::header::HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| RequestError::InvalidHeaderName(name.clone()))?;
            let header_value = reqwest::header::HeaderValue::from_str(value)
                .map_err(|_| RequestError::InvalidHeaderValue(name.clone()))?;
            headers.append(header_name, header_value);
        }
        Ok(headers)
    }
}

#[derive(Debug, Display)]
pub enum RequestError {
    InvalidHeaderName(String),
    InvalidHeaderValue(String),
    Serialization(serde_json::Error),
    InvalidQuery(String),
    Build(String),
}

impl std::error::Error for RequestError {}

impl From<serde_json::Error> for RequestError {
    fn from(value: serde_json::Error) -> Self { RequestError::Serialization(value) }
}
