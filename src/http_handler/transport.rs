use super::common::HTTPError;
use super::http_request::request_common::PreparedRequest;
use super::http_response::response_common::RawResponse;
use async_trait::async_trait;

/// Seam between the client and the network.
///
/// Implementations perform exactly one attempt. Every HTTP status is a
/// successful `execute`; only failures to obtain a response are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, HTTPError>;
}

/// `reqwest`-backed transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport without a request timeout.
    pub fn new() -> Result<Self, HTTPError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self { Self { client } }

    /// Returns a reference to the internal `reqwest::Client`.
    pub fn client(&self) -> &reqwest::Client { &self.client }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, HTTPError> {
        let headers = request.header_map()?;
        let mut builder = self.client.request(request.method.into(), &request.url).headers(headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        // non-JSON bodies are reported as absent
        let body = serde_json::from_slice(&bytes).ok();
        Ok(RawResponse::new(status, body))
    }
}
