use super::http_request::request_common::{HTTPRequestMethod, PreparedRequest};
use super::http_request::request_options::RequestOptions;
use super::http_response::normalizer::ResponseNormalizer;
use super::http_response::response_common::NormalizedResponse;
use super::transport::{ReqwestTransport, Transport};
use super::url_builder::{generate_url, unresolved_placeholders};
use super::common::HTTPError;
use crate::connectivity::ConnectivityProbe;
use crate::environment::Environment;
use crate::localization::Translator;
use crate::notification::NotificationSink;
use crate::{error, event, warn};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Request wrapper bound to one API base URL.
///
/// Every verb returns a [`NormalizedResponse`]; failures never surface as
/// errors and are reported through the injected notification sink instead.
#[derive(Clone)]
pub struct HTTPClient {
    /// Performs the actual network round trip.
    transport: Arc<dyn Transport>,
    /// Base URL for the API, prepended to all non-external endpoint paths.
    base_url: String,
    normalizer: ResponseNormalizer,
}

impl HTTPClient {
    pub fn new(
        base_url: &str,
        transport: Arc<dyn Transport>,
        translator: Arc<dyn Translator>,
        notifier: Arc<dyn NotificationSink>,
        connectivity: Arc<dyn ConnectivityProbe>,
    ) -> Self {
        HTTPClient {
            transport,
            base_url: String::from(base_url),
            normalizer: ResponseNormalizer::new(translator, notifier, connectivity),
        }
    }

    /// Builds a client for `env` that talks to the network through `reqwest`.
    pub fn for_environment(
        env: &Environment,
        translator: Arc<dyn Translator>,
        notifier: Arc<dyn NotificationSink>,
        connectivity: Arc<dyn ConnectivityProbe>,
    ) -> Result<Self, HTTPError> {
        let transport = Arc::new(ReqwestTransport::new()?);
        Ok(Self::new(env.api_base_url(), transport, translator, notifier, connectivity))
    }

    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { self.base_url.as_str() }

    pub async fn get<T>(&self, endpoint: &str, options: RequestOptions<T>) -> NormalizedResponse<T>
    where T: DeserializeOwned + Default {
        self.request(HTTPRequestMethod::Get, endpoint, options).await
    }

    pub async fn post<T>(&self, endpoint: &str, options: RequestOptions<T>) -> NormalizedResponse<T>
    where T: DeserializeOwned + Default {
        self.request(HTTPRequestMethod::Post, endpoint, options).await
    }

    pub async fn put<T>(&self, endpoint: &str, options: RequestOptions<T>) -> NormalizedResponse<T>
    where T: DeserializeOwned + Default {
        self.request(HTTPRequestMethod::Put, endpoint, options).await
    }

    pub async fn delete<T>(&self, endpoint: &str, options: RequestOptions<T>) -> NormalizedResponse<T>
    where T: DeserializeOwned + Default {
        self.request(HTTPRequestMethod::Delete, endpoint, options).await
    }

    /// Sends one request and normalizes whatever comes back.
    pub async fn request<T>(
        &self,
        method: HTTPRequestMethod,
        endpoint: &str,
        options: RequestOptions<T>,
    ) -> NormalizedResponse<T>
    where
        T: DeserializeOwned + Default,
    {
        let (parts, return_options) = options.into_parts();
        let url = generate_url(&self.base_url, endpoint, parts.url_params.as_ref(), parts.is_external);

        let response = if let Some(e) = parts.build_error {
            error!("Could not build {method} request for {url}: {e:?}");
            None
        } else {
            let unresolved = unresolved_placeholders(&url);
            if !unresolved.is_empty() {
                warn!("Sending {method} {url} with unresolved placeholders: {unresolved:?}");
            }
            event!("{method} {url} (hide_loading: {})", parts.hide_loading);
            let prepared = PreparedRequest {
                method,
                url: url.clone(),
                headers: parts.headers,
                query: parts.query,
                body: if method.carries_body() { parts.data } else { None },
            };
            match self.transport.execute(prepared).await {
                Ok(response) => {
                    event!("{method} {url} -> {}", response.status());
                    Some(response)
                }
                Err(e) => {
                    warn!("{method} {url} failed without a response: {e:?}");
                    None
                }
            }
        };

        self.normalizer.handle_return(response, return_options)
    }
}
