use super::query::to_query_pairs;
use super::request_common::RequestError;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Per-call configuration of a request.
///
/// Every field defaults to "off": no body, no headers, no placeholder
/// substitution, no query, base URL prefixed, fallback `T::default()` and
/// no alerts. A serialization failure while building the options is kept and
/// turns the call into a failed request instead of an error for the caller.
#[derive(Debug)]
pub struct RequestOptions<T> {
    data: Option<Value>,
    headers: BTreeMap<String, String>,
    url_params: Option<BTreeMap<String, String>>,
    query_params: Vec<(String, String)>,
    hide_loading: bool,
    is_external: bool,
    default_value_error: Option<T>,
    show_alert_if_error: bool,
    alert_msg_if_success: Option<String>,
    build_error: Option<RequestError>,
}

impl<T> Default for RequestOptions<T> {
    fn default() -> Self {
        Self {
            data: None,
            headers: BTreeMap::new(),
            url_params: None,
            query_params: Vec::new(),
            hide_loading: false,
            is_external: false,
            default_value_error: None,
            show_alert_if_error: false,
            alert_msg_if_success: None,
            build_error: None,
        }
    }
}

impl<T> RequestOptions<T> {
    pub fn new() -> Self { Self::default() }

    /// Sets the JSON request body. Ignored by verbs that carry no body.
    #[must_use]
    pub fn data<S: Serialize + ?Sized>(mut self, data: &S) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => self.data = Some(value),
            Err(e) => self.record_error(e.into()),
        }
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds a value for the `:name:` placeholder of the endpoint template.
    #[must_use]
    pub fn url_param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.url_params.get_or_insert_with(BTreeMap::new).insert(name.into(), value.to_string());
        self
    }

    /// Appends every non-null field of `params` to the query string.
    #[must_use]
    pub fn query_params<S: Serialize + ?Sized>(mut self, params: &S) -> Self {
        match to_query_pairs(params) {
            Ok(pairs) => self.query_params.extend(pairs),
            Err(e) => self.record_error(e),
        }
        self
    }

    #[must_use]
    pub fn query_param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.query_params.push((name.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn hide_loading(mut self, hide: bool) -> Self {
        self.hide_loading = hide;
        self
    }

    #[must_use]
    pub fn external(mut self, is_external: bool) -> Self {
        self.is_external = is_external;
        self
    }

    #[must_use]
    pub fn default_value_error(mut self, fallback: T) -> Self {
        self.default_value_error = Some(fallback);
        self
    }

    #[must_use]
    pub fn show_alert_if_error(mut self, show: bool) -> Self {
        self.show_alert_if_error = show;
        self
    }

    #[must_use]
    pub fn alert_msg_if_success(mut self, key: impl Into<String>) -> Self {
        self.alert_msg_if_success = Some(key.into());
        self
    }

    fn record_error(&mut self, error: RequestError) {
        if self.build_error.is_none() {
            self.build_error = Some(error);
        }
    }

    pub fn body(&self) -> Option<&Value> { self.data.as_ref() }
    pub fn headers(&self) -> &BTreeMap<String, String> { &self.headers }
    pub fn url_params(&self) -> Option<&BTreeMap<String, String>> { self.url_params.as_ref() }
    pub fn query(&self) -> &[(String, String)] { &self.query_params }
    pub fn is_loading_hidden(&self) -> bool { self.hide_loading }
    pub fn is_external(&self) -> bool { self.is_external }
    pub fn fallback(&self) -> Option<&T> { self.default_value_error.as_ref() }
    pub fn alerts_on_error(&self) -> bool { self.show_alert_if_error }
    pub fn success_message_key(&self) -> Option<&str> { self.alert_msg_if_success.as_deref() }

    /// Splits the options into the parts consumed when sending and when normalizing.
    pub(crate) fn into_parts(self) -> (RequestParts, ReturnOptions<T>) {
        (
            RequestParts {
                data: self.data,
                headers: self.headers,
                url_params: self.url_params,
                query: self.query_params,
                hide_loading: self.hide_loading,
                is_external: self.is_external,
                build_error: self.build_error,
            },
            ReturnOptions {
                default_value_error: self.default_value_error,
                show_alert_if_error: self.show_alert_if_error,
                alert_msg_if_success: self.alert_msg_if_success,
            },
        )
    }
}

/// The transport-facing half of [`RequestOptions`].
#[derive(Debug)]
pub(crate) struct RequestParts {
    pub(crate) data: Option<Value>,
    pub(crate) headers: BTreeMap<String, String>,
    pub(crate) url_params: Option<BTreeMap<String, String>>,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) hide_loading: bool,
    pub(crate) is_external: bool,
    pub(crate) build_error: Option<RequestError>,
}

/// The normalizer-facing half of [`RequestOptions`].
#[derive(Debug)]
pub struct ReturnOptions<T> {
    pub default_value_error: Option<T>,
    pub show_alert_if_error: bool,
    pub alert_msg_if_success: Option<String>,
}

impl<T> Default for ReturnOptions<T> {
    fn default() -> Self {
        Self { default_value_error: None, show_alert_if_error: false, alert_msg_if_success: None }
    }
}
