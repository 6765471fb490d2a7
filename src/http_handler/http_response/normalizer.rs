use super::response_common::{NormalizedResponse, RawResponse, ServerEnvelope, StatusClass};
use crate::connectivity::ConnectivityProbe;
use crate::http_handler::http_request::request_options::ReturnOptions;
use crate::localization::{
    CONNECTION_ERROR_KEY, SERVER_ERRORS_PREFIX, Translator, UNEXPECTED_ERROR_KEY,
};
use crate::notification::{Notification, NotificationSink};
use crate::{error, warn};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Turns raw transport outcomes into [`NormalizedResponse`]s and raises the
/// matching alerts.
#[derive(Clone)]
pub struct ResponseNormalizer {
    translator: Arc<dyn Translator>,
    notifier: Arc<dyn NotificationSink>,
    connectivity: Arc<dyn ConnectivityProbe>,
}

impl ResponseNormalizer {
    pub fn new(
        translator: Arc<dyn Translator>,
        notifier: Arc<dyn NotificationSink>,
        connectivity: Arc<dyn ConnectivityProbe>,
    ) -> Self {
        Self { translator, notifier, connectivity }
    }

    /// Normalizes `response` (absent on transport failure).
    ///
    /// Offline state wins over any response. Denied statuses and missing or
    /// malformed bodies yield `{false, fallback}`. Otherwise the body decides,
    /// with a `null` result replaced by the fallback when one was given.
    pub fn handle_return<T>(
        &self,
        response: Option<RawResponse>,
        options: ReturnOptions<T>,
    ) -> NormalizedResponse<T>
    where
        T: DeserializeOwned + Default,
    {
        let ReturnOptions { default_value_error, show_alert_if_error, alert_msg_if_success } = options;
        let mut error_msg = self.translator.translate(UNEXPECTED_ERROR_KEY, None);

        let normalized = if self.connectivity.is_online() {
            match response.and_then(Self::inspectable_envelope) {
                Some(envelope) => {
                    if let Some(messages) = &envelope.application_messages {
                        if let Some(key) = messages.error_key() {
                            let var = messages.error_var();
                            error_msg = self
                                .translator
                                .translate(&format!("{SERVER_ERRORS_PREFIX}.{key}"), var.as_deref());
                        }
                    }
                    Self::read_envelope(envelope, default_value_error)
                }
                None => NormalizedResponse::failure(default_value_error.unwrap_or_default()),
            }
        } else {
            error_msg = self.translator.translate(CONNECTION_ERROR_KEY, None);
            NormalizedResponse::failure(default_value_error.unwrap_or_default())
        };

        self.generate_alert(
            normalized.is_success,
            error_msg,
            show_alert_if_error,
            alert_msg_if_success.as_deref(),
        );
        normalized
    }

    /// Returns the parsed body if the status allows inspection and the body is an envelope.
    fn inspectable_envelope(response: RawResponse) -> Option<ServerEnvelope> {
        let status = response.status();
        match StatusClass::classify(status) {
            StatusClass::Denied => return None,
            StatusClass::Unlisted => {
                warn!("Status {status} is not a success code; reading the response body anyway");
            }
            StatusClass::Success => (),
        }
        let Some(body) = response.into_body() else {
            error!("Response with status {status} carried no JSON body");
            return None;
        };
        match serde_json::from_value::<ServerEnvelope>(body) {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                error!("Response with status {status} is not a valid envelope: {e}");
                None
            }
        }
    }

    fn read_envelope<T>(envelope: ServerEnvelope, fallback: Option<T>) -> NormalizedResponse<T>
    where T: DeserializeOwned + Default {
        let ServerEnvelope { is_success, result, .. } = envelope;
        if result.is_null() {
            return NormalizedResponse { is_success, result: fallback.unwrap_or_default() };
        }
        match serde_json::from_value::<T>(result) {
            Ok(result) => NormalizedResponse { is_success, result },
            Err(e) => {
                error!("Could not decode response result: {e}");
                NormalizedResponse::failure(fallback.unwrap_or_default())
            }
        }
    }

    fn generate_alert(
        &self,
        is_success: bool,
        error_msg: String,
        show_alert_if_error: bool,
        alert_msg_if_success: Option<&str>,
    ) {
        if is_success {
            if let Some(key) = alert_msg_if_success {
                self.notifier.dispatch(Notification::success(self.translator.translate(key, None)));
            }
        } else if show_alert_if_error {
            self.notifier.dispatch(Notification::error(error_msg));
        }
    }
}
