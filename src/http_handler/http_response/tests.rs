use super::normalizer::ResponseNormalizer;
use super::response_common::{NormalizedResponse, RawResponse, StatusClass};
use crate::connectivity::ConnectivityFlag;
use crate::http_handler::http_request::request_options::ReturnOptions;
use crate::localization::{CONNECTION_ERROR_KEY, MessageCatalog, Translator, UNEXPECTED_ERROR_KEY};
use crate::notification::{AlertChannel, AlertVariant, Notification};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::TryRecvError;

struct Fixture {
    normalizer: ResponseNormalizer,
    connectivity: ConnectivityFlag,
    alerts: Receiver<Notification>,
    catalog: MessageCatalog,
}

fn fixture() -> Fixture {
    let mut catalog = MessageCatalog::builtin();
    catalog.insert("server-errors.E42", "Invalid field {{var}}");
    let channel = AlertChannel::new();
    let alerts = channel.subscribe();
    let connectivity = ConnectivityFlag::default();
    let normalizer = ResponseNormalizer::new(
        Arc::new(catalog.clone()),
        Arc::new(channel),
        Arc::new(connectivity.clone()),
    );
    Fixture { normalizer, connectivity, alerts, catalog }
}

fn options(fallback: Option<Value>, alert_on_error: bool, success_key: Option<&str>) -> ReturnOptions<Value> {
    ReturnOptions {
        default_value_error: fallback,
        show_alert_if_error: alert_on_error,
        alert_msg_if_success: success_key.map(String::from),
    }
}

fn drain(rx: &mut Receiver<Notification>) -> Vec<Notification> {
    let mut out = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(n) => out.push(n),
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            Err(TryRecvError::Lagged(_)) => (),
        }
    }
    out
}

#[test]
fn test_status_classification() {
    assert_eq!(StatusClass::classify(200), StatusClass::Success);
    assert_eq!(StatusClass::classify(204), StatusClass::Success);
    for code in [400, 404, 415, 500] {
        assert_eq!(StatusClass::classify(code), StatusClass::Denied);
        assert!(!StatusClass::classify(code).inspects_body());
    }
    for code in [301, 401, 403, 409, 422, 502, 503] {
        assert_eq!(StatusClass::classify(code), StatusClass::Unlisted);
        assert!(StatusClass::classify(code).inspects_body());
    }
}

#[test]
fn test_denied_status_ignores_body() {
    let mut f = fixture();
    let response = RawResponse::json(500, json!({"isSuccess": true, "result": "ignored"}));
    let out = f.normalizer.handle_return(Some(response), options(Some(json!("fallback")), true, None));
    assert_eq!(out, NormalizedResponse::failure(json!("fallback")));

    let alerts = drain(&mut f.alerts);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].variant(), AlertVariant::Error);
    assert_eq!(alerts[0].message(), f.catalog.translate(UNEXPECTED_ERROR_KEY, None));
}

#[test]
fn test_success_body_is_returned_with_one_success_alert() {
    let mut f = fixture();
    let response = RawResponse::json(200, json!({"isSuccess": true, "result": {"id": 7}}));
    let out = f.normalizer.handle_return(
        Some(response),
        options(None, true, Some("alert.success.wall.post-saved")),
    );
    assert_eq!(out, NormalizedResponse::success(json!({"id": 7})));

    let alerts = drain(&mut f.alerts);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].variant(), AlertVariant::Success);
    assert_eq!(alerts[0].message(), f.catalog.translate("alert.success.wall.post-saved", None));
}

#[test]
fn test_success_without_message_key_is_silent() {
    let mut f = fixture();
    let response = RawResponse::json(200, json!({"isSuccess": true, "result": 1}));
    let out = f.normalizer.handle_return(Some(response), options(None, true, None));
    assert!(out.is_success);
    assert!(drain(&mut f.alerts).is_empty());
}

#[test]
fn test_offline_wins_over_valid_response() {
    let mut f = fixture();
    f.connectivity.set_online(false);
    let response = RawResponse::json(200, json!({"isSuccess": true, "result": "fresh"}));
    let out = f.normalizer.handle_return(Some(response), options(Some(json!("stale")), true, None));
    assert_eq!(out, NormalizedResponse::failure(json!("stale")));

    let alerts = drain(&mut f.alerts);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].message(), f.catalog.translate(CONNECTION_ERROR_KEY, None));
}

#[test]
fn test_null_result_takes_fallback() {
    let f = fixture();
    let response = RawResponse::json(200, json!({"isSuccess": true, "result": null}));
    let out = f.normalizer.handle_return(Some(response), options(Some(json!({"lstPosts": []})), false, None));
    assert_eq!(out, NormalizedResponse::success(json!({"lstPosts": []})));

    let missing = RawResponse::json(200, json!({"isSuccess": false}));
    let out = f.normalizer.handle_return(Some(missing), options(Some(json!(0)), false, None));
    assert_eq!(out, NormalizedResponse::failure(json!(0)));
}

#[test]
fn test_application_failure_uses_localized_server_message() {
    let mut f = fixture();
    let response = RawResponse::json(
        200,
        json!({"isSuccess": false, "result": null, "applicationMessages": ["E42", "title"]}),
    );
    let out = f.normalizer.handle_return(Some(response), options(None, true, None));
    assert_eq!(out, NormalizedResponse::failure(Value::Null));

    let alerts = drain(&mut f.alerts);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].message(), "Invalid field title");
    assert_eq!(alerts[0].variant(), AlertVariant::Error);
}

#[test]
fn test_failure_without_alert_flag_is_silent() {
    let mut f = fixture();
    let out = f.normalizer.handle_return::<Value>(None, options(None, false, Some("alert.success.wall.post-saved")));
    assert!(!out.is_success);
    assert!(drain(&mut f.alerts).is_empty());
}

#[test]
fn test_unlisted_status_still_reads_body() {
    let f = fixture();
    let response = RawResponse::json(401, json!({"isSuccess": false, "result": "denied"}));
    let out = f.normalizer.handle_return(Some(response), options(None, false, None));
    assert_eq!(out, NormalizedResponse::failure(json!("denied")));
}

#[test]
fn test_malformed_bodies_fall_back() {
    let f = fixture();
    let not_json = RawResponse::new(200, None);
    let out = f.normalizer.handle_return(Some(not_json), options(Some(json!("fb")), false, None));
    assert_eq!(out, NormalizedResponse::failure(json!("fb")));

    let not_envelope = RawResponse::json(200, json!([1, 2, 3]));
    let out = f.normalizer.handle_return(Some(not_envelope), options(Some(json!("fb")), false, None));
    assert_eq!(out, NormalizedResponse::failure(json!("fb")));
}

#[test]
fn test_result_of_wrong_type_falls_back() {
    let f = fixture();
    let response = RawResponse::json(200, json!({"isSuccess": true, "result": "not a number"}));
    let out = f.normalizer.handle_return::<u32>(
        Some(response),
        ReturnOptions { default_value_error: Some(5), ..ReturnOptions::default() },
    );
    assert_eq!(out, NormalizedResponse::failure(5));
}

#[test]
fn test_non_array_application_messages_are_ignored() {
    let mut f = fixture();
    let response = RawResponse::json(
        200,
        json!({"isSuccess": true, "result": "kept", "applicationMessages": "E42"}),
    );
    let out = f.normalizer.handle_return(Some(response), options(None, true, None));
    assert_eq!(out, NormalizedResponse::success(json!("kept")));
    assert!(drain(&mut f.alerts).is_empty());

    let failed = RawResponse::json(
        200,
        json!({"isSuccess": false, "applicationMessages": {"key": "E42"}}),
    );
    let out = f.normalizer.handle_return(Some(failed), options(None, true, None));
    assert!(!out.is_success);
    let alerts = drain(&mut f.alerts);
    assert_eq!(alerts[0].message(), f.catalog.translate(UNEXPECTED_ERROR_KEY, None));
}
