#![allow(clippy::module_name_repetitions)]
//! Typed HTTP access layer: templated endpoints, normalized `{is_success, result}`
//! responses and injectable alert, translation and connectivity capabilities.

pub use chrono;

pub mod connectivity;
pub mod environment;
pub mod http_handler;
pub mod localization;
pub mod logger;
pub mod notification;
pub mod wall;

pub use connectivity::{ConnectivityFlag, ConnectivityProbe};
pub use environment::{Environment, Mode};
pub use http_handler::http_client::HTTPClient;
pub use http_handler::http_request::request_options::RequestOptions;
pub use http_handler::http_response::response_common::NormalizedResponse;
pub use localization::{MessageCatalog, Translator};
pub use notification::{AlertChannel, AlertVariant, Notification, NotificationSink};
pub use wall::WallService;
