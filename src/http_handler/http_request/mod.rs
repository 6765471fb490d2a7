pub mod query;
pub mod request_common;
pub mod request_options;
