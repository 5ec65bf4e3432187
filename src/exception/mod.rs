use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod http;

pub use http::{method_not_allowed, panic_response, route_not_found};

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessageResponse {
    /// ISO-8601 instant at which the failure was handled.
    pub timestamp: String,
    pub message: String,
}

impl ErrorMessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            message: message.into(),
        }
    }
}
