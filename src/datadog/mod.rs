pub mod client;
pub mod types;

use std::fmt;

use futures_util::future::BoxFuture;

pub use client::DatadogClient;
pub use types::{
    ApplicationsResponse, EventsResponse, ListEventsRequest, RumApplication, RumEvent, RumSort,
};

#[derive(Debug)]
pub enum RumApiError {
    Transport(reqwest::Error),
    Status { status: u16, body: String },
    Decode(String),
    InvalidTimestamp(i64),
}

impl fmt::Display for RumApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "Datadog request failed: {err}"),
            Self::Status { status, body } => {
                write!(f, "Datadog API returned status {status}: {body}")
            }
            Self::Decode(msg) => write!(f, "Datadog response could not be decoded: {msg}"),
            Self::InvalidTimestamp(ms) => write!(f, "timestamp out of range: {ms}ms"),
        }
    }
}

impl std::error::Error for RumApiError {}

/// The two RUM operations the tools depend on.
pub trait RumQuery: Send + Sync {
    fn list_events(
        &self,
        request: ListEventsRequest,
    ) -> BoxFuture<'_, Result<EventsResponse, RumApiError>>;

    fn list_applications(&self) -> BoxFuture<'_, Result<ApplicationsResponse, RumApiError>>;
}
