#![allow(dead_code)]

use std::sync::Mutex;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use serde_json::Value;

use datadog_rum_rs::config::{Config, DatadogConfig};
use datadog_rum_rs::datadog::{
    ApplicationsResponse, EventsResponse, ListEventsRequest, RumApiError, RumApplication,
    RumEvent, RumQuery,
};

/// In-memory RUM backend that records every events request.
#[derive(Default)]
pub struct FakeRum {
    pub events: Option<Vec<RumEvent>>,
    pub applications: Option<Vec<RumApplication>>,
    pub fail_status: Option<u16>,
    pub requests: Mutex<Vec<ListEventsRequest>>,
    pub application_calls: Mutex<usize>,
}

impl FakeRum {
    pub fn with_events(events: Vec<RumEvent>) -> Self {
        Self {
            events: Some(events),
            ..Self::default()
        }
    }

    pub fn with_event_attributes(attrs: Vec<Value>) -> Self {
        Self::with_events(attrs.into_iter().map(RumEvent::with_attributes).collect())
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<ListEventsRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ListEventsRequest {
        self.recorded().pop().expect("no list_events call recorded")
    }

    fn failure(&self) -> Option<RumApiError> {
        self.fail_status.map(|status| RumApiError::Status {
            status,
            body: "forbidden".into(),
        })
    }
}

impl RumQuery for FakeRum {
    fn list_events(
        &self,
        request: ListEventsRequest,
    ) -> BoxFuture<'_, Result<EventsResponse, RumApiError>> {
        self.requests.lock().unwrap().push(request);
        let result = match self.failure() {
            Some(err) => Err(err),
            None => Ok(EventsResponse {
                data: self.events.clone(),
                ..EventsResponse::default()
            }),
        };
        async move { result }.boxed()
    }

    fn list_applications(&self) -> BoxFuture<'_, Result<ApplicationsResponse, RumApiError>> {
        *self.application_calls.lock().unwrap() += 1;
        let result = match self.failure() {
            Some(err) => Err(err),
            None => Ok(ApplicationsResponse {
                data: self.applications.clone(),
            }),
        };
        async move { result }.boxed()
    }
}

pub fn test_config() -> Config {
    Config {
        port: 0,
        host: "127.0.0.1".into(),
        datadog: DatadogConfig {
            base_url: "http://127.0.0.1:9".into(),
            api_key: "test-api-key".into(),
            app_key: "test-app-key".into(),
            timeout_secs: 1,
        },
    }
}
