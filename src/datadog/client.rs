use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{ApplicationsResponse, EventsResponse, ListEventsRequest};
use super::{RumApiError, RumQuery};
use crate::config::DatadogConfig;

const EVENTS_PATH: &str = "/api/v2/rum/events";
const APPLICATIONS_PATH: &str = "/api/v2/rum/applications";

/// HTTPS client for the Datadog RUM v2 API.
pub struct DatadogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    app_key: String,
}

impl DatadogClient {
    pub fn new(config: &DatadogConfig) -> Result<Self, RumApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(RumApiError::Transport)?;

        Ok(Self {
            http,
            base_url: trim_base_url(&config.base_url),
            api_key: config.api_key.clone(),
            app_key: config.app_key.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, RumApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url} params={query:?}");

        let response = self
            .http
            .get(&url)
            .header("DD-API-KEY", &self.api_key)
            .header("DD-APPLICATION-KEY", &self.app_key)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await
            .map_err(RumApiError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RumApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(RumApiError::Transport)?;
        serde_json::from_slice(&bytes).map_err(|e| RumApiError::Decode(e.to_string()))
    }

    async fn fetch_events(&self, request: ListEventsRequest) -> Result<EventsResponse, RumApiError> {
        let params = events_query_params(&request)?;
        self.get_json(EVENTS_PATH, &params).await
    }

    async fn fetch_applications(&self) -> Result<ApplicationsResponse, RumApiError> {
        self.get_json(APPLICATIONS_PATH, &[]).await
    }
}

impl RumQuery for DatadogClient {
    fn list_events(
        &self,
        request: ListEventsRequest,
    ) -> BoxFuture<'_, Result<EventsResponse, RumApiError>> {
        self.fetch_events(request).boxed()
    }

    fn list_applications(&self) -> BoxFuture<'_, Result<ApplicationsResponse, RumApiError>> {
        self.fetch_applications().boxed()
    }
}

/// Query-string parameters for `GET /api/v2/rum/events`.
pub fn events_query_params(
    request: &ListEventsRequest,
) -> Result<Vec<(&'static str, String)>, RumApiError> {
    let mut params = Vec::with_capacity(5);
    if let Some(query) = &request.filter_query {
        params.push(("filter[query]", query.clone()));
    }
    if let Some(from) = request.filter_from {
        params.push(("filter[from]", format_millis(from)?));
    }
    if let Some(to) = request.filter_to {
        params.push(("filter[to]", format_millis(to)?));
    }
    params.push(("sort", request.sort.as_str().to_string()));
    params.push(("page[limit]", request.page_limit.to_string()));
    Ok(params)
}

fn trim_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

fn format_millis(ms: i64) -> Result<String, RumApiError> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or(RumApiError::InvalidTimestamp(ms))
}
