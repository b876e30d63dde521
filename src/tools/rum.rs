use serde_json::Value;
use tracing::debug;

use super::ToolResponse;
use super::error::{NO_APPLICATIONS_DATA, NO_EVENTS_DATA, ToolError};
use crate::aggregate::{AttributePath, count_sessions_by, summarize_metrics};
use crate::contracts::params::WILDCARD_QUERY;
use crate::contracts::validation::{
    validate_applications_args, validate_events_args, validate_grouped_count_args,
    validate_page_performance_args, validate_waterfall_args,
};
use crate::datadog::{ListEventsRequest, RumEvent, RumQuery, RumSort};

/// Page size for queries whose results are aggregated locally.
pub const AGGREGATION_PAGE_LIMIT: u32 = 2000;

const VIEW_FILTER: &str = "@type:view";

pub async fn get_rum_applications(
    rum: &dyn RumQuery,
    args: &Value,
) -> Result<ToolResponse, ToolError> {
    validate_applications_args(args)?;

    let response = rum.list_applications().await?;
    let apps = response.data.ok_or(ToolError::NoData(NO_APPLICATIONS_DATA))?;

    Ok(ToolResponse::text(format!(
        "RUM applications: {}",
        serde_json::to_string(&apps)?
    )))
}

pub async fn get_rum_events(rum: &dyn RumQuery, args: &Value) -> Result<ToolResponse, ToolError> {
    let params = validate_events_args(args)?;

    let events = fetch_events(
        rum,
        ListEventsRequest {
            filter_query: Some(params.query),
            filter_from: Some(params.range.from_millis()),
            filter_to: Some(params.range.to_millis()),
            sort: RumSort::TimestampAscending,
            page_limit: params.limit,
        },
    )
    .await?;

    Ok(ToolResponse::text(format!(
        "RUM events data: {}",
        serde_json::to_string(&events)?
    )))
}

pub async fn get_rum_grouped_event_count(
    rum: &dyn RumQuery,
    args: &Value,
) -> Result<ToolResponse, ToolError> {
    let params = validate_grouped_count_args(args)?;

    let events = fetch_events(
        rum,
        ListEventsRequest {
            filter_query: grouped_count_filter(&params.query),
            filter_from: Some(params.range.from_millis()),
            filter_to: Some(params.range.to_millis()),
            sort: RumSort::TimestampAscending,
            page_limit: AGGREGATION_PAGE_LIMIT,
        },
    )
    .await?;

    let counts = count_sessions_by(&events, &AttributePath::parse(&params.group_by));

    Ok(ToolResponse::text(format!(
        "Session counts (grouped by {}): {}",
        params.group_by,
        serde_json::to_string(&counts)?
    )))
}

pub async fn get_rum_page_performance(
    rum: &dyn RumQuery,
    args: &Value,
) -> Result<ToolResponse, ToolError> {
    let params = validate_page_performance_args(args)?;

    let events = fetch_events(
        rum,
        ListEventsRequest {
            filter_query: Some(page_performance_filter(&params.query)),
            filter_from: Some(params.range.from_millis()),
            filter_to: Some(params.range.to_millis()),
            sort: RumSort::TimestampAscending,
            page_limit: AGGREGATION_PAGE_LIMIT,
        },
    )
    .await?;

    let summaries = summarize_metrics(&events, &params.metric_names);

    Ok(ToolResponse::text(format!(
        "Page performance metrics: {}",
        serde_json::to_string(&summaries)?
    )))
}

pub async fn get_rum_page_waterfall(
    rum: &dyn RumQuery,
    args: &Value,
) -> Result<ToolResponse, ToolError> {
    let params = validate_waterfall_args(args)?;

    let events = fetch_events(
        rum,
        ListEventsRequest {
            filter_query: Some(waterfall_filter(&params.application_name, &params.session_id)),
            filter_from: None,
            filter_to: None,
            sort: RumSort::TimestampAscending,
            page_limit: AGGREGATION_PAGE_LIMIT,
        },
    )
    .await?;

    Ok(ToolResponse::text(format!(
        "Page waterfall data (app: {}, session: {}): {}",
        params.application_name,
        params.session_id,
        serde_json::to_string(&events)?
    )))
}

async fn fetch_events(
    rum: &dyn RumQuery,
    request: ListEventsRequest,
) -> Result<Vec<RumEvent>, ToolError> {
    debug!(
        "list_events query={:?} from={:?} to={:?} limit={}",
        request.filter_query, request.filter_from, request.filter_to, request.page_limit
    );
    let response = rum.list_events(request).await?;
    let events = response.data.ok_or(ToolError::NoData(NO_EVENTS_DATA))?;
    debug!("list_events returned {} events", events.len());
    Ok(events)
}

/// The wildcard is sent as no filter at all.
pub fn grouped_count_filter(query: &str) -> Option<String> {
    if query == WILDCARD_QUERY {
        None
    } else {
        Some(query.to_string())
    }
}

pub fn page_performance_filter(query: &str) -> String {
    if query == WILDCARD_QUERY {
        VIEW_FILTER.to_string()
    } else {
        format!("{VIEW_FILTER} {query}")
    }
}

pub fn waterfall_filter(application_name: &str, session_id: &str) -> String {
    format!("@application.name:{application_name} @session.id:{session_id}")
}
