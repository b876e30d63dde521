mod common;

use serde_json::{Value, json};

use common::FakeRum;
use datadog_rum_rs::datadog::{RumApplication, RumSort};
use datadog_rum_rs::tools::{ToolError, call_tool};

const FROM: i64 = 1_700_000_000;
const TO: i64 = 1_700_003_600;

fn text_of(result: Result<datadog_rum_rs::tools::ToolResponse, ToolError>) -> String {
    result
        .expect("tool call should succeed")
        .first_text()
        .expect("one text block")
        .to_string()
}

fn json_after(text: &str, label: &str) -> Value {
    let rest = text.strip_prefix(label).expect("label prefix");
    serde_json::from_str(rest).expect("embedded JSON")
}

// --- get_rum_applications ---

#[tokio::test]
async fn applications_are_listed_with_label() {
    let rum = FakeRum {
        applications: Some(vec![RumApplication {
            id: Some("app-1".into()),
            app_type: Some("rum_application".into()),
            attributes: Some(json!({"name": "shop"})),
        }]),
        ..FakeRum::default()
    };

    let text = text_of(call_tool(&rum, "get_rum_applications", &json!({})).await);
    let apps = json_after(&text, "RUM applications: ");
    assert_eq!(apps[0]["id"], "app-1");
    assert_eq!(apps[0]["attributes"]["name"], "shop");
}

#[tokio::test]
async fn applications_null_data_is_an_error() {
    let rum = FakeRum::default();
    let err = call_tool(&rum, "get_rum_applications", &Value::Null)
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::NoData(_)));
    assert_eq!(err.to_string(), "No RUM applications data returned");
}

// --- get_rum_events ---

#[tokio::test]
async fn events_pass_query_and_millisecond_range() {
    let rum = FakeRum::with_event_attributes(vec![json!({"view": {"name": "/home"}})]);
    let args = json!({"query": "@type:error", "from": FROM, "to": TO, "limit": 50});

    let text = text_of(call_tool(&rum, "get_rum_events", &args).await);
    let events = json_after(&text, "RUM events data: ");
    assert_eq!(events[0]["attributes"]["attributes"]["view"]["name"], "/home");

    let req = rum.last_request();
    assert_eq!(req.filter_query.as_deref(), Some("@type:error"));
    assert_eq!(req.filter_from, Some(FROM * 1000));
    assert_eq!(req.filter_to, Some(TO * 1000));
    assert_eq!(req.sort, RumSort::TimestampAscending);
    assert_eq!(req.page_limit, 50);
}

#[tokio::test]
async fn events_wildcard_is_sent_verbatim() {
    let rum = FakeRum::with_events(vec![]);
    let args = json!({"query": "*", "from": FROM, "to": TO});
    let text = text_of(call_tool(&rum, "get_rum_events", &args).await);
    assert_eq!(text, "RUM events data: []");
    let req = rum.last_request();
    assert_eq!(req.filter_query.as_deref(), Some("*"));
    assert_eq!(req.page_limit, 100);
}

#[tokio::test]
async fn events_null_data_is_an_error() {
    let rum = FakeRum::default();
    let args = json!({"query": "*", "from": FROM, "to": TO});
    let err = call_tool(&rum, "get_rum_events", &args).await.unwrap_err();
    assert!(matches!(err, ToolError::NoData(_)));
    assert_eq!(err.to_string(), "No RUM events data returned");
}

#[tokio::test]
async fn invalid_arguments_never_reach_the_api() {
    let rum = FakeRum::with_events(vec![]);
    let err = call_tool(&rum, "get_rum_events", &json!({"from": "yesterday"}))
        .await
        .unwrap_err();
    match err {
        ToolError::Validation(errors) => {
            assert!(errors.iter().any(|e| e.field == "query"));
            assert!(errors.iter().any(|e| e.field == "from"));
        }
        other => panic!("expected validation error, got {other}"),
    }
    assert!(rum.recorded().is_empty());
}

#[tokio::test]
async fn upstream_errors_propagate() {
    let rum = FakeRum::failing(403);
    let args = json!({"query": "*", "from": FROM, "to": TO});
    let err = call_tool(&rum, "get_rum_events", &args).await.unwrap_err();
    assert!(matches!(err, ToolError::Upstream(_)));
    assert!(err.to_string().contains("403"));
}

// --- get_rum_grouped_event_count ---

#[tokio::test]
async fn grouped_count_counts_distinct_sessions() {
    let rum = FakeRum::with_event_attributes(vec![
        json!({"session": {"id": "s1"}, "geo": {"country": "US"}}),
        json!({"session": {"id": "s1"}, "geo": {"country": "US"}}),
        json!({"session": {"id": "s2"}, "geo": {"country": "FR"}}),
    ]);
    let args = json!({"query": "*", "from": FROM, "to": TO, "groupBy": "geo.country"});

    let text = text_of(call_tool(&rum, "get_rum_grouped_event_count", &args).await);
    let counts = json_after(&text, "Session counts (grouped by geo.country): ");
    assert_eq!(counts, json!({"US": 1, "FR": 1}));

    let req = rum.last_request();
    assert_eq!(req.filter_query, None);
    assert_eq!(req.page_limit, 2000);
}

#[tokio::test]
async fn grouped_count_unknown_bucket_and_explicit_query() {
    let rum = FakeRum::with_event_attributes(vec![
        json!({"session": {"id": "s1"}}),
        json!({"session": {"id": "s2"}, "view": {"name": "/cart"}}),
    ]);
    let args = json!({"query": "@type:view", "from": FROM, "to": TO, "groupBy": "view.name"});

    let text = text_of(call_tool(&rum, "get_rum_grouped_event_count", &args).await);
    let counts = json_after(&text, "Session counts (grouped by view.name): ");
    assert_eq!(counts, json!({"unknown": 1, "/cart": 1}));
    assert_eq!(rum.last_request().filter_query.as_deref(), Some("@type:view"));
}

#[tokio::test]
async fn grouped_count_defaults_to_application_name() {
    let rum = FakeRum::with_event_attributes(vec![
        json!({"session": {"id": "s1"}, "application": {"name": "shop"}}),
    ]);
    let text = text_of(
        call_tool(&rum, "get_rum_grouped_event_count", &json!({"from": FROM, "to": TO})).await,
    );
    assert_eq!(text, r#"Session counts (grouped by application.name): {"shop":1}"#);
    assert_eq!(rum.last_request().filter_query, None);
}

// --- get_rum_page_performance ---

#[tokio::test]
async fn page_performance_summarizes_requested_metrics() {
    let rum = FakeRum::with_event_attributes(vec![
        json!({"view": {"load_time": 100}}),
        json!({"view": {"load_time": 200}}),
        json!({"view": {"load_time": 300, "first_contentful_paint": "42"}}),
    ]);
    let args = json!({
        "query": "*", "from": FROM, "to": TO,
        "metricNames": ["view.load_time", "view.first_contentful_paint"]
    });

    let text = text_of(call_tool(&rum, "get_rum_page_performance", &args).await);
    assert!(text.contains(r#""view.load_time":{"avg":200,"min":100,"max":300,"count":3}"#));
    let metrics = json_after(&text, "Page performance metrics: ");
    assert_eq!(metrics["view.load_time"]["avg"], 200.0);
    assert_eq!(metrics["view.load_time"]["min"], 100.0);
    assert_eq!(metrics["view.load_time"]["max"], 300.0);
    assert_eq!(metrics["view.load_time"]["count"], 3);
    assert_eq!(metrics["view.first_contentful_paint"]["count"], 0);
    assert_eq!(metrics["view.first_contentful_paint"]["avg"], 0.0);

    let req = rum.last_request();
    assert_eq!(req.filter_query.as_deref(), Some("@type:view"));
    assert_eq!(req.page_limit, 2000);
}

#[tokio::test]
async fn page_performance_prefixes_view_filter() {
    let rum = FakeRum::with_events(vec![]);
    let args = json!({"query": "@application.name:shop", "from": FROM, "to": TO});
    let text = text_of(call_tool(&rum, "get_rum_page_performance", &args).await);
    let metrics = json_after(&text, "Page performance metrics: ");
    assert_eq!(metrics.as_object().unwrap().len(), 3);
    assert_eq!(
        rum.last_request().filter_query.as_deref(),
        Some("@type:view @application.name:shop")
    );
}

// --- get_rum_page_waterfall ---

#[tokio::test]
async fn waterfall_filters_by_app_and_session_without_time_bounds() {
    let rum = FakeRum::with_event_attributes(vec![json!({"resource": {"duration": 12}})]);
    let args = json!({"applicationName": "shop", "sessionId": "abc"});

    let text = text_of(call_tool(&rum, "get_rum_page_waterfall", &args).await);
    let events = json_after(&text, "Page waterfall data (app: shop, session: abc): ");
    assert_eq!(events.as_array().unwrap().len(), 1);

    let req = rum.last_request();
    assert_eq!(req.filter_query.as_deref(), Some("@application.name:shop @session.id:abc"));
    assert_eq!(req.filter_from, None);
    assert_eq!(req.filter_to, None);
    assert_eq!(req.page_limit, 2000);
}

#[tokio::test]
async fn waterfall_null_data_is_an_error() {
    let rum = FakeRum::default();
    let args = json!({"applicationName": "shop", "sessionId": "abc"});
    let err = call_tool(&rum, "get_rum_page_waterfall", &args).await.unwrap_err();
    assert_eq!(err.to_string(), "No RUM events data returned");
}

// --- dispatch ---

#[tokio::test]
async fn unknown_tool_is_rejected() {
    let rum = FakeRum::default();
    let err = call_tool(&rum, "get_rum_sessions", &json!({})).await.unwrap_err();
    assert!(matches!(err, ToolError::UnknownTool(ref name) if name == "get_rum_sessions"));
    assert_eq!(*rum.application_calls.lock().unwrap(), 0);
}
