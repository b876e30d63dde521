use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sort order sent to the RUM events endpoint. Events are always
/// requested oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RumSort {
    #[serde(rename = "timestamp")]
    TimestampAscending,
}

impl RumSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TimestampAscending => "timestamp",
        }
    }
}

/// Parameters for one `list_events` call. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEventsRequest {
    pub filter_query: Option<String>,
    pub filter_from: Option<i64>,
    pub filter_to: Option<i64>,
    pub sort: RumSort,
    pub page_limit: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RumEventAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RumEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<RumEventAttributes>,
}

impl RumEvent {
    /// Event built around a nested attribute map.
    pub fn with_attributes(attributes: Value) -> Self {
        Self {
            id: None,
            event_type: Some("rum".into()),
            attributes: Some(RumEventAttributes {
                attributes: Some(attributes),
                ..RumEventAttributes::default()
            }),
        }
    }

    /// The nested attribute map paths are resolved against, if it is an object.
    pub fn attribute_root(&self) -> Option<&Value> {
        self.attributes
            .as_ref()
            .and_then(|a| a.attributes.as_ref())
            .filter(|v| v.is_object())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RumApplication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub app_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsResponse {
    #[serde(default)]
    pub data: Option<Vec<RumEvent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationsResponse {
    #[serde(default)]
    pub data: Option<Vec<RumApplication>>,
}
