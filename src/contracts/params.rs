use serde::Serialize;

/// Query value meaning "match everything".
pub const WILDCARD_QUERY: &str = "*";

pub const DEFAULT_EVENTS_LIMIT: u32 = 100;
pub const MAX_EVENTS_LIMIT: u32 = 1000;
pub const DEFAULT_GROUP_BY: &str = "application.name";
pub const DEFAULT_METRIC_NAMES: &[&str] = &[
    "view.load_time",
    "view.first_contentful_paint",
    "view.largest_contentful_paint",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Unix epoch seconds, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub from: i64,
    pub to: i64,
}

impl TimeRange {
    pub fn from_millis(&self) -> i64 {
        self.from.saturating_mul(1000)
    }

    pub fn to_millis(&self) -> i64 {
        self.to.saturating_mul(1000)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventsParams {
    pub query: String,
    pub range: TimeRange,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupedCountParams {
    pub query: String,
    pub range: TimeRange,
    pub group_by: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagePerformanceParams {
    pub query: String,
    pub range: TimeRange,
    pub metric_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WaterfallParams {
    pub application_name: String,
    pub session_id: String,
}
