use serde::Serialize;
use serde_json::{Value, json};

use crate::contracts::params::{
    DEFAULT_EVENTS_LIMIT, DEFAULT_GROUP_BY, DEFAULT_METRIC_NAMES, MAX_EVENTS_LIMIT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    GetRumApplications,
    GetRumEvents,
    GetRumGroupedEventCount,
    GetRumPagePerformance,
    GetRumPageWaterfall,
}

impl ToolName {
    pub const ALL: [ToolName; 5] = [
        Self::GetRumApplications,
        Self::GetRumEvents,
        Self::GetRumGroupedEventCount,
        Self::GetRumPagePerformance,
        Self::GetRumPageWaterfall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetRumApplications => "get_rum_applications",
            Self::GetRumEvents => "get_rum_events",
            Self::GetRumGroupedEventCount => "get_rum_grouped_event_count",
            Self::GetRumPagePerformance => "get_rum_page_performance",
            Self::GetRumPageWaterfall => "get_rum_page_waterfall",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::GetRumApplications => "Get all RUM applications in the organization",
            Self::GetRumEvents => "Search and retrieve RUM events from Datadog",
            Self::GetRumGroupedEventCount => {
                "Search, group and count RUM sessions by a specified dimension"
            }
            Self::GetRumPagePerformance => {
                "Get page (view) performance metrics from RUM data"
            }
            Self::GetRumPageWaterfall => {
                "Retrieve RUM page (view) waterfall data filtered by application name and session ID"
            }
        }
    }

    /// JSON schema describing the accepted arguments.
    pub fn input_schema(&self) -> Value {
        let time_range = json!({
            "from": {"type": "integer", "description": "Start time in epoch seconds"},
            "to": {"type": "integer", "description": "End time in epoch seconds"},
        });

        match self {
            Self::GetRumApplications => json!({"type": "object", "properties": {}}),
            Self::GetRumEvents => json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "Datadog RUM query string"},
                    "from": time_range["from"],
                    "to": time_range["to"],
                    "limit": {
                        "type": "integer",
                        "minimum": 1,
                        "maximum": MAX_EVENTS_LIMIT,
                        "default": DEFAULT_EVENTS_LIMIT,
                        "description": "Maximum number of events to return"
                    }
                },
                "required": ["query", "from", "to"]
            }),
            Self::GetRumGroupedEventCount => json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "default": "*", "description": "Additional query filter"},
                    "from": time_range["from"],
                    "to": time_range["to"],
                    "groupBy": {
                        "type": "string",
                        "default": DEFAULT_GROUP_BY,
                        "description": "Dimension to group by (e.g. application.name, view.name, geo.country)"
                    }
                },
                "required": ["from", "to"]
            }),
            Self::GetRumPagePerformance => json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "default": "*", "description": "Additional query filter"},
                    "from": time_range["from"],
                    "to": time_range["to"],
                    "metricNames": {
                        "type": "array",
                        "items": {"type": "string"},
                        "default": DEFAULT_METRIC_NAMES,
                        "description": "Attribute paths of the metrics to summarize"
                    }
                },
                "required": ["from", "to"]
            }),
            Self::GetRumPageWaterfall => json!({
                "type": "object",
                "properties": {
                    "applicationName": {"type": "string", "description": "Application name"},
                    "sessionId": {"type": "string", "description": "Session ID"}
                },
                "required": ["applicationName", "sessionId"]
            }),
        }
    }

    pub fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.as_str(),
            description: self.description(),
            input_schema: self.input_schema(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

pub fn tool_definitions() -> Vec<ToolDefinition> {
    ToolName::ALL.iter().map(ToolName::definition).collect()
}
