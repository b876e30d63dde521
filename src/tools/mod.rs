//! RUM tools: validated arguments in, one text block out.

pub mod catalog;
pub mod error;
pub mod rum;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::datadog::RumQuery;

pub use catalog::{ToolDefinition, ToolName, tool_definitions};
pub use error::ToolError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolContent {
    #[serde(rename = "type")]
    pub content_type: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolResponse {
    pub content: Vec<ToolContent>,
}

impl ToolResponse {
    pub fn text(text: String) -> Self {
        Self {
            content: vec![ToolContent {
                content_type: "text",
                text,
            }],
        }
    }

    /// Text of the first content block.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|c| c.text.as_str())
    }
}

/// Dispatch a tool call by name.
pub async fn call_tool(
    rum: &dyn RumQuery,
    name: &str,
    args: &Value,
) -> Result<ToolResponse, ToolError> {
    let tool = ToolName::from_name(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
    info!("tool call: {}", tool.as_str());

    let result = match tool {
        ToolName::GetRumApplications => rum::get_rum_applications(rum, args).await,
        ToolName::GetRumEvents => rum::get_rum_events(rum, args).await,
        ToolName::GetRumGroupedEventCount => rum::get_rum_grouped_event_count(rum, args).await,
        ToolName::GetRumPagePerformance => rum::get_rum_page_performance(rum, args).await,
        ToolName::GetRumPageWaterfall => rum::get_rum_page_waterfall(rum, args).await,
    };

    if let Err(err) = &result {
        warn!("tool {} failed: {err}", tool.as_str());
    }
    result
}
