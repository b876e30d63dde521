use std::fmt;

use crate::contracts::params::ValidationError;
use crate::datadog::RumApiError;

pub const NO_APPLICATIONS_DATA: &str = "No RUM applications data returned";
pub const NO_EVENTS_DATA: &str = "No RUM events data returned";

#[derive(Debug)]
pub enum ToolError {
    Validation(Vec<ValidationError>),
    NoData(&'static str),
    Upstream(RumApiError),
    UnknownTool(String),
    Serialize(serde_json::Error),
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(errors) => {
                let details: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "invalid arguments: {}", details.join("; "))
            }
            Self::NoData(msg) => f.write_str(msg),
            Self::Upstream(err) => write!(f, "{err}"),
            Self::UnknownTool(name) => write!(f, "unknown tool: {name}"),
            Self::Serialize(err) => write!(f, "failed to serialize result: {err}"),
        }
    }
}

impl std::error::Error for ToolError {}

impl From<Vec<ValidationError>> for ToolError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

impl From<RumApiError> for ToolError {
    fn from(err: RumApiError) -> Self {
        Self::Upstream(err)
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}
