mod health;
mod tools;

pub use health::health_handler;
pub use tools::{call_tool_handler, list_tools_handler};
