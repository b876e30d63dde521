//! In-memory aggregation over RUM event attributes.

pub mod group;
pub mod path;
pub mod summary;

pub use group::{UNKNOWN_GROUP, count_sessions_by};
pub use path::{AttributePath, Resolution, resolve};
pub use summary::{MetricSummary, summarize_metrics};
