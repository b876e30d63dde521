use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::datadog::RumQuery;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub rum: Arc<dyn RumQuery>,
    pub config: Config,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(rum: Arc<dyn RumQuery>, config: Config) -> Arc<Self> {
        Arc::new(Self {
            rum,
            config,
            start_time: Instant::now(),
        })
    }
}
