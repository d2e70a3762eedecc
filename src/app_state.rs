use std::time::Instant;

use crate::config::Config;

/// Shared application state injected into every request handler via Axum's
/// `State` extractor. Nothing in here changes after startup.
pub struct AppState {
    pub config: Config,
    /// Captured as the first statement of `main`. `/health` reports uptime
    /// relative to this instant.
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config, started_at: Instant) -> Self {
        Self { config, started_at }
    }
}
