use std::sync::Arc;

use crate::advisor::CareerAdvisor;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only after startup: artifacts, resolver tables and content tables.
    pub advisor: Arc<CareerAdvisor>,
    pub config: Config,
}
