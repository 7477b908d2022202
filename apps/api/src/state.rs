use std::sync::Arc;

use crate::badges::BadgeEngine;
use crate::config::Config;
use crate::fixtures::FixtureStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Memoized static documents standing in for a real backend.
    pub fixtures: Arc<FixtureStore>,
    /// Progress counters, badge transitions, and the observer registry.
    pub badges: Arc<BadgeEngine>,
    pub config: Config,
}
