//! Dashboard metrics passthrough. The metrics document is a fixture like
//! everything else; a load failure degrades to the all-empty object.

use axum::{extract::State, Json};

use crate::models::dashboard::DashboardMetrics;
use crate::state::AppState;

/// GET /api/v1/dashboard/metrics
pub async fn handle_metrics(State(state): State<AppState>) -> Json<DashboardMetrics> {
    Json(state.fixtures.dashboard_metrics().await)
}
