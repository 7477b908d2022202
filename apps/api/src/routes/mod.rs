pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{badges, career, chat, dashboard, resume};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resume", get(resume::handlers::handle_get_profile))
        .route("/api/v1/resume/upload", post(resume::handlers::handle_upload))
        .route(
            "/api/v1/resume/analysis",
            get(resume::handlers::handle_get_analysis),
        )
        // Career data API
        .route("/api/v1/alumni", get(career::handlers::handle_list_alumni))
        .route("/api/v1/jobs", get(career::handlers::handle_list_jobs))
        .route(
            "/api/v1/jobs/matching",
            get(career::handlers::handle_matching_jobs),
        )
        // Chat API
        .route("/api/v1/chat/message", post(chat::handlers::handle_message))
        // Badges API
        .route("/api/v1/badges", get(badges::handlers::handle_list_badges))
        .route(
            "/api/v1/badges/progress",
            get(badges::handlers::handle_progress),
        )
        // Dashboard API
        .route("/api/v1/dashboard/metrics", get(dashboard::handle_metrics))
        .with_state(state)
}
