use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::models::badge::{Badge, UserProgress};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct BadgeListParams {
    pub earned: Option<bool>,
}

/// GET /api/v1/badges
pub async fn handle_list_badges(
    State(state): State<AppState>,
    Query(params): Query<BadgeListParams>,
) -> Json<Vec<Badge>> {
    let badges = match params.earned {
        Some(true) => state.badges.earned_badges(),
        Some(false) => state.badges.unearned_badges(),
        None => state.badges.badges(),
    };
    Json(badges)
}

/// GET /api/v1/badges/progress
pub async fn handle_progress(State(state): State<AppState>) -> Json<UserProgress> {
    Json(state.badges.progress())
}
