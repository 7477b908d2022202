use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::matching;
use crate::models::career::{AlumniOutcome, JobPosting};
use crate::resume::JobMatch;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AlumniQuery {
    pub major: Option<String>,
}

/// GET /api/v1/alumni
pub async fn handle_list_alumni(
    State(state): State<AppState>,
    Query(params): Query<AlumniQuery>,
) -> Json<Vec<AlumniOutcome>> {
    let outcomes = state.fixtures.alumni_outcomes().await;
    let outcomes = match params.major.as_deref() {
        Some(major) => matching::matching_alumni_by_major(&outcomes, major),
        None => outcomes,
    };
    Json(outcomes)
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<Vec<JobPosting>> {
    Json(state.fixtures.job_postings().await)
}

/// GET /api/v1/jobs/matching
///
/// Candidate postings for the loaded profile's skills, each with its match
/// percentage. Degrades to an empty list when the profile is unavailable.
pub async fn handle_matching_jobs(State(state): State<AppState>) -> Json<Vec<JobMatch>> {
    let Some(profile) = state.fixtures.resume_profile().await else {
        return Json(Vec::new());
    };

    let jobs = state.fixtures.job_postings().await;
    let matches = matching::matching_jobs(&profile.skills, &jobs)
        .into_iter()
        .map(|posting| JobMatch {
            match_percent: matching::skill_match_score(&profile.skills, &posting.skills_required),
            posting,
        })
        .collect();
    Json(matches)
}
