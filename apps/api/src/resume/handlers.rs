use std::time::Duration;

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::badge::Badge;
use crate::models::resume::ResumeProfile;
use crate::resume::{build_analysis, format_profile_context, ResumeAnalysis};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ResumeUploadResponse {
    pub profile: ResumeProfile,
    pub analysis: ResumeAnalysis,
    pub newly_earned: Vec<Badge>,
}

/// POST /api/v1/resume/upload
///
/// Accepts a resume file whose bytes are discarded; the demo substitutes
/// the fixture profile after a simulated parsing delay.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    let mut received = false;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or("file").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("unreadable multipart field: {e}")))?;
        info!(field = %name, size = bytes.len(), "received resume upload");
        received = true;
    }
    if !received {
        return Err(AppError::Validation("no file field in upload".to_string()));
    }

    tokio::time::sleep(Duration::from_millis(state.config.upload_delay_ms)).await;

    let profile = state
        .fixtures
        .resume_profile()
        .await
        .ok_or_else(|| AppError::NotFound("resume profile fixture is unavailable".to_string()))?;
    debug!("parsed profile:\n{}", format_profile_context(&profile));

    let newly_earned = state.badges.track_resume_upload();

    let alumni = state.fixtures.alumni_outcomes().await;
    let jobs = state.fixtures.job_postings().await;
    let analysis = build_analysis(&profile, &alumni, &jobs);

    Ok(Json(ResumeUploadResponse {
        profile,
        analysis,
        newly_earned,
    }))
}

/// GET /api/v1/resume
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<ResumeProfile>, AppError> {
    state
        .fixtures
        .resume_profile()
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("resume profile fixture is unavailable".to_string()))
}

/// GET /api/v1/resume/analysis
pub async fn handle_get_analysis(
    State(state): State<AppState>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let profile = state
        .fixtures
        .resume_profile()
        .await
        .ok_or_else(|| AppError::NotFound("resume profile fixture is unavailable".to_string()))?;

    let alumni = state.fixtures.alumni_outcomes().await;
    let jobs = state.fixtures.job_postings().await;
    Ok(Json(build_analysis(&profile, &alumni, &jobs)))
}
