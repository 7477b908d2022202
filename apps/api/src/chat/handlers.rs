use std::time::Duration;

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::responder::{self, ChatSnapshot};
use crate::errors::AppError;
use crate::matching;
use crate::models::badge::Badge;
use crate::models::chat::{Message, MessageRole};
use crate::resume::extract_major;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatMessageResponse {
    pub message: Message,
    pub newly_earned: Vec<Badge>,
}

/// POST /api/v1/chat/message
pub async fn handle_message(
    State(state): State<AppState>,
    Json(req): Json<ChatMessageRequest>,
) -> Result<Json<ChatMessageResponse>, AppError> {
    let content = req.content.trim();
    if content.is_empty() {
        return Err(AppError::Validation(
            "message content must not be empty".to_string(),
        ));
    }

    // Keyword-driven progress tracking runs before the reply is rendered,
    // so the reply sees the post-tracking badge state.
    let lowered = content.to_lowercase();
    let mut newly_earned = Vec::new();
    if lowered.contains("alumni") {
        newly_earned.extend(state.badges.track_alumni_path_explored());
    }
    if lowered.contains("skill") || lowered.contains("improve") {
        newly_earned.extend(state.badges.track_skill_gap_identified());
    }

    tokio::time::sleep(Duration::from_millis(state.config.reply_delay_ms)).await;

    let snapshot = build_snapshot(&state).await;
    let reply = responder::respond(content, &snapshot);

    // Final sweep so a threshold crossed by a concurrent action is surfaced
    // here too. Idempotent: with nothing new it contributes nothing.
    newly_earned.extend(state.badges.evaluate());

    let message = Message {
        id: Uuid::new_v4(),
        role: MessageRole::Assistant,
        content: reply,
        created_at: Utc::now(),
    };

    Ok(Json(ChatMessageResponse {
        message,
        newly_earned,
    }))
}

/// Assembles the data snapshot the responder renders against: the profile
/// plus the alumni and job subsets already filtered for it.
async fn build_snapshot(state: &AppState) -> ChatSnapshot {
    let profile = state.fixtures.resume_profile().await;

    let (alumni, jobs) = match &profile {
        Some(profile) => {
            let major = extract_major(&profile.education);
            let alumni =
                matching::matching_alumni_by_major(&state.fixtures.alumni_outcomes().await, major);
            let jobs = matching::matching_jobs(
                &profile.skills,
                &state.fixtures.job_postings().await,
            );
            (alumni, jobs)
        }
        None => (Vec::new(), Vec::new()),
    };

    ChatSnapshot {
        profile,
        alumni,
        jobs,
    }
}
