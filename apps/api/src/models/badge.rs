use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three fixed badge kinds. Serialized with the identifiers the badge
/// fixture uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeId {
    #[serde(rename = "badge_resume_upload")]
    ResumeUpload,
    #[serde(rename = "badge_alumni_paths")]
    AlumniPaths,
    #[serde(rename = "badge_skill_builder")]
    SkillBuilder,
}

/// A named achievement with a binary locked/earned state. Once earned it
/// never reverts within a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub earned: bool,
    #[serde(rename = "earnedAt", default, skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<DateTime<Utc>>,
}

/// Process-wide usage counters gating badge transitions. Reset only by
/// process restart; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    pub resume_uploaded: bool,
    pub alumni_paths_explored: u32,
    pub skill_gaps_identified: u32,
}
