//! Fixture store: the five static documents standing in for a real backend.
//!
//! Each document is read from the fixtures directory on first access and
//! memoized for the life of the process; there is no invalidation or
//! refresh. A document that fails to load is logged and served as its empty
//! value from then on.

pub mod csv;

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::fixtures::csv::{parse_csv, split_skill_list};
use crate::models::badge::Badge;
use crate::models::career::{AlumniOutcome, JobPosting};
use crate::models::dashboard::DashboardMetrics;
use crate::models::resume::ResumeProfile;

pub const RESUME_FIXTURE: &str = "mock_resume.json";
pub const ALUMNI_FIXTURE: &str = "mock_alumni_outcomes.csv";
pub const JOBS_FIXTURE: &str = "mock_job_postings.json";
pub const BADGES_FIXTURE: &str = "mock_badges.json";
pub const METRICS_FIXTURE: &str = "mock_dashboard_metrics.json";

pub struct FixtureStore {
    dir: PathBuf,
    resume: OnceCell<Option<ResumeProfile>>,
    alumni: OnceCell<Vec<AlumniOutcome>>,
    jobs: OnceCell<Vec<JobPosting>>,
    badges: OnceCell<Vec<Badge>>,
    metrics: OnceCell<DashboardMetrics>,
}

impl FixtureStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            resume: OnceCell::new(),
            alumni: OnceCell::new(),
            jobs: OnceCell::new(),
            badges: OnceCell::new(),
            metrics: OnceCell::new(),
        }
    }

    /// The student's resume profile, or `None` if the fixture is missing
    /// or malformed.
    pub async fn resume_profile(&self) -> Option<ResumeProfile> {
        self.resume
            .get_or_init(|| async {
                match self.read_json::<ResumeProfile>(RESUME_FIXTURE).await {
                    Ok(profile) => Some(profile),
                    Err(e) => {
                        error!("failed to load {RESUME_FIXTURE}: {e:#}");
                        None
                    }
                }
            })
            .await
            .clone()
    }

    /// The alumni-outcomes table, decoded through the CSV parser.
    pub async fn alumni_outcomes(&self) -> Vec<AlumniOutcome> {
        self.alumni
            .get_or_init(|| async {
                match self.read_alumni().await {
                    Ok(outcomes) => {
                        info!(count = outcomes.len(), "loaded alumni outcomes");
                        outcomes
                    }
                    Err(e) => {
                        error!("failed to load {ALUMNI_FIXTURE}: {e:#}");
                        Vec::new()
                    }
                }
            })
            .await
            .clone()
    }

    pub async fn job_postings(&self) -> Vec<JobPosting> {
        self.jobs
            .get_or_init(|| async {
                match self.read_json::<Vec<JobPosting>>(JOBS_FIXTURE).await {
                    Ok(jobs) => {
                        info!(count = jobs.len(), "loaded job postings");
                        jobs
                    }
                    Err(e) => {
                        error!("failed to load {JOBS_FIXTURE}: {e:#}");
                        Vec::new()
                    }
                }
            })
            .await
            .clone()
    }

    /// The badge definitions the engine is seeded with. Exactly three
    /// entries are expected; whatever the fixture yields is trusted.
    pub async fn badge_definitions(&self) -> Vec<Badge> {
        self.badges
            .get_or_init(|| async {
                match self.read_json::<Vec<Badge>>(BADGES_FIXTURE).await {
                    Ok(badges) => badges,
                    Err(e) => {
                        error!("failed to load {BADGES_FIXTURE}: {e:#}");
                        Vec::new()
                    }
                }
            })
            .await
            .clone()
    }

    pub async fn dashboard_metrics(&self) -> DashboardMetrics {
        self.metrics
            .get_or_init(|| async {
                match self.read_json::<DashboardMetrics>(METRICS_FIXTURE).await {
                    Ok(metrics) => metrics,
                    Err(e) => {
                        error!("failed to load {METRICS_FIXTURE}: {e:#}");
                        DashboardMetrics::default()
                    }
                }
            })
            .await
            .clone()
    }

    async fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.dir.join(name);
        let text = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("decoding {name}"))
    }

    async fn read_alumni(&self) -> Result<Vec<AlumniOutcome>> {
        let path = self.dir.join(ALUMNI_FIXTURE);
        let text = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;

        let parsed = parse_csv(&text);
        Ok(parsed
            .rows
            .iter()
            .map(|row| {
                let field = |name: &str| row.get(name).cloned().unwrap_or_default();
                AlumniOutcome {
                    major: field("Major"),
                    industry: field("Industry"),
                    median_salary: field("MedianSalary").parse().unwrap_or(0),
                    top_skills: split_skill_list(&field("TopSkills")),
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::models::badge::BadgeId;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[tokio::test]
    async fn test_resume_profile_loads_from_fixture() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            RESUME_FIXTURE,
            r#"{
                "name": "Alex Johnson",
                "education": "B.A. in Psychology",
                "skills": ["Research", "Data Analysis"],
                "experiences": [{"role": "Research Assistant", "organization": "Cognition Lab"}]
            }"#,
        );

        let store = FixtureStore::new(dir.path());
        let profile = store.resume_profile().await.unwrap();
        assert_eq!(profile.name, "Alex Johnson");
        assert_eq!(profile.skills.len(), 2);
        assert_eq!(profile.experiences[0].organization, "Cognition Lab");
    }

    #[tokio::test]
    async fn test_missing_resume_fixture_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FixtureStore::new(dir.path());
        assert!(store.resume_profile().await.is_none());
    }

    #[tokio::test]
    async fn test_alumni_csv_decodes_rows_and_skill_lists() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            ALUMNI_FIXTURE,
            "Major,Industry,MedianSalary,TopSkills\n\
             Psychology,User Research,72000,Research;Statistics\n\
             Computer Science,Tech,95000,Python;SQL;Git\n",
        );

        let store = FixtureStore::new(dir.path());
        let outcomes = store.alumni_outcomes().await;
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].major, "Psychology");
        assert_eq!(outcomes[0].median_salary, 72_000);
        assert_eq!(outcomes[0].top_skills, vec!["Research", "Statistics"]);
        assert_eq!(outcomes[1].top_skills.len(), 3);
    }

    #[tokio::test]
    async fn test_unparseable_salary_defaults_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            ALUMNI_FIXTURE,
            "Major,Industry,MedianSalary,TopSkills\nBiology,Healthcare,n/a,Lab Work\n",
        );

        let store = FixtureStore::new(dir.path());
        let outcomes = store.alumni_outcomes().await;
        assert_eq!(outcomes[0].median_salary, 0);
    }

    #[tokio::test]
    async fn test_missing_fixtures_degrade_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FixtureStore::new(dir.path());
        assert!(store.alumni_outcomes().await.is_empty());
        assert!(store.job_postings().await.is_empty());
        assert!(store.badge_definitions().await.is_empty());
        assert_eq!(store.dashboard_metrics().await.total_badges_earned(), 0);
    }

    #[tokio::test]
    async fn test_malformed_json_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), JOBS_FIXTURE, "{ not json");
        let store = FixtureStore::new(dir.path());
        assert!(store.job_postings().await.is_empty());
    }

    #[tokio::test]
    async fn test_documents_are_memoized_not_reread() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            JOBS_FIXTURE,
            r#"[{"title": "Analyst", "company": "Brightline", "location": "Remote", "skills_required": ["SQL"]}]"#,
        );

        let store = FixtureStore::new(dir.path());
        assert_eq!(store.job_postings().await.len(), 1);

        // Rewriting the file must not change what the store serves.
        write(dir.path(), JOBS_FIXTURE, "[]");
        assert_eq!(store.job_postings().await.len(), 1);
    }

    #[tokio::test]
    async fn test_badge_definitions_decode_fixture_ids() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            BADGES_FIXTURE,
            r#"[
                {"id": "badge_resume_upload", "name": "First Steps", "description": "Upload your first resume", "earned": false},
                {"id": "badge_alumni_paths", "name": "Path Explorer", "description": "Explore three alumni paths", "earned": false},
                {"id": "badge_skill_builder", "name": "Skill Builder", "description": "Identify a skill gap", "earned": false}
            ]"#,
        );

        let store = FixtureStore::new(dir.path());
        let badges = store.badge_definitions().await;
        assert_eq!(badges.len(), 3);
        assert_eq!(badges[0].id, BadgeId::ResumeUpload);
        assert!(!badges[0].earned);
        assert!(badges[0].earned_at.is_none());
    }

    #[tokio::test]
    async fn test_dashboard_metrics_load() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            METRICS_FIXTURE,
            r#"{
                "total_resumes_uploaded": 48,
                "top_skills": ["Python", "Research"],
                "badges_earned": {"First Steps": 31, "Path Explorer": 12},
                "popular_queries": ["how do I prepare for interviews"]
            }"#,
        );

        let store = FixtureStore::new(dir.path());
        let metrics = store.dashboard_metrics().await;
        assert_eq!(metrics.total_resumes_uploaded, 48);
        assert_eq!(metrics.total_badges_earned(), 43);
    }
}
