use serde::{Deserialize, Serialize};

/// One row of the alumni-outcomes table, decoded from the CSV fixture.
/// Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlumniOutcome {
    pub major: String,
    pub industry: String,
    pub median_salary: u32,
    pub top_skills: Vec<String>,
}

/// A job posting from the postings fixture. Field names follow the fixture
/// document, which uses `skills_required`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub skills_required: Vec<String>,
}
