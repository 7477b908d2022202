use serde::{Deserialize, Serialize};

/// A parsed resume profile, as served by the resume fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub name: String,
    pub education: String,
    pub skills: Vec<String>,
    pub experiences: Vec<Experience>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub organization: String,
}
