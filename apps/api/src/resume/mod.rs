//! Resume profile operations: major extraction, plain-text rendering, and
//! the analysis block assembled against the alumni and job datasets.

pub mod handlers;

use serde::Serialize;

use crate::matching;
use crate::models::career::{AlumniOutcome, JobPosting};
use crate::models::resume::ResumeProfile;

/// A job posting paired with its computed skill-match percentage.
#[derive(Debug, Clone, Serialize)]
pub struct JobMatch {
    #[serde(flatten)]
    pub posting: JobPosting,
    pub match_percent: u32,
}

/// Career insights derived from a profile: extracted major, alumni outcomes
/// for that major, and candidate postings with match percentages.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysis {
    pub major: String,
    pub alumni: Vec<AlumniOutcome>,
    pub job_matches: Vec<JobMatch>,
}

/// Maps the free-text education line to a coarse major bucket by keyword.
/// Substring matching, so "cs" also fires inside longer words.
pub fn extract_major(education: &str) -> &'static str {
    let education = education.to_lowercase();

    if education.contains("psychology") {
        "Psychology"
    } else if education.contains("computer science") || education.contains("cs") {
        "Computer Science"
    } else if education.contains("biology") {
        "Biology"
    } else if education.contains("business") {
        "Business"
    } else {
        "General"
    }
}

/// Renders a profile as plain text: name, education, skills, experience.
pub fn format_profile_context(profile: &ResumeProfile) -> String {
    let experiences = profile
        .experiences
        .iter()
        .map(|e| format!("- {} at {}", e.role, e.organization))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Name: {}\nEducation: {}\nSkills: {}\nExperience:\n{}",
        profile.name,
        profile.education,
        profile.skills.join(", "),
        experiences
    )
}

/// Assembles the analysis block for a profile against the loaded datasets.
pub fn build_analysis(
    profile: &ResumeProfile,
    alumni: &[AlumniOutcome],
    jobs: &[JobPosting],
) -> ResumeAnalysis {
    let major = extract_major(&profile.education);
    let alumni = matching::matching_alumni_by_major(alumni, major);
    let job_matches = matching::matching_jobs(&profile.skills, jobs)
        .into_iter()
        .map(|posting| JobMatch {
            match_percent: matching::skill_match_score(&profile.skills, &posting.skills_required),
            posting,
        })
        .collect();

    ResumeAnalysis {
        major: major.to_string(),
        alumni,
        job_matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Experience;

    fn profile(education: &str) -> ResumeProfile {
        ResumeProfile {
            name: "Alex Johnson".to_string(),
            education: education.to_string(),
            skills: vec!["Research".to_string(), "Data Analysis".to_string()],
            experiences: vec![Experience {
                role: "Research Assistant".to_string(),
                organization: "Cognition Lab".to_string(),
            }],
        }
    }

    #[test]
    fn test_extract_major_psychology() {
        assert_eq!(extract_major("B.A. in Psychology"), "Psychology");
    }

    #[test]
    fn test_extract_major_computer_science() {
        assert_eq!(extract_major("B.S. in Computer Science"), "Computer Science");
        assert_eq!(extract_major("CS degree, 2020"), "Computer Science");
    }

    #[test]
    fn test_extract_major_biology_and_business() {
        assert_eq!(extract_major("Biology major"), "Biology");
        assert_eq!(extract_major("Business Administration"), "Business");
    }

    #[test]
    fn test_extract_major_defaults_to_general() {
        assert_eq!(extract_major("History of Art"), "General");
    }

    #[test]
    fn test_format_profile_context() {
        let rendered = format_profile_context(&profile("B.A. in Psychology"));
        assert!(rendered.starts_with("Name: Alex Johnson\n"));
        assert!(rendered.contains("Skills: Research, Data Analysis"));
        assert!(rendered.contains("- Research Assistant at Cognition Lab"));
    }

    #[test]
    fn test_build_analysis_filters_both_datasets() {
        let alumni = vec![
            AlumniOutcome {
                major: "Psychology".to_string(),
                industry: "User Research".to_string(),
                median_salary: 72_000,
                top_skills: vec!["Research".to_string()],
            },
            AlumniOutcome {
                major: "Computer Science".to_string(),
                industry: "Tech".to_string(),
                median_salary: 95_000,
                top_skills: vec!["Python".to_string()],
            },
        ];
        let jobs = vec![
            JobPosting {
                title: "UX Research Intern".to_string(),
                company: "Brightline".to_string(),
                location: "Remote".to_string(),
                skills_required: vec!["Research".to_string(), "Figma".to_string()],
            },
            JobPosting {
                title: "Backend Engineer".to_string(),
                company: "Brightline".to_string(),
                location: "Remote".to_string(),
                skills_required: vec!["Rust".to_string()],
            },
        ];

        let analysis = build_analysis(&profile("B.A. in Psychology"), &alumni, &jobs);
        assert_eq!(analysis.major, "Psychology");
        assert_eq!(analysis.alumni.len(), 1);
        assert_eq!(analysis.job_matches.len(), 1);
        assert_eq!(analysis.job_matches[0].match_percent, 50);
    }
}
