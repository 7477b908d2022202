//! Skill matching and scoring over the alumni and job-posting datasets.
//!
//! Comparison is case-insensitive substring containment in either direction:
//! a user skill "JavaScript" satisfies a required "Java" and vice versa.
//! Deterministic, no tokenization or semantic matching.

use std::collections::HashSet;

use crate::models::career::{AlumniOutcome, JobPosting};

/// Case-insensitive bidirectional substring containment.
fn skills_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Percentage (0-100) of `required` skills satisfied by the `user` list,
/// rounded to the nearest integer. An empty requirement list scores 0.
pub fn skill_match_score(user: &[String], required: &[String]) -> u32 {
    if required.is_empty() {
        return 0;
    }

    let matched = required
        .iter()
        .filter(|req| user.iter().any(|u| skills_overlap(u, req)))
        .count();

    ((matched as f64 / required.len() as f64) * 100.0).round() as u32
}

/// True if any required skill overlaps any user skill. Looser than the
/// percentage score: a single overlap qualifies the posting.
pub fn is_match_candidate(user: &[String], required: &[String]) -> bool {
    required
        .iter()
        .any(|req| user.iter().any(|u| skills_overlap(u, req)))
}

/// Postings for which the user is a match candidate.
pub fn matching_jobs(user_skills: &[String], jobs: &[JobPosting]) -> Vec<JobPosting> {
    jobs.iter()
        .filter(|job| is_match_candidate(user_skills, &job.skills_required))
        .cloned()
        .collect()
}

/// Outcomes whose major contains `major`, case-insensitively.
pub fn matching_alumni_by_major(alumni: &[AlumniOutcome], major: &str) -> Vec<AlumniOutcome> {
    let needle = major.to_lowercase();
    alumni
        .iter()
        .filter(|a| a.major.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Required skills across `jobs` not covered by the user list, deduped in
/// first-seen order. Coverage here is one-directional: a user skill must
/// contain the required skill.
pub fn missing_skills(user_skills: &[String], jobs: &[JobPosting]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut missing = Vec::new();

    for job in jobs {
        for skill in &job.skills_required {
            if !seen.insert(skill.clone()) {
                continue;
            }
            let needle = skill.to_lowercase();
            let covered = user_skills
                .iter()
                .any(|u| u.to_lowercase().contains(&needle));
            if !covered {
                missing.push(skill.clone());
            }
        }
    }

    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn job(title: &str, required: &[&str]) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            company: "Brightline".to_string(),
            location: "Remote".to_string(),
            skills_required: skills(required),
        }
    }

    fn outcome(major: &str) -> AlumniOutcome {
        AlumniOutcome {
            major: major.to_string(),
            industry: "Tech".to_string(),
            median_salary: 90_000,
            top_skills: vec![],
        }
    }

    #[test]
    fn test_full_match_scores_100() {
        let user = skills(&["Python", "SQL"]);
        let required = skills(&["Python", "SQL"]);
        assert_eq!(skill_match_score(&user, &required), 100);
    }

    #[test]
    fn test_partial_match_rounds_to_nearest_percent() {
        let user = skills(&["Python"]);
        let required = skills(&["Python", "SQL", "Tableau"]);
        // 1 of 3 = 33.33 -> 33
        assert_eq!(skill_match_score(&user, &required), 33);

        let user = skills(&["Python", "SQL"]);
        // 2 of 3 = 66.67 -> 67
        assert_eq!(skill_match_score(&user, &required), 67);
    }

    #[test]
    fn test_empty_required_list_scores_zero() {
        let user = skills(&["Python"]);
        assert_eq!(skill_match_score(&user, &[]), 0);
        assert_eq!(skill_match_score(&[], &[]), 0);
    }

    #[test]
    fn test_score_is_bounded_0_to_100() {
        let user = skills(&["Python", "SQL", "R", "Java"]);
        let required = skills(&["Python"]);
        let score = skill_match_score(&user, &required);
        assert!(score <= 100, "score was {score}");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let user = skills(&["python"]);
        let required = skills(&["PYTHON"]);
        assert_eq!(skill_match_score(&user, &required), 100);
    }

    #[test]
    fn test_containment_works_in_both_directions() {
        // user contains required
        let user = skills(&["JavaScript"]);
        let required = skills(&["Java"]);
        assert_eq!(skill_match_score(&user, &required), 100);

        // required contains user
        let user = skills(&["Java"]);
        let required = skills(&["JavaScript"]);
        assert_eq!(skill_match_score(&user, &required), 100);
    }

    #[test]
    fn test_candidate_check_needs_only_one_overlap() {
        let user = skills(&["Figma"]);
        let required = skills(&["Rust", "Go", "Figma"]);
        assert!(is_match_candidate(&user, &required));
        assert!(!is_match_candidate(&user, &skills(&["Rust", "Go"])));
    }

    #[test]
    fn test_candidate_check_empty_requirements() {
        let user = skills(&["Figma"]);
        assert!(!is_match_candidate(&user, &[]));
    }

    #[test]
    fn test_matching_jobs_filters_by_candidacy() {
        let user = skills(&["Research"]);
        let jobs = vec![
            job("UX Research Intern", &["Research", "Figma"]),
            job("Backend Engineer", &["Rust", "Postgres"]),
        ];
        let matches = matching_jobs(&user, &jobs);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "UX Research Intern");
    }

    #[test]
    fn test_matching_alumni_by_major_substring() {
        let alumni = vec![outcome("Computer Science"), outcome("Psychology")];
        let matches = matching_alumni_by_major(&alumni, "computer");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].major, "Computer Science");
    }

    #[test]
    fn test_missing_skills_is_one_directional() {
        // "SQL" covers a required "sql", but "SQL" does not cover a required
        // "PostgreSQL": the user skill must contain the requirement.
        let user = skills(&["SQL"]);
        let jobs = vec![job("Analyst", &["sql", "PostgreSQL"])];
        assert_eq!(missing_skills(&user, &jobs), vec!["PostgreSQL"]);
    }

    #[test]
    fn test_missing_skills_dedupes_across_jobs() {
        let user = skills(&["Research"]);
        let jobs = vec![
            job("UX Research Intern", &["Figma", "Research"]),
            job("Product Designer", &["Figma", "Prototyping"]),
        ];
        assert_eq!(missing_skills(&user, &jobs), vec!["Figma", "Prototyping"]);
    }

    #[test]
    fn test_missing_skills_empty_when_all_covered() {
        let user = skills(&["Data Analysis", "Communication"]);
        let jobs = vec![job("Analyst", &["Data", "Communication"])];
        assert!(missing_skills(&user, &jobs).is_empty());
    }
}
