//! Scripted assistant replies: an ordered keyword rule table rendered
//! against the loaded profile and datasets. First matching rule wins; there
//! is no ranking and no ambiguity resolution beyond rule order.

use crate::matching;
use crate::models::career::{AlumniOutcome, JobPosting};
use crate::models::resume::ResumeProfile;
use crate::resume::extract_major;

/// Reply used while the profile fixture has not finished loading.
pub const LOADING_REPLY: &str = "Loading your profile data...";

/// Live data a reply is rendered against: the profile plus the alumni and
/// job subsets already filtered for it.
#[derive(Debug, Clone, Default)]
pub struct ChatSnapshot {
    pub profile: Option<ResumeProfile>,
    pub alumni: Vec<AlumniOutcome>,
    pub jobs: Vec<JobPosting>,
}

struct Rule {
    matches: fn(&str) -> bool,
    render: fn(&ResumeProfile, &ChatSnapshot) -> String,
}

/// Evaluated top to bottom; the final rule matches everything.
const RULES: &[Rule] = &[
    Rule {
        matches: |m| m.contains("career") || m.contains("job"),
        render: render_career,
    },
    Rule {
        matches: |m| m.contains("alumni"),
        render: render_alumni,
    },
    Rule {
        matches: |m| m.contains("skill") || m.contains("improve"),
        render: render_skill_gaps,
    },
    Rule {
        matches: |m| m.contains("interview"),
        render: render_interview,
    },
    Rule {
        matches: |_| true,
        render: render_fallback,
    },
];

/// Renders the reply for one user utterance.
pub fn respond(input: &str, snapshot: &ChatSnapshot) -> String {
    let Some(profile) = &snapshot.profile else {
        return LOADING_REPLY.to_string();
    };

    let lowered = input.to_lowercase();
    for rule in RULES {
        if (rule.matches)(&lowered) {
            return (rule.render)(profile, snapshot);
        }
    }
    // The last rule matches everything.
    render_fallback(profile, snapshot)
}

fn render_career(profile: &ResumeProfile, snapshot: &ChatSnapshot) -> String {
    let major = extract_major(&profile.education);
    let mut reply = format!(
        "Based on your background in {major} and your skills ({}), here are some insights:\n\n",
        profile.skills.join(", ")
    );

    if let Some(alum) = snapshot.alumni.first() {
        reply.push_str(&format!(
            "Alumni outcomes for {} majors:\n- Industry: {}\n- Median salary: ${}\n- Top skills: {}\n\n",
            alum.major,
            alum.industry,
            format_salary(alum.median_salary),
            alum.top_skills.join(", ")
        ));
    }

    if !snapshot.jobs.is_empty() {
        reply.push_str("Matching job opportunities:\n");
        for job in &snapshot.jobs {
            let percent = matching::skill_match_score(&profile.skills, &job.skills_required);
            reply.push_str(&format!(
                "\n- {} at {}\n  Location: {}\n  Skills match: {percent}%\n  Required: {}\n",
                job.title,
                job.company,
                job.location,
                job.skills_required.join(", ")
            ));
        }
    }

    let organizations = profile
        .experiences
        .iter()
        .map(|e| e.organization.as_str())
        .collect::<Vec<_>>()
        .join(" and ");
    reply.push_str(&format!(
        "\nYour experience at {organizations} gives you strong credentials. \
         Would you like more details about any of these opportunities?"
    ));
    reply
}

fn render_alumni(profile: &ResumeProfile, snapshot: &ChatSnapshot) -> String {
    let major = extract_major(&profile.education);

    if snapshot.alumni.is_empty() {
        return format!(
            "I'm currently loading alumni data for {major} majors. This information will \
             help you understand career paths taken by graduates in your field."
        );
    }

    let mut reply = format!("Here's what I found about alumni with your major ({major}):\n\n");
    for alum in &snapshot.alumni {
        reply.push_str(&format!(
            "{} -> {}\n- Median salary: ${}\n- Key skills: {}\n\n",
            alum.major,
            alum.industry,
            format_salary(alum.median_salary),
            alum.top_skills.join(", ")
        ));
    }
    reply.push_str(
        "This data can help you understand industry expectations and salary ranges in your field.",
    );
    reply
}

fn render_skill_gaps(profile: &ResumeProfile, snapshot: &ChatSnapshot) -> String {
    let missing = matching::missing_skills(&profile.skills, &snapshot.jobs);
    let mut reply = format!("Your current skills: {}\n\n", profile.skills.join(", "));

    if missing.is_empty() {
        let focus: Vec<&str> = profile.skills.iter().take(2).map(String::as_str).collect();
        reply.push_str(&format!(
            "Great news! Your skills align well with current job requirements. Consider \
             deepening your expertise in {} to stand out even more.",
            focus.join(" and ")
        ));
    } else {
        reply.push_str("Based on current job postings, consider developing:\n");
        for skill in &missing {
            reply.push_str(&format!("- {skill}\n"));
        }
        reply.push_str("\nThese skills appear frequently in jobs matching your profile.");
    }
    reply
}

fn render_interview(profile: &ResumeProfile, _snapshot: &ChatSnapshot) -> String {
    let major = extract_major(&profile.education);
    let organization = profile
        .experiences
        .first()
        .map(|e| e.organization.as_str())
        .unwrap_or("your past roles");
    let highlights: Vec<&str> = profile.skills.iter().take(2).map(String::as_str).collect();

    format!(
        "Great question! For roles in {major}-related fields, interviewers typically assess:\n\n\
         - Your practical experience (like at {organization})\n\
         - Technical skills: {}\n\
         - Problem-solving and communication abilities\n\
         - Passion for the field\n\n\
         I can help you prepare specific answers based on your background. What type of \
         role are you interviewing for?",
        highlights.join(", ")
    )
}

fn render_fallback(profile: &ResumeProfile, _snapshot: &ChatSnapshot) -> String {
    let major = extract_major(&profile.education);
    let organization = profile
        .experiences
        .first()
        .map(|e| e.organization.as_str())
        .unwrap_or("your past roles");

    format!(
        "That's an interesting question! Based on your {major} background and experience \
         at {organization}, I can provide guidance on career paths, skill development, or \
         connecting with alumni in related fields. Could you tell me more about what \
         specific aspect you'd like to explore?"
    )
}

fn format_salary(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
