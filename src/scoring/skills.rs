//! Required skills coverage

use crate::processing::text_processor::round2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillsDetails {
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_percentage: f64,
}

/// Share of `required_skills` found in `resume_skills`, compared
/// case-insensitively. No requirement means a perfect score.
pub fn score_skills(resume_skills: &[String], required_skills: &[String]) -> (f64, SkillsDetails) {
    if required_skills.is_empty() {
        let details = SkillsDetails {
            match_percentage: 100.0,
            ..SkillsDetails::default()
        };
        return (100.0, details);
    }

    let have: HashSet<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = required_skills
        .iter()
        .cloned()
        .partition(|skill| have.contains(&skill.to_lowercase()));

    let score = matched_skills.len() as f64 / required_skills.len() as f64 * 100.0;

    let details = SkillsDetails {
        matched_skills,
        missing_skills,
        match_percentage: round2(score),
    };

    (score, details)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_requirement_is_perfect() {
        assert_eq!(score_skills(&[], &[]).0, 100.0);
        assert_eq!(score_skills(&skills(&["Rust"]), &[]).0, 100.0);
    }

    #[test]
    fn test_all_matched() {
        let required = skills(&["Python", "Java", "AWS"]);
        let (score, details) = score_skills(&required, &required);

        assert_eq!(score, 100.0);
        assert_eq!(details.matched_skills.len(), 3);
        assert!(details.missing_skills.is_empty());
    }

    #[test]
    fn test_nothing_in_resume() {
        let (score, details) = score_skills(&[], &skills(&["Python", "AWS"]));
        assert_eq!(score, 0.0);
        assert_eq!(details.missing_skills, vec!["Python", "AWS"]);
    }

    #[test]
    fn test_partial_match_keeps_required_order() {
        let (score, details) = score_skills(
            &skills(&["Java", "Python"]),
            &skills(&["Python", "JavaScript", "Java", "AWS"]),
        );

        assert_eq!(score, 50.0);
        assert_eq!(details.matched_skills, vec!["Python", "Java"]);
        assert_eq!(details.missing_skills, vec!["JavaScript", "AWS"]);
        assert_eq!(details.match_percentage, 50.0);
    }

    #[test]
    fn test_case_insensitive() {
        let (score, details) = score_skills(&skills(&["python", "JAVA"]), &skills(&["Python", "Java"]));
        assert_eq!(score, 100.0);
        // Display casing comes from the requirement.
        assert_eq!(details.matched_skills, vec!["Python", "Java"]);
    }
}
