//! Keyword overlap between a resume and a job description

use crate::processing::text_processor::{round2, TextProcessor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Keywords taken from each side before comparing.
pub const KEYWORD_LIMIT: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordDetails {
    /// Job keywords present in the resume, alphabetical.
    pub matched_keywords: Vec<String>,
    /// Job keywords absent from the resume, alphabetical.
    pub missing_keywords: Vec<String>,
    pub match_percentage: f64,
}

/// Share of the job description's top keywords that the resume's top
/// keywords also contain. A job description without usable keywords scores 0.
pub fn score_keywords(
    processor: &TextProcessor,
    resume_text: &str,
    job_description: &str,
) -> (f64, KeywordDetails) {
    let job_keywords: BTreeSet<String> = processor
        .extract_keywords(job_description, KEYWORD_LIMIT)
        .into_iter()
        .collect();

    if job_keywords.is_empty() {
        return (0.0, KeywordDetails::default());
    }

    let resume_keywords: BTreeSet<String> = processor
        .extract_keywords(resume_text, KEYWORD_LIMIT)
        .into_iter()
        .collect();

    let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = job_keywords
        .iter()
        .cloned()
        .partition(|keyword| resume_keywords.contains(keyword));

    let score = matched_keywords.len() as f64 / job_keywords.len() as f64 * 100.0;

    let details = KeywordDetails {
        matched_keywords,
        missing_keywords,
        match_percentage: round2(score),
    };

    (score, details)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_match() {
        let processor = TextProcessor::new();
        let text = "Python Java JavaScript AWS Docker Kubernetes";
        let (score, details) = score_keywords(&processor, text, text);

        assert_eq!(score, 100.0);
        assert_eq!(details.matched_keywords.len(), 6);
        assert!(details.missing_keywords.is_empty());
    }

    #[test]
    fn test_partial_match_is_sorted() {
        let processor = TextProcessor::new();
        let (score, details) = score_keywords(
            &processor,
            "Python Java experience in software development",
            "Python JavaScript React required for frontend development",
        );

        // job keywords: python, javascript, react, required, frontend, development
        assert_eq!(details.matched_keywords, vec!["development", "python"]);
        assert_eq!(
            details.missing_keywords,
            vec!["frontend", "javascript", "react", "required"]
        );
        assert!((score - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(details.match_percentage, 33.33);
    }

    #[test]
    fn test_case_insensitive() {
        let processor = TextProcessor::new();
        let (score, _) = score_keywords(&processor, "KUBERNETES terraform", "kubernetes Terraform");
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_possessives_match_plain_words() {
        let processor = TextProcessor::new();
        let (score, details) = score_keywords(
            &processor,
            "company platform team roadmap",
            "company's platform team's roadmap",
        );

        assert_eq!(score, 100.0);
        assert_eq!(
            details.matched_keywords,
            vec!["company", "platform", "roadmap", "team"]
        );
    }

    #[test]
    fn test_empty_job_description() {
        let processor = TextProcessor::new();
        let (score, details) = score_keywords(&processor, "Python developer", "");

        assert_eq!(score, 0.0);
        assert!(details.matched_keywords.is_empty());
        assert!(details.missing_keywords.is_empty());
    }

    #[test]
    fn test_empty_resume() {
        let processor = TextProcessor::new();
        let (score, details) = score_keywords(&processor, "", "Rust engineer");

        assert_eq!(score, 0.0);
        assert_eq!(details.missing_keywords, vec!["engineer", "rust"]);
    }
}
