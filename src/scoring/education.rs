//! Education requirement matching

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationOutcome {
    NoRequirement,
    Matched,
    /// The resume lists education, but none of the required credentials.
    SectionMismatch,
    NotFound,
}

impl EducationOutcome {
    pub fn score(self) -> f64 {
        match self {
            EducationOutcome::NoRequirement | EducationOutcome::Matched => 100.0,
            EducationOutcome::SectionMismatch => 50.0,
            EducationOutcome::NotFound => 0.0,
        }
    }

    pub fn found(self) -> bool {
        matches!(self, EducationOutcome::NoRequirement | EducationOutcome::Matched)
    }

    pub fn note(self) -> &'static str {
        match self {
            EducationOutcome::NoRequirement => "No specific education requirement",
            EducationOutcome::Matched => "Education requirements met",
            EducationOutcome::SectionMismatch => {
                "Education section exists but does not match requirements"
            }
            EducationOutcome::NotFound => "No education information found",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationDetails {
    pub found: bool,
    pub outcome: EducationOutcome,
    pub matched_education: Vec<String>,
    pub note: String,
}

/// Check the resume's education lines for any of the required credentials.
pub fn score_education(
    resume_education: &[String],
    required_education: &[String],
) -> (f64, EducationDetails) {
    let (outcome, matched_education) = if required_education.is_empty() {
        (EducationOutcome::NoRequirement, Vec::new())
    } else {
        let haystack = resume_education.join(" ").to_lowercase();
        let matched: Vec<String> = required_education
            .iter()
            .filter(|credential| haystack.contains(&credential.to_lowercase()))
            .cloned()
            .collect();

        if !matched.is_empty() {
            (EducationOutcome::Matched, matched)
        } else if !resume_education.is_empty() {
            (EducationOutcome::SectionMismatch, Vec::new())
        } else {
            (EducationOutcome::NotFound, Vec::new())
        }
    };

    let details = EducationDetails {
        found: outcome.found(),
        outcome,
        matched_education,
        note: outcome.note().to_string(),
    };

    (outcome.score(), details)
}
