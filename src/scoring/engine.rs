//! Scoring engine: runs the applicable sub-scorers, aggregates them and
//! derives recommendations

use crate::error::Result;
use crate::processing::text_processor::TextProcessor;
use crate::scoring::aggregate::{weighted_average, ScoringWeights};
use crate::scoring::breakdown::{AtsResult, ScoreBreakdown, SubScore};
use crate::scoring::education::score_education;
use crate::scoring::format::score_format;
use crate::scoring::keywords::score_keywords;
use crate::scoring::recommendations::generate_recommendations;
use crate::scoring::skills::score_skills;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Inputs for one scoring call. Every optional field left as `None` removes
/// its category from the result instead of scoring it as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub resume_text: String,
    pub job_description: Option<String>,
    pub resume_skills: Option<Vec<String>>,
    pub required_skills: Option<Vec<String>>,
    pub resume_education: Option<Vec<String>>,
    pub required_education: Option<Vec<String>>,
}

impl ScoreRequest {
    pub fn new(resume_text: impl Into<String>) -> Self {
        Self {
            resume_text: resume_text.into(),
            ..Self::default()
        }
    }

    pub fn with_job_description(mut self, job_description: impl Into<String>) -> Self {
        self.job_description = Some(job_description.into());
        self
    }

    pub fn with_resume_skills(mut self, skills: Vec<String>) -> Self {
        self.resume_skills = Some(skills);
        self
    }

    pub fn with_required_skills(mut self, skills: Vec<String>) -> Self {
        self.required_skills = Some(skills);
        self
    }

    pub fn with_resume_education(mut self, education: Vec<String>) -> Self {
        self.resume_education = Some(education);
        self
    }

    pub fn with_required_education(mut self, education: Vec<String>) -> Self {
        self.required_education = Some(education);
        self
    }

    /// The job description, unless it is missing or empty. Whitespace-only
    /// text still counts and scores 0 for keywords.
    pub fn job_description(&self) -> Option<&str> {
        self.job_description.as_deref().filter(|text| !text.is_empty())
    }

    fn skills(&self) -> Option<(&[String], &[String])> {
        match (&self.resume_skills, &self.required_skills) {
            (Some(resume), Some(required)) => Some((resume.as_slice(), required.as_slice())),
            _ => None,
        }
    }

    fn education(&self) -> Option<(&[String], &[String])> {
        match (&self.resume_education, &self.required_education) {
            (Some(resume), Some(required)) => Some((resume.as_slice(), required.as_slice())),
            _ => None,
        }
    }
}

/// Stateless ATS scorer. Safe to share between threads; every call is a pure
/// function of its request and the configured weights.
#[derive(Debug, Clone, Copy)]
pub struct AtsScorer {
    processor: TextProcessor,
    weights: ScoringWeights,
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl AtsScorer {
    /// Scorer with [`ScoringWeights::standard`].
    pub fn new() -> Self {
        Self {
            processor: TextProcessor::new(),
            weights: ScoringWeights::standard(),
        }
    }

    pub fn with_weights(weights: ScoringWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self {
            processor: TextProcessor::new(),
            weights,
        })
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(&self, request: &ScoreRequest) -> AtsResult {
        let mut contributions = Vec::with_capacity(4);

        let (format_score, format_details) = score_format(&request.resume_text);
        contributions.push((format_score, self.weights.format));
        debug!("Format score: {}", format_score);

        let keyword_match = request.job_description().map(|job| {
            let (score, details) = score_keywords(&self.processor, &request.resume_text, job);
            contributions.push((score, self.weights.keyword_match));
            debug!("Keyword match score: {:.2}", score);
            SubScore::new(score, self.weights.keyword_match, details)
        });

        let skills_match = request.skills().map(|(resume, required)| {
            let (score, details) = score_skills(resume, required);
            contributions.push((score, self.weights.skills_match));
            debug!("Skills match score: {:.2}", score);
            SubScore::new(score, self.weights.skills_match, details)
        });

        let education_match = request.education().map(|(resume, required)| {
            let (score, details) = score_education(resume, required);
            contributions.push((score, self.weights.education_match));
            debug!("Education match score: {:.2}", score);
            SubScore::new(score, self.weights.education_match, details)
        });

        let breakdown = ScoreBreakdown {
            format: SubScore::new(format_score, self.weights.format, format_details),
            keyword_match,
            skills_match,
            education_match,
        };

        let overall_score = weighted_average(&contributions);
        let recommendations = generate_recommendations(&breakdown);
        info!(
            "ATS score {:.2} over {} categories",
            overall_score,
            contributions.len()
        );

        AtsResult {
            overall_score,
            breakdown,
            recommendations,
        }
    }
}
