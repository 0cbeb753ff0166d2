//! Report structures wrapping a scoring result with its context

use crate::processing::analysis::ResumeAnalysis;
use crate::processing::detector::{ContactInfo, DetectedResume};
use crate::processing::text_processor::{CleaningReport, WordDensity};
use crate::scoring::aggregate::ScoringWeights;
use crate::scoring::breakdown::{AtsResult, Verdict};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything produced for one resume: the score plus what was detected on
/// the way there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,

    pub result: AtsResult,

    pub contact_info: ContactInfo,

    /// Skills detected in the resume text
    pub skills_found: Vec<String>,

    /// Education lines detected in the resume text
    pub education_found: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleaning: Option<CleaningReport>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_density: Option<WordDensity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ResumeAnalysis>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub resume_file: String,
    /// Where the job description came from: a file path, "inline text", or
    /// nothing when none was given.
    pub job_source: Option<String>,
    pub scorer_version: String,
    pub weights: ScoringWeights,
    pub pass_threshold: f64,
}

impl AnalysisReport {
    pub fn new(
        resume_file: impl Into<String>,
        result: AtsResult,
        detected: DetectedResume,
        weights: ScoringWeights,
        pass_threshold: f64,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                resume_file: resume_file.into(),
                job_source: None,
                scorer_version: env!("CARGO_PKG_VERSION").to_string(),
                weights,
                pass_threshold,
            },
            result,
            contact_info: detected.contact_info,
            skills_found: detected.skills,
            education_found: detected.education,
            cleaning: None,
            word_density: None,
            analysis: None,
        }
    }

    pub fn with_job_source(mut self, source: impl Into<String>) -> Self {
        self.metadata.job_source = Some(source.into());
        self
    }

    pub fn with_cleaning(mut self, cleaning: CleaningReport) -> Self {
        self.cleaning = Some(cleaning);
        self
    }

    pub fn with_word_density(mut self, density: WordDensity) -> Self {
        self.word_density = Some(density);
        self
    }

    pub fn with_analysis(mut self, analysis: ResumeAnalysis) -> Self {
        self.analysis = Some(analysis);
        self
    }

    pub fn passed(&self) -> bool {
        self.result.passes(self.metadata.pass_threshold)
    }

    pub fn verdict(&self) -> Verdict {
        self.result.verdict()
    }
}
