//! ATS scorer library
//!
//! Scores resume text for applicant tracking system compatibility and
//! produces prioritized recommendations. Document extraction, detection of
//! skills and education, and report output sit around the scoring engine.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod scoring;

pub use config::Config;
pub use error::{AtsError, ExtractionError, Result};
pub use scoring::{AtsResult, AtsScorer, ScoreRequest};
