//! ATS scoring engine
//!
//! Four independent sub-scorers (format, keyword match, skills match,
//! education match) feed a weighted aggregator. Categories whose inputs are
//! absent are left out of both the breakdown and the average, so the weights
//! of the remaining categories are renormalized implicitly.

pub mod aggregate;
pub mod breakdown;
pub mod education;
pub mod engine;
pub mod format;
pub mod keywords;
pub mod recommendations;
pub mod skills;

pub use aggregate::{ScoringWeights, WeightProfile};
pub use breakdown::{AtsResult, Category, ScoreBreakdown, SubScore, Verdict};
pub use engine::{AtsScorer, ScoreRequest};
