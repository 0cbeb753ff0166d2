//! Result types produced by the scoring engine

use crate::processing::text_processor::round2;
use crate::scoring::education::EducationDetails;
use crate::scoring::format::FormatDetails;
use crate::scoring::keywords::KeywordDetails;
use crate::scoring::skills::SkillsDetails;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One scored dimension of a resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubScore<D> {
    /// Percentage in `[0, 100]`, rounded to two decimals.
    pub score: f64,
    /// Integer weight used by the aggregator.
    pub weight: u32,
    pub details: D,
}

impl<D> SubScore<D> {
    pub fn new(score: f64, weight: u32, details: D) -> Self {
        Self {
            score: round2(score.clamp(0.0, 100.0)),
            weight,
            details,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Format,
    KeywordMatch,
    SkillsMatch,
    EducationMatch,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Format,
        Category::KeywordMatch,
        Category::SkillsMatch,
        Category::EducationMatch,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Format => "Format",
            Category::KeywordMatch => "Keyword Match",
            Category::SkillsMatch => "Skills Match",
            Category::EducationMatch => "Education Match",
        };
        write!(f, "{}", label)
    }
}

/// Per-category scores. Format is always scored; the other categories are
/// present only when their inputs were supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub format: SubScore<FormatDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword_match: Option<SubScore<KeywordDetails>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_match: Option<SubScore<SkillsDetails>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_match: Option<SubScore<EducationDetails>>,
}

impl ScoreBreakdown {
    /// `(category, score, weight)` for every scored category, in fixed order.
    pub fn entries(&self) -> Vec<(Category, f64, u32)> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                self.score_and_weight(category)
                    .map(|(score, weight)| (category, score, weight))
            })
            .collect()
    }

    pub fn score_and_weight(&self, category: Category) -> Option<(f64, u32)> {
        match category {
            Category::Format => Some((self.format.score, self.format.weight)),
            Category::KeywordMatch => self.keyword_match.as_ref().map(|s| (s.score, s.weight)),
            Category::SkillsMatch => self.skills_match.as_ref().map(|s| (s.score, s.weight)),
            Category::EducationMatch => self.education_match.as_ref().map(|s| (s.score, s.weight)),
        }
    }

    pub fn contains(&self, category: Category) -> bool {
        self.score_and_weight(category).is_some()
    }

    pub fn total_weight(&self) -> u32 {
        self.entries().iter().map(|(_, _, weight)| weight).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Verdict {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Verdict::Excellent
        } else if score >= 60.0 {
            Verdict::Good
        } else {
            Verdict::NeedsImprovement
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Excellent => "Excellent",
            Verdict::Good => "Good",
            Verdict::NeedsImprovement => "Needs Improvement",
        };
        write!(f, "{}", label)
    }
}

/// The engine's output for one resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsResult {
    pub overall_score: f64,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
}

impl AtsResult {
    pub fn verdict(&self) -> Verdict {
        Verdict::from_score(self.overall_score)
    }

    pub fn passes(&self, threshold: f64) -> bool {
        self.overall_score >= threshold
    }
}
