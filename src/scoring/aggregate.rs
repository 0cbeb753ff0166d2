//! Category weights and the weighted average over scored categories

use crate::error::{AtsError, Result};
use crate::processing::text_processor::round2;
use crate::scoring::breakdown::Category;
use serde::{Deserialize, Serialize};

/// Upper bound on the sum of all weights; anything larger is a typo.
const MAX_TOTAL_WEIGHT: u32 = 1000;

/// Relative importance of each category. Only categories that are actually
/// scored take part in the average, so the weights need not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub format: u32,
    pub keyword_match: u32,
    pub skills_match: u32,
    pub education_match: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScoringWeights {
    pub const fn standard() -> Self {
        Self {
            format: 20,
            keyword_match: 40,
            skills_match: 25,
            education_match: 15,
        }
    }

    /// Keyword overlap first, then layout and structure.
    pub const fn keyword_heavy() -> Self {
        Self {
            format: 30,
            keyword_match: 40,
            skills_match: 15,
            education_match: 15,
        }
    }

    pub fn weight_for(&self, category: Category) -> u32 {
        match category {
            Category::Format => self.format,
            Category::KeywordMatch => self.keyword_match,
            Category::SkillsMatch => self.skills_match,
            Category::EducationMatch => self.education_match,
        }
    }

    /// Format is scored on every request, so a zero format weight could leave
    /// the average without a denominator.
    pub fn validate(&self) -> Result<()> {
        if self.format == 0 {
            return Err(AtsError::InvalidWeights(
                "format weight must be greater than zero".to_string(),
            ));
        }

        let total = Category::ALL
            .into_iter()
            .try_fold(0u32, |acc, category| acc.checked_add(self.weight_for(category)));

        match total {
            Some(total) if total <= MAX_TOTAL_WEIGHT => Ok(()),
            _ => Err(AtsError::InvalidWeights(format!(
                "weights must sum to at most {}",
                MAX_TOTAL_WEIGHT
            ))),
        }
    }
}

/// Named weight presets selectable from the CLI and configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightProfile {
    Standard,
    KeywordHeavy,
}

impl WeightProfile {
    pub fn weights(self) -> ScoringWeights {
        match self {
            WeightProfile::Standard => ScoringWeights::standard(),
            WeightProfile::KeywordHeavy => ScoringWeights::keyword_heavy(),
        }
    }
}

/// `Σ(score × weight) / Σ(weight)` over the given `(score, weight)` pairs,
/// clamped to `[0, 100]` and rounded to two decimals. Zero total weight
/// yields 0.
pub fn weighted_average(contributions: &[(f64, u32)]) -> f64 {
    let total_weight: u32 = contributions.iter().map(|(_, weight)| weight).sum();
    if total_weight == 0 {
        return 0.0;
    }

    let weighted_sum: f64 = contributions
        .iter()
        .map(|(score, weight)| score * f64::from(*weight))
        .sum();

    round2((weighted_sum / f64::from(total_weight)).clamp(0.0, 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_weights() {
        let weights = ScoringWeights::default();
        assert_eq!(weights, ScoringWeights::standard());
        assert_eq!(weights.weight_for(Category::KeywordMatch), 40);
        assert!(weights.validate().is_ok());
        assert!(ScoringWeights::keyword_heavy().validate().is_ok());
    }

    #[test]
    fn test_zero_format_weight_rejected() {
        let weights = ScoringWeights {
            format: 0,
            ..ScoringWeights::standard()
        };
        assert!(matches!(weights.validate(), Err(AtsError::InvalidWeights(_))));
    }

    #[test]
    fn test_oversized_weights_rejected() {
        let weights = ScoringWeights {
            keyword_match: u32::MAX,
            ..ScoringWeights::standard()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_single_category_average_is_its_score() {
        assert_eq!(weighted_average(&[(75.0, 20)]), 75.0);
    }

    #[test]
    fn test_weights_renormalize_over_included_categories() {
        // format 75, skills 50, education 100; keyword match excluded
        let overall = weighted_average(&[(75.0, 20), (50.0, 25), (100.0, 15)]);
        assert_eq!(overall, 70.83);
    }

    #[test]
    fn test_zero_weight_total() {
        assert_eq!(weighted_average(&[]), 0.0);
        assert_eq!(weighted_average(&[(90.0, 0)]), 0.0);
    }

    #[test]
    fn test_profiles() {
        assert_eq!(WeightProfile::Standard.weights(), ScoringWeights::standard());
        assert_eq!(WeightProfile::KeywordHeavy.weights().format, 30);
    }
}
