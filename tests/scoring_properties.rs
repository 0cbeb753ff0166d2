//! Property tests for the scoring engine

use ats_scorer::scoring::format::score_format;
use ats_scorer::scoring::skills::score_skills;
use ats_scorer::scoring::{AtsScorer, ScoreRequest, ScoringWeights, WeightProfile};
use proptest::prelude::*;

fn skill_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z][A-Za-z0-9+#.]{0,10}", 0..8)
}

fn request() -> impl Strategy<Value = ScoreRequest> {
    (
        "[ -~\n]{0,400}",
        prop::option::of("[ -~\n]{0,200}"),
        prop::option::of(skill_list()),
        prop::option::of(skill_list()),
        prop::option::of(skill_list()),
        prop::option::of(skill_list()),
    )
        .prop_map(
            |(resume_text, job_description, resume_skills, required_skills, resume_education, required_education)| {
                ScoreRequest {
                    resume_text,
                    job_description,
                    resume_skills,
                    required_skills,
                    resume_education,
                    required_education,
                }
            },
        )
}

proptest! {
    #[test]
    fn format_score_is_a_multiple_of_25(text in "[ -~\n]{0,600}") {
        let (score, details) = score_format(&text);
        prop_assert!((0.0..=100.0).contains(&score));
        prop_assert_eq!(score, details.passed_checks() as f64 * 25.0);
    }

    #[test]
    fn skills_against_themselves_score_100(skills in skill_list()) {
        let (score, details) = score_skills(&skills, &skills);
        prop_assert_eq!(score, 100.0);
        prop_assert!(details.missing_skills.is_empty());
    }

    #[test]
    fn overall_score_in_bounds(request in request()) {
        let result = AtsScorer::new().score(&request);
        prop_assert!((0.0..=100.0).contains(&result.overall_score));
        for (_, score, _) in result.breakdown.entries() {
            prop_assert!((0.0..=100.0).contains(&score));
        }
    }

    #[test]
    fn recommendations_are_never_empty_and_capped(request in request()) {
        let result = AtsScorer::new().score(&request);
        prop_assert!(!result.recommendations.is_empty());
        prop_assert!(result.recommendations.len() <= 8);
    }

    #[test]
    fn scoring_is_idempotent(request in request()) {
        let scorer = AtsScorer::with_weights(WeightProfile::KeywordHeavy.weights()).unwrap();
        prop_assert_eq!(scorer.score(&request), scorer.score(&request));
    }

    #[test]
    fn format_only_request_scores_format(text in "[ -~\n]{0,600}") {
        let scorer = AtsScorer::with_weights(ScoringWeights::standard()).unwrap();
        let result = scorer.score(&ScoreRequest::new(text.as_str()));
        prop_assert_eq!(result.overall_score, result.breakdown.format.score);
    }
}
