//! Rule-based improvement suggestions derived from a score breakdown

use crate::scoring::breakdown::ScoreBreakdown;

pub const MAX_RECOMMENDATIONS: usize = 8;

const FORMAT_THRESHOLD: f64 = 80.0;
const KEYWORD_THRESHOLD: f64 = 60.0;
const SKILLS_THRESHOLD: f64 = 70.0;
const MISSING_KEYWORDS_SHOWN: usize = 5;

pub const CONTACT_INFO_TIP: &str = "Add clear contact information (email, phone)";
pub const SECTIONS_TIP: &str = "Organize resume with clear sections (Experience, Education, Skills)";
pub const LENGTH_TIP: &str = "Adjust resume length to 100-2000 words for optimal readability";
pub const EDUCATION_TIP: &str =
    "Ensure education section is clearly visible and matches job requirements";
pub const ALL_GOOD: &str = "Great job! Your resume is well-optimized for ATS systems.";

/// Suggestions in priority order: format, keywords, skills, education.
/// Never empty and never longer than [`MAX_RECOMMENDATIONS`].
pub fn generate_recommendations(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut recommendations = Vec::new();

    let format = &breakdown.format;
    if format.score < FORMAT_THRESHOLD {
        if !format.details.has_contact_info {
            recommendations.push(CONTACT_INFO_TIP.to_string());
        }
        if !format.details.has_sections {
            recommendations.push(SECTIONS_TIP.to_string());
        }
        if !format.details.reasonable_length {
            recommendations.push(LENGTH_TIP.to_string());
        }
    }

    if let Some(keywords) = &breakdown.keyword_match {
        let missing = &keywords.details.missing_keywords;
        if keywords.score < KEYWORD_THRESHOLD && !missing.is_empty() {
            let shown: Vec<&str> = missing
                .iter()
                .take(MISSING_KEYWORDS_SHOWN)
                .map(String::as_str)
                .collect();
            recommendations.push(format!(
                "Include more relevant keywords: {}",
                shown.join(", ")
            ));
        }
    }

    if let Some(skills) = &breakdown.skills_match {
        let missing = &skills.details.missing_skills;
        if skills.score < SKILLS_THRESHOLD && !missing.is_empty() {
            recommendations.push(format!(
                "Add missing required skills: {}",
                missing.join(", ")
            ));
        }
    }

    if let Some(education) = &breakdown.education_match {
        if !education.details.found {
            recommendations.push(EDUCATION_TIP.to_string());
        }
    }

    if recommendations.is_empty() {
        recommendations.push(ALL_GOOD.to_string());
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::breakdown::SubScore;
    use crate::scoring::education::score_education;
    use crate::scoring::format::score_format;
    use crate::scoring::keywords::KeywordDetails;
    use crate::scoring::skills::score_skills;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn format_only(text: &str) -> ScoreBreakdown {
        let (score, details) = score_format(text);
        ScoreBreakdown {
            format: SubScore::new(score, 20, details),
            keyword_match: None,
            skills_match: None,
            education_match: None,
        }
    }

    fn well_formatted() -> String {
        format!("jane@example.com\nExperience\n{}", vec!["shipped"; 150].join(" "))
    }

    #[test]
    fn test_every_format_flag_reported() {
        let recommendations = generate_recommendations(&format_only("hello"));
        assert_eq!(recommendations, vec![CONTACT_INFO_TIP, SECTIONS_TIP, LENGTH_TIP]);
    }

    #[test]
    fn test_fallback_when_nothing_fires() {
        let recommendations = generate_recommendations(&format_only(&well_formatted()));
        assert_eq!(recommendations, vec![ALL_GOOD]);
    }

    #[test]
    fn test_keywords_limited_to_five() {
        let mut breakdown = format_only(&well_formatted());
        breakdown.keyword_match = Some(SubScore::new(
            10.0,
            40,
            KeywordDetails {
                matched_keywords: strings(&["rust"]),
                missing_keywords: strings(&["alpha", "beta", "delta", "epsilon", "gamma", "kappa", "zeta"]),
                match_percentage: 10.0,
            },
        ));

        let recommendations = generate_recommendations(&breakdown);
        assert_eq!(
            recommendations,
            vec!["Include more relevant keywords: alpha, beta, delta, epsilon, gamma"]
        );
    }

    #[test]
    fn test_keyword_rule_needs_missing_keywords() {
        let mut breakdown = format_only(&well_formatted());
        breakdown.keyword_match = Some(SubScore::new(0.0, 40, KeywordDetails::default()));

        assert_eq!(generate_recommendations(&breakdown), vec![ALL_GOOD]);
    }

    #[test]
    fn test_skills_and_education_rules() {
        let mut breakdown = format_only(&well_formatted());
        let (skills_score, skills_details) =
            score_skills(&strings(&["Python"]), &strings(&["Python", "AWS", "Docker"]));
        let (education_score, education_details) = score_education(&[], &strings(&["Master"]));
        breakdown.skills_match = Some(SubScore::new(skills_score, 25, skills_details));
        breakdown.education_match = Some(SubScore::new(education_score, 15, education_details));

        let recommendations = generate_recommendations(&breakdown);
        assert_eq!(
            recommendations,
            vec![
                "Add missing required skills: AWS, Docker".to_string(),
                EDUCATION_TIP.to_string(),
            ]
        );
    }

    #[test]
    fn test_skills_above_threshold_are_quiet() {
        let mut breakdown = format_only(&well_formatted());
        let required = strings(&["Python", "AWS", "Docker", "Git"]);
        let (score, details) = score_skills(&strings(&["python", "aws", "docker"]), &required);
        breakdown.skills_match = Some(SubScore::new(score, 25, details));

        assert_eq!(generate_recommendations(&breakdown), vec![ALL_GOOD]);
    }
}
