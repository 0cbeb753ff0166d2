//! Resume quality checks that sit beside the score: validation against
//! length and layout guidelines, readability, achievements and action verbs.

use crate::error::Result;
use crate::processing::detector::SkillMatcher;
use crate::processing::patterns::TABLE_REGEX;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

pub const TECHNICAL_SKILLS: &[&str] = &[
    "Python", "JavaScript", "React", "Node.js", "Java", "C++", "C#", "SQL", "MongoDB",
    "AWS", "Docker", "Kubernetes", "Git", "GitHub", "HTML", "CSS", "TypeScript",
    "Angular", "Vue.js", "Django", "Flask", "Machine Learning", "Data Analysis",
    "Tableau", "Power BI", "REST API", "GraphQL", "Firebase", "PostgreSQL", "MySQL",
    "React Native", "Next.js", "Redux", "Jest", "Cypress", "Webpack",
];

pub const SOFT_SKILLS: &[&str] = &[
    "Communication", "Leadership", "Teamwork", "Problem Solving", "Critical Thinking",
    "Time Management", "Adaptability", "Creativity", "Collaboration",
    "Project Management", "Agile", "Scrum",
];

const ACTION_VERBS: &[&str] = &[
    "achieved", "managed", "developed", "led", "implemented", "created", "improved",
    "increased", "reduced", "optimized", "designed", "built", "established",
    "coordinated", "trained", "mentored", "supervised", "initiated", "spearheaded",
    "delivered",
];

/// Recommended word range for a one to two page resume, inclusive.
pub const RECOMMENDED_MIN_WORDS: usize = 300;
pub const RECOMMENDED_MAX_WORDS: usize = 800;

const NEUTRAL_READABILITY: f64 = 50.0;
const MIN_WORDS_FOR_READABILITY: usize = 10;
const ACHIEVEMENTS_PER_PATTERN: usize = 2;
const MAX_ACHIEVEMENTS: usize = 5;
const SUMMARY_WINDOW_CHARS: usize = 200;

static SENTENCE_END_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("Invalid sentence regex"));

static ACHIEVEMENT_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"increased\s+[A-Za-z\s]+by\s+\d+%",
        r"reduced\s+[A-Za-z\s]+by\s+\d+%",
        r"improved\s+[A-Za-z\s]+by\s+\d+%",
        r"achieved\s+\d+%",
        r"saved\s+\$\d+",
        r"generated\s+\$\d+",
        r"managed\s+\$\d+\s+budget",
        r"led\s+\d+\s+team",
        r"trained\s+\d+\s+people",
    ]
    .iter()
    .map(|pattern| {
        Regex::new(&format!("(?i){}", pattern)).expect("Invalid achievement regex")
    })
    .collect()
});

/// Layout and length problems that tend to trip up ATS parsers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeValidation {
    pub word_count: usize,
    /// False when the length is out of range or the text holds tables.
    /// Unusual characters are reported but do not fail validation.
    pub validation_passed: bool,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub word_count: usize,
    pub character_count: usize,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    /// 100 minus the average sentence length in words, clamped to `[0, 100]`.
    pub readability_score: f64,
    pub quantifiable_achievements: Vec<String>,
    pub action_verbs_count: usize,
    pub has_summary: bool,
    pub has_education: bool,
    pub has_experience: bool,
    pub validation: ResumeValidation,
}

pub struct ResumeAnalyzer {
    technical: SkillMatcher,
    soft: SkillMatcher,
    action_verbs: HashSet<&'static str>,
}

impl ResumeAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            technical: SkillMatcher::new(TECHNICAL_SKILLS)?,
            soft: SkillMatcher::new(SOFT_SKILLS)?,
            action_verbs: ACTION_VERBS.iter().copied().collect(),
        })
    }

    pub fn analyze(&self, text: &str) -> ResumeAnalysis {
        let lowered = text.to_lowercase();
        let opening: String = lowered.chars().take(SUMMARY_WINDOW_CHARS).collect();

        ResumeAnalysis {
            word_count: text.split_whitespace().count(),
            character_count: text.chars().count(),
            technical_skills: self.technical.find_in(text),
            soft_skills: self.soft.find_in(text),
            readability_score: readability_score(text),
            quantifiable_achievements: find_quantifiable_achievements(text),
            action_verbs_count: self.count_action_verbs(text),
            has_summary: opening.contains("summary") || opening.contains("objective"),
            has_education: lowered.contains("education"),
            has_experience: ["experience", "work history", "employment"]
                .iter()
                .any(|term| lowered.contains(term)),
            validation: validate_resume(text),
        }
    }

    /// Whole-word occurrences of common resume action verbs.
    pub fn count_action_verbs(&self, text: &str) -> usize {
        text.unicode_words()
            .filter(|word| self.action_verbs.contains(word.to_lowercase().as_str()))
            .count()
    }
}

pub fn validate_resume(text: &str) -> ResumeValidation {
    let word_count = text.split_whitespace().count();
    let mut issues = Vec::new();
    let mut validation_passed = true;

    if word_count > RECOMMENDED_MAX_WORDS {
        issues.push(format!(
            "Resume has {} words (recommended: 500-{} max)",
            word_count, RECOMMENDED_MAX_WORDS
        ));
        validation_passed = false;
    } else if word_count < RECOMMENDED_MIN_WORDS {
        issues.push(format!(
            "Resume has {} words (recommended: at least {})",
            word_count, RECOMMENDED_MIN_WORDS
        ));
        validation_passed = false;
    }

    if TABLE_REGEX.is_match(text) {
        issues.push("Contains tables (may not parse well in ATS)".to_string());
        validation_passed = false;
    }

    let unusual: BTreeSet<char> = text.chars().filter(|c| !c.is_ascii()).collect();
    if !unusual.is_empty() {
        issues.push(format!("Contains {} unusual characters", unusual.len()));
    }

    ResumeValidation {
        word_count,
        validation_passed,
        issues,
    }
}

/// Short text, or text with no sentences, gets a neutral 50.
pub fn readability_score(text: &str) -> f64 {
    let sentences = SENTENCE_END_REGEX
        .split(text)
        .filter(|sentence| !sentence.trim().is_empty())
        .count();
    let words = text.split_whitespace().count();

    if sentences == 0 || words < MIN_WORDS_FOR_READABILITY {
        return NEUTRAL_READABILITY;
    }

    let average_sentence_length = words as f64 / sentences as f64;
    let score = (100.0 - average_sentence_length).clamp(0.0, 100.0);
    (score * 10.0).round() / 10.0
}

/// Phrases like "increased revenue by 20%" or "saved $5000", at most two per
/// pattern and five overall.
pub fn find_quantifiable_achievements(text: &str) -> Vec<String> {
    ACHIEVEMENT_REGEXES
        .iter()
        .flat_map(|regex| {
            regex
                .find_iter(text)
                .take(ACHIEVEMENTS_PER_PATTERN)
                .map(|m| m.as_str().to_string())
        })
        .take(MAX_ACHIEVEMENTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Summary\n\
        Engineering lead. Led 5 team members across two products. \
        Increased checkout conversion by 12% and reduced cloud spend by 30%. \
        Saved $40000 per year. Mentored juniors in Python, React and Kubernetes.\n\
        Experience\n\
        Developed the billing platform with strong communication and leadership.\n\
        Education\n\
        B.S. Computer Science";

    #[test]
    fn test_skills_split_into_technical_and_soft() {
        let analysis = ResumeAnalyzer::new().unwrap().analyze(RESUME);

        assert_eq!(analysis.technical_skills, vec!["Python", "React", "Kubernetes"]);
        assert_eq!(analysis.soft_skills, vec!["Communication", "Leadership"]);
        assert!(analysis.has_summary);
        assert!(analysis.has_education);
        assert!(analysis.has_experience);
    }

    #[test]
    fn test_quantifiable_achievements() {
        let achievements = find_quantifiable_achievements(RESUME);
        assert_eq!(
            achievements,
            vec![
                "Increased checkout conversion by 12%",
                "reduced cloud spend by 30%",
                "Saved $40000",
                "Led 5 team",
            ]
        );
    }

    #[test]
    fn test_achievements_are_capped() {
        let text = "saved $1 saved $2 saved $3 generated $4 generated $5 generated $6 achieved 7%";
        let achievements = find_quantifiable_achievements(text);
        assert_eq!(
            achievements,
            vec!["achieved 7%", "saved $1", "saved $2", "generated $4", "generated $5"]
        );
    }

    #[test]
    fn test_action_verbs_are_whole_words() {
        let analyzer = ResumeAnalyzer::new().unwrap();
        assert_eq!(analyzer.count_action_verbs("Led, built and LED again"), 3);
        assert_eq!(analyzer.count_action_verbs("skilled and called"), 0);
    }

    #[test]
    fn test_readability() {
        assert_eq!(readability_score("too short."), 50.0);
        // 12 words over 2 sentences
        let text = "One two three four five six. Seven eight nine ten eleven twelve.";
        assert_eq!(readability_score(text), 94.0);
    }

    #[test]
    fn test_validation_flags_short_resume_and_tables() {
        let validation = validate_resume("Skills | Python | Rust |\nCafé");

        assert!(!validation.validation_passed);
        assert_eq!(validation.issues.len(), 3);
        assert!(validation.issues[0].contains("at least 300"));
        assert_eq!(validation.issues[1], "Contains tables (may not parse well in ATS)");
        assert_eq!(validation.issues[2], "Contains 1 unusual characters");
    }

    #[test]
    fn test_validation_passes_in_range() {
        let text = "word ".repeat(450);
        let validation = validate_resume(&text);

        assert!(validation.validation_passed);
        assert!(validation.issues.is_empty());
        assert_eq!(validation.word_count, 450);
    }

    #[test]
    fn test_unusual_characters_do_not_fail_validation() {
        let text = format!("{} naïve", "word ".repeat(400));
        let validation = validate_resume(&text);

        assert!(validation.validation_passed);
        assert_eq!(validation.issues, vec!["Contains 1 unusual characters"]);
    }
}
