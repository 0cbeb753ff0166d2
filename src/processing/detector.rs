//! Detection of contact details, skills and education lines in resume text

use crate::error::{AtsError, Result};
use crate::processing::patterns::{EMAIL_REGEX, GITHUB_REGEX, LINKEDIN_REGEX, PHONE_REGEX};
use aho_corasick::AhoCorasick;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Skills looked for when the configuration does not provide its own list.
pub const DEFAULT_SKILL_KEYWORDS: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "C++",
    "SQL",
    "AWS",
    "Docker",
    "Machine Learning",
    "React",
    "Node.js",
    "Git",
    "Agile",
];

// Abbreviations are matched case-sensitively so that "be", "ma" or "ms" in
// running prose are not taken for degrees.
static DEGREE_ABBREVIATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:B\.?S\.?|B\.?A\.?|B\.?Tech|B\.?E\.?|M\.?S\.?|M\.?A\.?|M\.?Tech|M\.?B\.?A\.?|Ph\.?D\.?)\b",
    )
    .expect("Invalid degree abbreviation regex")
});

static DEGREE_WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:bachelor|master|doctorate|diploma|associate)(?:'?s)?\b")
        .expect("Invalid degree word regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

/// Everything the detector could infer from one resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedResume {
    pub contact_info: ContactInfo,
    pub skills: Vec<String>,
    pub education: Vec<String>,
}

/// Whole-word skill matcher over a fixed keyword list.
///
/// Both the keywords and the searched text are lower-cased with Unicode
/// rules, so `FRANÇAIS` finds `Français`.
pub struct SkillMatcher {
    automaton: AhoCorasick,
    keywords: Vec<String>,
}

impl SkillMatcher {
    /// Duplicate entries (ignoring case) are dropped, keeping the first
    /// spelling. Blank entries are ignored.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self> {
        let mut seen = HashSet::new();
        let keywords: Vec<String> = keywords
            .iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.to_lowercase()))
            .collect();

        let folded: Vec<String> = keywords.iter().map(|s| s.to_lowercase()).collect();
        let automaton = AhoCorasick::new(&folded)
            .map_err(|e| AtsError::Processing(format!("Failed to build skill matcher: {}", e)))?;

        Ok(Self { automaton, keywords })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Keywords occurring in `text` as whole words, in keyword-list order
    /// with the list's spelling.
    pub fn find_in(&self, text: &str) -> Vec<String> {
        let folded = text.to_lowercase();
        let mut found = vec![false; self.keywords.len()];

        for mat in self.automaton.find_overlapping_iter(&folded) {
            if is_word_bounded(&folded, mat.start(), mat.end()) {
                found[mat.pattern().as_usize()] = true;
            }
        }

        self.keywords
            .iter()
            .zip(found)
            .filter_map(|(skill, hit)| hit.then(|| skill.clone()))
            .collect()
    }
}

/// Keyword and pattern based detector for resume attributes.
pub struct ResumeDetector {
    skills: SkillMatcher,
}

impl ResumeDetector {
    /// Create a detector using [`DEFAULT_SKILL_KEYWORDS`].
    pub fn new() -> Result<Self> {
        Self::with_skills(DEFAULT_SKILL_KEYWORDS)
    }

    /// Create a detector for a custom skill list.
    pub fn with_skills<S: AsRef<str>>(skill_keywords: &[S]) -> Result<Self> {
        Ok(Self {
            skills: SkillMatcher::new(skill_keywords)?,
        })
    }

    pub fn skill_keywords(&self) -> &[String] {
        self.skills.keywords()
    }

    /// Run every detector over `text`.
    pub fn detect(&self, text: &str) -> DetectedResume {
        let detected = DetectedResume {
            contact_info: extract_contact_info(text),
            skills: self.extract_skills(text),
            education: extract_education(text),
        };
        debug!(
            "Detected {} skills and {} education lines",
            detected.skills.len(),
            detected.education.len()
        );
        detected
    }

    /// Skills from the keyword list that occur in `text` as whole words,
    /// ignoring case.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        self.skills.find_in(text)
    }
}

/// A match is a whole word when it is not glued to a letter or digit on
/// either side.
fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// First email, phone number, LinkedIn and GitHub profile found in `text`.
pub fn extract_contact_info(text: &str) -> ContactInfo {
    let lowered = text.to_lowercase();

    ContactInfo {
        email: EMAIL_REGEX.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE_REGEX.find(text).map(|m| m.as_str().trim().to_string()),
        linkedin: LINKEDIN_REGEX.find(&lowered).map(|m| m.as_str().to_string()),
        github: GITHUB_REGEX.find(&lowered).map(|m| m.as_str().to_string()),
    }
}

/// Lines of `text` that mention a degree or credential, trimmed.
pub fn extract_education(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| DEGREE_ABBREVIATION_REGEX.is_match(line) || DEGREE_WORD_REGEX.is_match(line))
        .map(|line| line.trim().to_string())
        .collect()
}
