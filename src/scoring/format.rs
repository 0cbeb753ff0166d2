//! Resume format compliance scoring

use crate::processing::patterns::{EMAIL_REGEX, SPECIAL_CHAR_REGEX};
use serde::{Deserialize, Serialize};

/// Substrings that indicate a conventional resume section.
pub const SECTION_HEADERS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "summary",
    "work",
    "employment",
];

/// Word count bounds, both exclusive.
pub const MIN_WORDS: usize = 100;
pub const MAX_WORDS: usize = 2000;

pub const MAX_SPECIAL_CHAR_RATIO: f64 = 0.10;

const POINTS_PER_CHECK: f64 = 25.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatDetails {
    pub has_contact_info: bool,
    pub has_sections: bool,
    pub reasonable_length: bool,
    pub clean_formatting: bool,
    pub word_count: usize,
    pub special_char_ratio: f64,
}

impl FormatDetails {
    pub fn passed_checks(&self) -> usize {
        [
            self.has_contact_info,
            self.has_sections,
            self.reasonable_length,
            self.clean_formatting,
        ]
        .into_iter()
        .filter(|passed| *passed)
        .count()
    }
}

/// Score the structure of a resume: four checks worth 25 points each.
pub fn score_format(text: &str) -> (f64, FormatDetails) {
    let lowered = text.to_lowercase();
    let word_count = text.split_whitespace().count();

    let special_chars = SPECIAL_CHAR_REGEX.find_iter(text).count();
    let special_char_ratio = special_chars as f64 / text.chars().count().max(1) as f64;

    let details = FormatDetails {
        has_contact_info: EMAIL_REGEX.is_match(text),
        has_sections: SECTION_HEADERS.iter().any(|header| lowered.contains(header)),
        reasonable_length: word_count > MIN_WORDS && word_count < MAX_WORDS,
        clean_formatting: special_char_ratio < MAX_SPECIAL_CHAR_RATIO,
        word_count,
        special_char_ratio,
    };

    let score = details.passed_checks() as f64 * POINTS_PER_CHECK;
    (score, details)
}
