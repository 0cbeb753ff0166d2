//! Text processing, keyword extraction and resume text cleaning

use crate::processing::patterns::{
    EMAIL_REGEX, IMAGE_REF_REGEX, TABLE_REGEX, URL_REGEX,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

/// English stop words, loaded once and shared read-only by every processor.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what",
    "which", "who", "whom", "this", "that", "that'll", "these", "those", "am", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn",
    "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't",
    "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

static NON_ASCII_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\x00-\x7F]+").expect("Invalid non-ASCII regex"));

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static CLEANING_PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\+\d{1,2}\s?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}\b")
        .expect("Invalid phone regex")
});

static PAGE_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:page\s*\d+|\d+)$").expect("Invalid page marker regex")
});

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("Invalid word regex"));

/// Tokenizer and keyword extractor. Holds a borrowed, process-wide stop word
/// table so processors are cheap to create and safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct TextProcessor {
    stop_words: &'static HashSet<&'static str>,
}

/// What `clean_resume_text` removed from the raw document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub original_length: usize,
    pub final_length: usize,
    pub tables_removed: usize,
    pub images_detected: usize,
    pub unusual_chars_removed: usize,
    pub headers_footers_removed: usize,
    pub reduction_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    pub keyword: String,
    pub count: usize,
    /// Share of all words in the text, as a percentage.
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordDensity {
    pub total_words: usize,
    pub unique_words: usize,
    pub top_keywords: Vec<KeywordFrequency>,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self {
            stop_words: &STOP_WORDS,
        }
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Tokenize text into case-folded alphanumeric words, dropping stop words.
    ///
    /// Words are found with Unicode word segmentation. A possessive `'s` is
    /// split off (`company's` gives `company`); a word still carrying
    /// punctuation after that (`node.js`, `x.com`, `don't`) is discarded.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(|word| strip_possessive(&word.to_lowercase()).to_string())
            .filter(|word| !word.is_empty() && word.chars().all(char::is_alphanumeric))
            .filter(|word| !self.is_stop_word(word))
            .collect()
    }

    /// Extract up to `max_keywords` keywords, most frequent first.
    ///
    /// Only tokens longer than two characters count. Ties keep the order in
    /// which the tokens first appear in `text`.
    pub fn extract_keywords(&self, text: &str, max_keywords: usize) -> Vec<String> {
        self.ranked_terms(self.tokenize(text))
            .into_iter()
            .take(max_keywords)
            .map(|(word, _)| word)
            .collect()
    }

    /// Count terms longer than two characters and sort by descending count.
    /// The sort is stable, so equal counts stay in first-occurrence order.
    fn ranked_terms<I>(&self, tokens: I) -> Vec<(String, usize)>
    where
        I: IntoIterator<Item = String>,
    {
        let mut ranked: Vec<(String, usize)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for token in tokens {
            if token.chars().count() <= 2 {
                continue;
            }
            match positions.get(&token) {
                Some(&idx) => ranked[idx].1 += 1,
                None => {
                    positions.insert(token.clone(), ranked.len());
                    ranked.push((token, 1));
                }
            }
        }

        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Strip artefacts that confuse ATS parsers and report what was removed.
    ///
    /// Contact details are removed too, so the cleaned text is meant for
    /// keyword work rather than format scoring.
    pub fn clean_resume_text(&self, text: &str) -> (String, CleaningReport) {
        let tables_removed = TABLE_REGEX.find_iter(text).count();
        let images_detected = IMAGE_REF_REGEX.find_iter(text).count();
        let unusual_chars_removed = text.chars().filter(|c| !c.is_ascii()).count();
        let headers_footers_removed = text
            .lines()
            .filter(|line| PAGE_MARKER_REGEX.is_match(line.trim()))
            .count();

        let cleaned = TABLE_REGEX.replace_all(text, " ");
        let cleaned = IMAGE_REF_REGEX.replace_all(&cleaned, "");
        let cleaned = URL_REGEX.replace_all(&cleaned, "");
        let cleaned = EMAIL_REGEX.replace_all(&cleaned, "");
        let cleaned = CLEANING_PHONE_REGEX.replace_all(&cleaned, "");
        let cleaned = NON_ASCII_REGEX.replace_all(&cleaned, " ");
        let cleaned = WHITESPACE_REGEX.replace_all(&cleaned, " ").trim().to_string();

        let original_length = text.chars().count();
        let final_length = cleaned.chars().count();
        let reduction_percentage = if original_length > 0 {
            let removed = original_length.saturating_sub(final_length) as f64;
            round2(removed / original_length as f64 * 100.0)
        } else {
            0.0
        };

        let report = CleaningReport {
            original_length,
            final_length,
            tables_removed,
            images_detected,
            unusual_chars_removed,
            headers_footers_removed,
            reduction_percentage,
        };

        (cleaned, report)
    }

    /// Word frequency statistics for the `top` most common non-stop words.
    pub fn word_density(&self, text: &str, top: usize) -> WordDensity {
        let words: Vec<String> = WORD_REGEX
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect();

        let total_words = words.len();
        let unique_words = words.iter().collect::<HashSet<_>>().len();

        let top_keywords = self
            .ranked_terms(words.into_iter().filter(|w| !self.is_stop_word(w)))
            .into_iter()
            .take(top)
            .map(|(keyword, count)| KeywordFrequency {
                density: round2(count as f64 / total_words as f64 * 100.0),
                keyword,
                count,
            })
            .collect();

        WordDensity {
            total_words,
            unique_words,
            top_keywords,
        }
    }
}

fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s")
        .or_else(|| word.strip_suffix("\u{2019}s"))
        .unwrap_or(word)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
