//! Compiled patterns shared by the text processor, detector and scorers

use regex::Regex;
use std::sync::LazyLock;

pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("Invalid email regex")
});

pub static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?(?:\(?\d{3}\)?[-.\s]?)\d{3}[-.\s]?\d{4}")
        .expect("Invalid phone regex")
});

pub static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("Invalid URL regex"));

pub static LINKEDIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"linkedin\.com/in/[\w\-]+").expect("Invalid LinkedIn regex"));

pub static GITHUB_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/[\w\-]+").expect("Invalid GitHub regex"));

/// Any character that is neither a word character nor whitespace.
pub static SPECIAL_CHAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid special character regex"));

/// Pipe-delimited table cells left over from PDF/DOCX tables.
pub static TABLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\s*[^|\n]+\s*\|").expect("Invalid table regex"));

pub static IMAGE_REF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[(image|figure|graph|chart|picture)\]").expect("Invalid image regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_regex() {
        assert!(EMAIL_REGEX.is_match("reach me at jane.doe+cv@mail.example.org"));
        assert!(EMAIL_REGEX.is_match("John Doe john@x.com\nExperience"));
        assert!(!EMAIL_REGEX.is_match("jane at example dot com"));
        assert!(!EMAIL_REGEX.is_match("user@localhost"));
    }

    #[test]
    fn test_phone_regex() {
        assert!(PHONE_REGEX.is_match("Phone: 555-123-4567"));
        assert!(PHONE_REGEX.is_match("(555) 123 4567"));
        assert!(PHONE_REGEX.is_match("+1 555.123.4567"));
        assert!(!PHONE_REGEX.is_match("Class of 2019"));
    }

    #[test]
    fn test_special_chars_exclude_underscore() {
        assert_eq!(SPECIAL_CHAR_REGEX.find_iter("snake_case name").count(), 0);
        assert_eq!(SPECIAL_CHAR_REGEX.find_iter("a@b.c!").count(), 3);
    }
}
