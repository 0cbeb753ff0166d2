//! Output formatters for console, JSON and Markdown reports

use crate::config::OutputFormat;
use crate::error::{AtsError, Result};
use crate::output::report::AnalysisReport;
use crate::processing::analysis::ResumeAnalysis;
use crate::scoring::breakdown::{ScoreBreakdown, Verdict};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that picks the formatter registered for a format
pub struct ReportGenerator {
    formatters: Vec<Box<dyn OutputFormatter>>,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        let rule = "=".repeat(60);
        if self.use_colors {
            format!("\n{}\n {}\n{}\n", rule, title.color(Color::Blue).bold(), rule)
        } else {
            format!("\n{}\n {}\n{}\n", rule, title, rule)
        }
    }

    fn format_verdict(&self, verdict: Verdict) -> String {
        let (badge, color) = match verdict {
            Verdict::Excellent => ("⭐ Excellent", Color::Green),
            Verdict::Good => ("✓ Good", Color::Yellow),
            Verdict::NeedsImprovement => ("⚠ Needs Improvement", Color::Red),
        };

        if self.use_colors {
            badge.color(color).bold().to_string()
        } else {
            badge.to_string()
        }
    }

    fn check(&self, passed: bool) -> String {
        if passed {
            self.colorize("✓", Color::Green)
        } else {
            self.colorize("✗", Color::Red)
        }
    }

    fn format_breakdown(&self, breakdown: &ScoreBreakdown) -> String {
        let mut output = String::new();

        let format = &breakdown.format;
        output.push_str(&format!("\nFormat: {}% (Weight: {}%)\n", format.score, format.weight));
        output.push_str(&format!(
            "  {} Contact Info: {}\n",
            self.check(format.details.has_contact_info),
            yes_no(format.details.has_contact_info)
        ));
        output.push_str(&format!(
            "  {} Clear Sections: {}\n",
            self.check(format.details.has_sections),
            yes_no(format.details.has_sections)
        ));
        output.push_str(&format!(
            "  {} Appropriate Length: {} ({} words)\n",
            self.check(format.details.reasonable_length),
            yes_no(format.details.reasonable_length),
            format.details.word_count
        ));
        output.push_str(&format!(
            "  {} Clean Formatting: {}\n",
            self.check(format.details.clean_formatting),
            yes_no(format.details.clean_formatting)
        ));

        if let Some(keywords) = &breakdown.keyword_match {
            output.push_str(&format!(
                "\nKeyword Match: {}% (Weight: {}%)\n",
                keywords.score, keywords.weight
            ));
            output.push_str(&format!(
                "  Matched keywords: {}\n",
                keywords.details.matched_keywords.len()
            ));
            output.push_str(&format!(
                "  Missing keywords: {}\n",
                keywords.details.missing_keywords.len()
            ));
            if self.detailed && !keywords.details.missing_keywords.is_empty() {
                output.push_str(&format!(
                    "  {}\n",
                    self.colorize(&keywords.details.missing_keywords.join(", "), Color::BrightBlack)
                ));
            }
        }

        if let Some(skills) = &breakdown.skills_match {
            output.push_str(&format!(
                "\nSkills Match: {}% (Weight: {}%)\n",
                skills.score, skills.weight
            ));
            if !skills.details.matched_skills.is_empty() {
                output.push_str(&format!(
                    "  {} Matched: {}\n",
                    self.check(true),
                    skills.details.matched_skills.join(", ")
                ));
            }
            if !skills.details.missing_skills.is_empty() {
                output.push_str(&format!(
                    "  {} Missing: {}\n",
                    self.check(false),
                    skills.details.missing_skills.join(", ")
                ));
            }
        }

        if let Some(education) = &breakdown.education_match {
            output.push_str(&format!(
                "\nEducation Match: {}% (Weight: {}%)\n",
                education.score, education.weight
            ));
            output.push_str(&format!(
                "  {} {}\n",
                self.check(education.details.found),
                education.details.note
            ));
        }

        output
    }

    fn format_analysis(&self, analysis: &ResumeAnalysis) -> String {
        let validation = &analysis.validation;
        let mut output = format!(
            "{} Validation: {}\n",
            self.check(validation.validation_passed),
            if validation.validation_passed { "Passed" } else { "Issues found" }
        );
        for issue in &validation.issues {
            output.push_str(&format!("  • {}\n", issue));
        }

        if self.detailed {
            output.push_str(&format!("Readability: {}/100\n", analysis.readability_score));
            output.push_str(&format!("Action verbs: {}\n", analysis.action_verbs_count));
            output.push_str(&format!(
                "Sections: summary {}, experience {}, education {}\n",
                self.check(analysis.has_summary),
                self.check(analysis.has_experience),
                self.check(analysis.has_education)
            ));
            if !analysis.technical_skills.is_empty() {
                output.push_str(&format!("Technical skills: {}\n", analysis.technical_skills.join(", ")));
            }
            if !analysis.soft_skills.is_empty() {
                output.push_str(&format!("Soft skills: {}\n", analysis.soft_skills.join(", ")));
            }
            if !analysis.quantifiable_achievements.is_empty() {
                output.push_str("Quantified achievements:\n");
                for achievement in &analysis.quantifiable_achievements {
                    output.push_str(&format!("  • {}\n", achievement));
                }
            }
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 ATS Score Results"));
        output.push_str(&format!(
            "Resume: {}\n",
            report.metadata.resume_file
        ));
        output.push_str(&format!(
            "Overall ATS Score: {}% {}\n",
            report.result.overall_score,
            self.format_verdict(report.verdict())
        ));

        output.push_str("\nScore Breakdown:\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&self.format_breakdown(&report.result.breakdown));

        output.push_str(&self.format_header("💡 Recommendations"));
        for (i, recommendation) in report.result.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, recommendation));
        }

        if let Some(analysis) = &report.analysis {
            output.push_str(&self.format_header("📋 Resume Checks"));
            output.push_str(&self.format_analysis(analysis));
        }

        if self.detailed {
            output.push_str(&self.format_header("🔎 Detected Details"));
            let contact = &report.contact_info;
            output.push_str(&format!(
                "Email: {}\n",
                contact.email.as_deref().unwrap_or("Not found")
            ));
            output.push_str(&format!(
                "Phone: {}\n",
                contact.phone.as_deref().unwrap_or("Not found")
            ));
            if let Some(linkedin) = &contact.linkedin {
                output.push_str(&format!("LinkedIn: {}\n", linkedin));
            }
            if let Some(github) = &contact.github {
                output.push_str(&format!("GitHub: {}\n", github));
            }
            output.push_str(&format!("Skills found: {}\n", report.skills_found.join(", ")));
            output.push_str(&format!("Education entries: {}\n", report.education_found.len()));
            for line in &report.education_found {
                output.push_str(&format!("  • {}\n", line));
            }

            if let Some(cleaning) = &report.cleaning {
                output.push_str(&format!(
                    "\nCleaning: {} → {} characters ({}% removed), {} tables, {} images, {} unusual characters\n",
                    cleaning.original_length,
                    cleaning.final_length,
                    cleaning.reduction_percentage,
                    cleaning.tables_removed,
                    cleaning.images_detected,
                    cleaning.unusual_chars_removed
                ));
            }

            if let Some(density) = &report.word_density {
                output.push_str(&format!(
                    "\nWords: {} total, {} unique\n",
                    density.total_words, density.unique_words
                ));
                for keyword in density.top_keywords.iter().take(10) {
                    output.push_str(&format!(
                        "  {:<20} {:>4} ({}%)\n",
                        keyword.keyword, keyword.count, keyword.density
                    ));
                }
            }
        }

        let status = if report.passed() {
            self.colorize("✅ Pass", Color::Green)
        } else {
            self.colorize("❌ Review", Color::Red)
        };
        output.push_str(&format!(
            "\nStatus: {} (threshold {}%)\n",
            status, report.metadata.pass_threshold
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Excellent => "🟢 Excellent",
            Verdict::Good => "🟡 Good",
            Verdict::NeedsImprovement => "🔴 Needs Improvement",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 ATS Score Report\n\n");

        if self.include_metadata {
            let resume_name = Path::new(&report.metadata.resume_file)
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| report.metadata.resume_file.clone());
            output.push_str(&format!(
                "**Generated:** {} | **Version:** {}\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.scorer_version
            ));
            output.push_str(&format!("**Resume:** `{}`", resume_name));
            if let Some(job) = &report.metadata.job_source {
                output.push_str(&format!(" | **Job:** `{}`", job));
            }
            output.push_str("\n\n");
        }

        output.push_str(&format!(
            "**Overall ATS Score:** {}% {}\n\n",
            report.result.overall_score,
            Self::markdown_score_badge(report.verdict())
        ));

        output.push_str("## Score Breakdown\n\n");
        output.push_str("| Category | Score | Weight |\n");
        output.push_str("|----------|-------|--------|\n");
        for (category, score, weight) in report.result.breakdown.entries() {
            output.push_str(&format!("| {} | {}% | {}% |\n", category, score, weight));
        }
        output.push('\n');

        let breakdown = &report.result.breakdown;
        if let Some(keywords) = &breakdown.keyword_match {
            if !keywords.details.missing_keywords.is_empty() {
                output.push_str(&format!(
                    "**Missing keywords:** {}\n\n",
                    keywords.details.missing_keywords.join(", ")
                ));
            }
        }
        if let Some(skills) = &breakdown.skills_match {
            if !skills.details.missing_skills.is_empty() {
                output.push_str(&format!(
                    "**Missing skills:** {}\n\n",
                    skills.details.missing_skills.join(", ")
                ));
            }
        }

        output.push_str("## 💡 Recommendations\n\n");
        for (i, recommendation) in report.result.recommendations.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, recommendation));
        }
        output.push('\n');

        if !report.skills_found.is_empty() || !report.education_found.is_empty() {
            output.push_str("## Detected\n\n");
            if !report.skills_found.is_empty() {
                output.push_str(&format!("- **Skills:** {}\n", report.skills_found.join(", ")));
            }
            for line in &report.education_found {
                output.push_str(&format!("- **Education:** {}\n", line));
            }
            output.push('\n');
        }

        if let Some(analysis) = &report.analysis {
            let validation = &analysis.validation;
            output.push_str("## Resume Checks\n\n");
            output.push_str(&format!(
                "- **Validation:** {} ({} words)\n",
                if validation.validation_passed { "passed" } else { "issues found" },
                validation.word_count
            ));
            for issue in &validation.issues {
                output.push_str(&format!("  - {}\n", issue));
            }
            output.push_str(&format!("- **Readability:** {}/100\n", analysis.readability_score));
            output.push_str(&format!("- **Action verbs:** {}\n", analysis.action_verbs_count));
            if !analysis.technical_skills.is_empty() {
                output.push_str(&format!("- **Technical skills:** {}\n", analysis.technical_skills.join(", ")));
            }
            if !analysis.soft_skills.is_empty() {
                output.push_str(&format!("- **Soft skills:** {}\n", analysis.soft_skills.join(", ")));
            }
            for achievement in &analysis.quantifiable_achievements {
                output.push_str(&format!("- **Achievement:** {}\n", achievement));
            }
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self::empty()
            .register(Box::new(ConsoleFormatter::new(use_colors, detailed)))
            .register(Box::new(JsonFormatter::new(pretty_json)))
            .register(Box::new(MarkdownFormatter::new(include_metadata)))
    }

    pub fn empty() -> Self {
        Self { formatters: Vec::new() }
    }

    /// Later registrations for a format take precedence.
    pub fn register(mut self, formatter: Box<dyn OutputFormatter>) -> Self {
        self.formatters.insert(0, formatter);
        self
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        self.formatters
            .iter()
            .find(|formatter| formatter.supports_format() == format)
            .ok_or_else(|| AtsError::InvalidInput(format!("No formatter registered for {:?} output", format)))?
            .format_report(report)
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_ats{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_ats{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_ats{}.md", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::analysis::ResumeAnalyzer;
    use crate::processing::detector::ResumeDetector;
    use crate::scoring::{AtsScorer, ScoreRequest, ScoringWeights};

    const RESUME: &str = "Jane Roe jane@example.com\nExperience\nSkills: Python, Docker\nEducation: Bachelor of Science";

    fn report() -> AnalysisReport {
        let detected = ResumeDetector::new().unwrap().detect(RESUME);
        let request = ScoreRequest::new(RESUME)
            .with_job_description("Python and Kubernetes engineer")
            .with_resume_skills(detected.skills.clone())
            .with_required_skills(vec!["Python".to_string(), "AWS".to_string()]);
        let result = AtsScorer::new().score(&request);
        AnalysisReport::new("resumes/jane.txt", result, detected, ScoringWeights::standard(), 60.0)
            .with_job_source("inline text")
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false, true).format_report(&report()).unwrap();

        assert!(output.contains("Overall ATS Score:"));
        assert!(output.contains("Keyword Match:"));
        assert!(output.contains("✗ Missing: AWS"));
        assert!(output.contains("Email: jane@example.com"));
        assert!(output.contains("Skills found: Python, Docker"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_json_output_parses_back() {
        let report = report();
        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.metadata.resume_file, report.metadata.resume_file);
        assert_eq!(parsed.result.recommendations, report.result.recommendations);
        assert_eq!(parsed.skills_found, report.skills_found);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let breakdown = &value["result"]["breakdown"];
        assert!(breakdown.get("keyword_match").is_some());
        assert!(breakdown.get("education_match").is_none());
        assert!(value["metadata"]["weights"].get("education_match").is_some());
    }

    #[test]
    fn test_resume_checks_section() {
        let analysis = ResumeAnalyzer::new().unwrap().analyze(RESUME);
        let report = report().with_analysis(analysis);

        let console = ConsoleFormatter::new(false, true).format_report(&report).unwrap();
        assert!(console.contains("📋 Resume Checks"));
        assert!(console.contains("✗ Validation: Issues found"));
        assert!(console.contains("(recommended: at least 300)"));
        assert!(console.contains("Technical skills: Python, Docker"));

        let markdown = MarkdownFormatter::new(false).format_report(&report).unwrap();
        assert!(markdown.contains("## Resume Checks"));
        assert!(markdown.contains("- **Validation:** issues found (11 words)"));

        let json = JsonFormatter::new(false).format_report(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["analysis"]["validation"]["validation_passed"], false);
    }

    #[test]
    fn test_markdown_table() {
        let output = MarkdownFormatter::new(true).format_report(&report()).unwrap();

        assert!(output.contains("**Resume:** `jane.txt` | **Job:** `inline text`"));
        assert!(output.contains("| Format | 75% | 20% |"));
        assert!(output.contains("| Skills Match | 50% | 25% |"));
        assert!(output.contains("## 💡 Recommendations"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, true, false);
        let report = report();

        let json = generator.generate_report(&report, OutputFormat::Json).unwrap();
        assert!(json.starts_with('{'));
        let markdown = generator.generate_report(&report, OutputFormat::Markdown).unwrap();
        assert!(!markdown.contains("**Generated:**"));
    }

    #[test]
    fn test_generator_prefers_latest_registration() {
        let generator = ReportGenerator::empty()
            .register(Box::new(JsonFormatter::new(true)))
            .register(Box::new(JsonFormatter::new(false)));

        let json = generator.generate_report(&report(), OutputFormat::Json).unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_generator_without_formatter_errors() {
        let generator = ReportGenerator::empty().register(Box::new(JsonFormatter::new(true)));

        let result = generator.generate_report(&report(), OutputFormat::Markdown);
        assert!(matches!(result, Err(AtsError::InvalidInput(_))));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(OutputFormat::Json, "cv/jane_roe.pdf", false),
            "jane_roe_ats.json"
        );
        assert!(suggest_filename(OutputFormat::Markdown, "jane.docx", true).ends_with(".md"));
    }
}
