//! CLI interface for the ATS scorer

use crate::config::OutputFormat;
use crate::scoring::WeightProfile;
use clap::{Parser, Subcommand};
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ats-scorer")]
#[command(about = "Score resumes the way an applicant tracking system would")]
#[command(long_about = "Score a resume for ATS compatibility: formatting, keyword overlap with a job description, required skills and education, with prioritized recommendations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume
    Score {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        resume: PathBuf,

        /// Job description: a file path, or the description text itself
        #[arg(short, long)]
        job: Option<String>,

        /// Required skills, comma separated
        #[arg(short, long, value_delimiter = ',')]
        skills: Vec<String>,

        /// Required education, comma separated
        #[arg(short, long, value_delimiter = ',')]
        education: Vec<String>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file; without a path, a timestamped name based on
        /// the resume is used
        #[arg(long, num_args = 0..=1, value_name = "PATH")]
        save: Option<Option<PathBuf>>,

        /// Output detailed analysis
        #[arg(short, long)]
        detailed: bool,

        /// Strip tables, image references and unusual characters before scoring
        #[arg(long)]
        clean: bool,

        /// Weight profile: standard, keyword-heavy
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

pub fn parse_weight_profile(profile: &str) -> Result<WeightProfile, String> {
    match profile.to_lowercase().replace('_', "-").as_str() {
        "standard" => Ok(WeightProfile::Standard),
        "keyword-heavy" => Ok(WeightProfile::KeywordHeavy),
        _ => Err(format!(
            "Invalid weight profile: {}. Supported: standard, keyword-heavy",
            profile
        )),
    }
}

/// Trim list entries and drop empty ones.
pub fn parse_list(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
