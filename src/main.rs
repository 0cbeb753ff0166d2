//! ATS scorer: score resumes for applicant tracking system compatibility

use ats_scorer::cli::{self, Cli, Commands, ConfigAction};
use ats_scorer::config::Config;
use ats_scorer::error::{AtsError, Result};
use ats_scorer::input::InputManager;
use ats_scorer::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use ats_scorer::output::AnalysisReport;
use ats_scorer::processing::analysis::ResumeAnalyzer;
use ats_scorer::processing::detector::ResumeDetector;
use ats_scorer::processing::text_processor::TextProcessor;
use ats_scorer::scoring::{AtsScorer, ScoreRequest};
use clap::Parser;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::process;

const SUPPORTED_RESUME_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md", "markdown"];
const DENSITY_TOP_KEYWORDS: usize = 20;

const EXIT_PASS: i32 = 0;
const EXIT_BELOW_THRESHOLD: i32 = 1;
const EXIT_ERROR: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(EXIT_ERROR);
        }
    };

    match run_command(cli.command, config, cli.config).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("Command failed: {}", e);
            process::exit(EXIT_ERROR);
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<i32> {
    match command {
        Commands::Score {
            resume,
            job,
            skills,
            education,
            output,
            save,
            detailed,
            clean,
            profile,
        } => {
            cli::validate_file_extension(&resume, SUPPORTED_RESUME_EXTENSIONS)
                .map_err(|e| AtsError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format = match output {
                Some(output) => cli::parse_output_format(&output).map_err(AtsError::InvalidInput)?,
                None => config.output.format,
            };
            let weights = match profile {
                Some(profile) => cli::parse_weight_profile(&profile)
                    .map_err(AtsError::InvalidInput)?
                    .weights(),
                None => config.scoring.weights,
            };
            let detailed = detailed || config.output.detailed;

            let mut input_manager = InputManager::new().with_cache(config.detection.enable_cache);
            let resume_text = input_manager.extract_text(&resume).await?;
            info!("Extracted {} characters from {}", resume_text.len(), resume.display());

            let job = match job {
                Some(job) => Some(resolve_job_description(&mut input_manager, job).await?),
                None => None,
            };

            let detector = ResumeDetector::with_skills(&config.detection.skill_keywords)?;
            let detected = detector.detect(&resume_text);

            let processor = TextProcessor::new();
            let (scored_text, cleaning) = if clean {
                let (cleaned, report) = processor.clean_resume_text(&resume_text);
                debug!("Cleaning removed {}% of the resume text", report.reduction_percentage);
                (cleaned, Some(report))
            } else {
                (resume_text, None)
            };

            let mut request = ScoreRequest::new(scored_text.as_str());
            if let Some((_, job_text)) = &job {
                request = request.with_job_description(job_text.as_str());
            }
            if !detected.skills.is_empty() {
                request = request.with_resume_skills(detected.skills.clone());
            }
            let required_skills = cli::parse_list(&skills);
            if !required_skills.is_empty() {
                request = request.with_required_skills(required_skills);
            }
            if !detected.education.is_empty() {
                request = request.with_resume_education(detected.education.clone());
            }
            let required_education = cli::parse_list(&education);
            if !required_education.is_empty() {
                request = request.with_required_education(required_education);
            }

            let scorer = AtsScorer::with_weights(weights)?;
            let result = scorer.score(&request);
            let analysis = ResumeAnalyzer::new()?.analyze(&scored_text);
            if !analysis.validation.validation_passed {
                info!("Resume validation found {} issue(s)", analysis.validation.issues.len());
            }

            let mut report = AnalysisReport::new(
                resume.display().to_string(),
                result,
                detected,
                weights,
                config.scoring.pass_threshold,
            )
            .with_analysis(analysis);
            if let Some((source, _)) = job {
                report = report.with_job_source(source);
            }
            if let Some(cleaning) = cleaning {
                report = report.with_cleaning(cleaning);
            }
            if detailed || clean {
                report = report.with_word_density(processor.word_density(&scored_text, DENSITY_TOP_KEYWORDS));
            }

            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::with_options(use_colors, detailed, true, true);
            let content = generator.generate_report(&report, output_format)?;

            let save = save.map(|path| {
                path.unwrap_or_else(|| {
                    PathBuf::from(suggest_filename(output_format, &resume.to_string_lossy(), true))
                })
            });
            match save {
                Some(path) => {
                    save_report_to_file(&content, &path)?;
                    println!("💾 Report saved to {}", path.display());
                }
                None => println!("{}", content),
            }

            Ok(if report.passed() {
                EXIT_PASS
            } else {
                EXIT_BELOW_THRESHOLD
            })
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    let weights = &config.scoring.weights;
                    println!("⚙️  Current Configuration\n");
                    println!("File: {}", path.display());
                    println!("Pass Threshold: {}%", config.scoring.pass_threshold);
                    println!("\nScoring Weights:");
                    println!("  Format: {}", weights.format);
                    println!("  Keyword Match: {}", weights.keyword_match);
                    println!("  Skills Match: {}", weights.skills_match);
                    println!("  Education Match: {}", weights.education_match);
                    println!("\nSkill Keywords: {}", config.detection.skill_keywords.join(", "));
                    println!("Extraction Cache: {}", config.detection.enable_cache);
                    println!("\nOutput Format: {:?}", config.output.format);
                    println!("Detailed: {}", config.output.detailed);
                    println!("Colors: {}", config.output.color_output);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(&path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    println!("{}", path.display());
                }
            }

            Ok(EXIT_PASS)
        }
    }
}

/// A job argument naming an existing file is read through the extractor;
/// anything else is the description itself. Returns `(source, text)`.
async fn resolve_job_description(input_manager: &mut InputManager, job: String) -> Result<(String, String)> {
    let path = Path::new(&job);
    if path.is_file() {
        let text = input_manager.extract_text(path).await?;
        info!("Read job description from {}", path.display());
        Ok((path.display().to_string(), text))
    } else {
        Ok(("inline text".to_string(), job))
    }
}
