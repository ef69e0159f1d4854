//! CLI interface for the ATS checker

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::Path;
use std::path::PathBuf;

/// Resume extensions accepted on the command line.
pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "txt", "md", "markdown"];

#[derive(Parser)]
#[command(name = "ats-checker")]
#[command(about = "Heuristic ATS compatibility checker for resumes")]
#[command(long_about = "Score a resume for applicant-tracking-system compatibility, optionally against a job description or target role, and request AI rewrites of its bullet points")]
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
    Analyze {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Target role, e.g. software-engineer (see `roles`)
        #[arg(long)]
        role: Option<String>,

        /// Show passing checks as well as issues
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Ask the rewrite service for improved bullet points
    Rewrite {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file to tailor the rewrite to
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Save the improved resume to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// List target roles and their keyword counts
    Roles,

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

    /// Print the configuration file path
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::parse_from([
            "ats-checker", "analyze", "--resume", "cv.pdf", "--role", "designer", "-o", "json",
        ]);
        match cli.command {
            Commands::Analyze { resume, role, output, job, .. } => {
                assert_eq!(resume, PathBuf::from("cv.pdf"));
                assert_eq!(role.as_deref(), Some("designer"));
                assert_eq!(output.as_deref(), Some("json"));
                assert!(job.is_none());
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("MD"), Ok(OutputFormat::Markdown));
        assert_eq!(parse_output_format("html"), Ok(OutputFormat::Html));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("cv.DOCX"), RESUME_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("cv.rtf"), RESUME_EXTENSIONS).is_err());
        assert!(validate_file_extension(Path::new("cv"), RESUME_EXTENSIONS).is_err());
    }
}
