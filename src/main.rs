//! ATS checker: heuristic resume scoring for applicant tracking systems

use ats_checker::cli::{self, Cli, Commands, ConfigAction, RESUME_EXTENSIONS};
use ats_checker::config::{Config, OutputFormat};
use ats_checker::error::{AtsCheckerError, Result};
use ats_checker::input::InputManager;
use ats_checker::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use ats_checker::output::report::AtsReport;
use ats_checker::processing::lexicon::{known_roles, role_keywords};
use ats_checker::processing::{AnalysisEngine, AnalysisRequest};
use ats_checker::rewrite::{HttpRewriter, ResumeRewriter, RewriteRequest};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            role,
            detailed,
            output,
            save,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(AtsCheckerError::InvalidInput)?,
                None => config.output.format,
            };
            run_analyze(
                &config,
                &resume,
                job.as_deref(),
                role,
                detailed || config.output.detailed,
                output_format,
                save,
            )
            .await?;
        }

        Commands::Rewrite { resume, job, save } => {
            run_rewrite(&config, &resume, job.as_deref(), save).await?;
        }

        Commands::Roles => {
            println!("Target roles:\n");
            for role in known_roles() {
                println!("  {:<20} {} keywords", role, role_keywords(role).len());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    AtsCheckerError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("# {}\n", config_path.display());
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(&config_path)?;
                println!("Configuration reset to defaults: {}", config_path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}

fn input_manager(config: &Config) -> InputManager {
    InputManager::new()
        .with_cache(config.input.enable_cache)
        .with_max_file_bytes(config.input.max_file_bytes)
}

async fn run_analyze(
    config: &Config,
    resume: &Path,
    job: Option<&Path>,
    role: Option<String>,
    detailed: bool,
    output_format: OutputFormat,
    save: Option<PathBuf>,
) -> Result<()> {
    cli::validate_file_extension(resume, RESUME_EXTENSIONS)
        .map_err(|e| AtsCheckerError::InvalidInput(format!("Resume file: {}", e)))?;

    let mut manager = input_manager(config);
    let extracted = manager.extract_resume(resume).await?;
    let job_text = match job {
        Some(path) => Some(manager.read_job_description(path).await?),
        None => None,
    };

    if let Some(role) = &role {
        if role_keywords(role).is_empty() {
            warn!("Unknown role '{}'; run `ats-checker roles` to list known roles", role);
        }
    }

    info!("Analyzing {}", resume.display());
    let request = AnalysisRequest {
        resume_text: &extracted.text,
        job_description: job_text.as_deref(),
        role: role.as_deref(),
        file: Some(&extracted.metadata),
    };
    let analysis = AnalysisEngine::new().analyze(&request);

    let report = AtsReport::new(
        analysis,
        resume.display().to_string(),
        job.map(|p| p.display().to_string()),
        role,
    );

    let use_colors = config.output.color_output && save.is_none();
    let generator = ReportGenerator::with_options(use_colors, detailed, true, true, true);
    let rendered = generator.generate_report(&report, &output_format)?;

    match save {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(suggest_filename(&output_format, &resume.to_string_lossy(), true))
            } else {
                path
            };
            save_report_to_file(&rendered, &path)?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

async fn run_rewrite(
    config: &Config,
    resume: &Path,
    job: Option<&Path>,
    save: Option<PathBuf>,
) -> Result<()> {
    cli::validate_file_extension(resume, RESUME_EXTENSIONS)
        .map_err(|e| AtsCheckerError::InvalidInput(format!("Resume file: {}", e)))?;

    let mut manager = input_manager(config);
    let extracted = manager.extract_resume(resume).await?;
    let job_description = match job {
        Some(path) => Some(manager.read_job_description(path).await?),
        None => None,
    };

    let rewriter = HttpRewriter::from_config(config)?;
    let request = RewriteRequest {
        resume_text: extracted.text,
        job_description,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Asking {} for suggestions...", config.rewrite.model));

    let result = rewriter.rewrite(&request).await;
    spinner.finish_and_clear();
    let response = result?;

    match save {
        Some(path) => {
            save_report_to_file(&response.improved_resume_text, &path)?;
            println!("Improved resume saved to {}", path.display());
        }
        None => println!("{}", response.improved_resume_text),
    }

    Ok(())
}
