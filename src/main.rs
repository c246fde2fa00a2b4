//! resume-ats: score how well a resume will survive an applicant tracking system

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_ats::cli::{self, Cli, Commands, ConfigAction};
use resume_ats::config::{Config, OutputFormat};
use resume_ats::error::{Result, ResumeAtsError};
use resume_ats::input::InputManager;
use resume_ats::output::ReportGenerator;
use resume_ats::processing::AtsScorer;
use resume_ats::session::AnalysisSession;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(
    command: Commands,
    config: Config,
    config_path: Option<PathBuf>,
) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            output,
            detailed,
            no_preview,
            compact,
        } => {
            let format = match output {
                Some(output) => {
                    cli::parse_output_format(&output).map_err(ResumeAtsError::InvalidInput)?
                }
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;
            let preview_chars = if no_preview || !config.output.show_preview {
                None
            } else {
                Some(config.output.preview_chars)
            };
            let console = format == OutputFormat::Console;

            info!("Starting ATS analysis of {}", resume.display());

            let input = InputManager::new().with_max_file_size(config.max_file_size_bytes());
            let scorer = AtsScorer::new()?;
            let mut session = AnalysisSession::new();

            let spinner = console.then(|| {
                let spinner = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                    spinner.set_style(style);
                }
                spinner.set_message(format!("Analyzing {}...", resume.display()));
                spinner.enable_steady_tick(Duration::from_millis(100));
                spinner
            });

            let outcome = session.analyze(&resume, &input, &scorer, preview_chars).await;

            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }

            let report = outcome?;
            let use_colors = config.output.color_output && console;
            let generator = ReportGenerator::with_options(use_colors, detailed, !compact);
            println!("{}", generator.generate_report(report, &format)?);
        }

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);

            match action {
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        ResumeAtsError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("⚙️  Current Configuration ({})\n", path.display());
                    println!("{}", content);
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
        }
    }

    Ok(())
}
