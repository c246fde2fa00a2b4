//! CLI interface for the resume ATS checker

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-ats")]
#[command(version)]
#[command(about = "Resume ATS compatibility checker")]
#[command(long_about = "Extract text from a PDF or DOCX resume and score how well it is \
                        likely to be parsed by an applicant tracking system")]
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
    /// Analyze a resume and print its ATS score
    Analyze {
        /// Path to resume file (PDF, DOCX)
        resume: PathBuf,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Show the full metric breakdown
        #[arg(short, long)]
        detailed: bool,

        /// Omit the extracted text preview
        #[arg(long)]
        no_preview: bool,

        /// Emit compact single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show configuration
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
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}
