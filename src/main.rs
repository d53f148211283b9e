//! Command line entry point for the sector classifier.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::error;

use sector_classifier::application::{ClassifyProjectCommand, ClassifyProjectHandler};
use sector_classifier::config::{AppConfig, ConfigError, LogFormat, LoggingConfig, OutputFormat};
use sector_classifier::domain::classification::{catalog, SectorInfo};
use sector_classifier::domain::foundation::ValidationError;

#[derive(Debug, Parser)]
#[command(name = "sector-classifier", version, about = "Classify projects into sectors")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a project from its title and description
    Classify {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List every sector with its description and icon
    Sectors {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid project: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Validation(_) => 2,
            CliError::Config(_) | CliError::Render(_) => 1,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Command failed");
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;
    init_tracing(&config.logging)?;

    match cli.command {
        Command::Classify {
            title,
            description,
            json,
        } => {
            let handler = ClassifyProjectHandler::default();
            let outcome = handler.handle(ClassifyProjectCommand { title, description })?;
            match output_format(json, config.output.format) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
                OutputFormat::Text => {
                    println!("{}", render_line(&outcome));
                    println!("{}", outcome.description);
                }
            }
        }
        Command::Sectors { json } => {
            let sectors = catalog();
            match output_format(json, config.output.format) {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sectors)?),
                OutputFormat::Text => {
                    for info in &sectors {
                        println!("{} - {}", render_line(info), info.description);
                    }
                }
            }
        }
    }

    Ok(())
}

fn output_format(json_flag: bool, configured: OutputFormat) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        configured
    }
}

fn render_line(info: &SectorInfo) -> String {
    format!("{} {} ({})", info.icon, info.label, info.sector)
}

fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    Ok(())
}
