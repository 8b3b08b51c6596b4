//! CLI Adapter.

mod form;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, DEFAULT_DEPLOYMENT_FILE, DEFAULT_SCRIPT_FILE_NAME, GenerateOptions};
use crate::domain::{AppError, GenerationOutcome, RawDeploymentConfig};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "S2D_LOG";

#[derive(Parser)]
#[command(name = "s2d")]
#[command(version)]
#[command(
    about = "Generate Storage Spaces Direct deployment scripts from validated parameters",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample deployment file with the default form values
    #[clap(visible_alias = "i")]
    Init {
        /// Destination file
        #[arg(default_value = DEFAULT_DEPLOYMENT_FILE)]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Fill in deployment parameters interactively
    #[clap(visible_alias = "f")]
    Form {
        /// Destination file
        #[arg(short, long, default_value = DEFAULT_DEPLOYMENT_FILE)]
        output: PathBuf,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Validate a deployment file and print the normalized values
    #[clap(visible_alias = "v")]
    Validate {
        /// Deployment file (.toml, .yml, .yaml, .json)
        file: PathBuf,
        /// Print the result as JSON ({"valid": .., "config"|"errors": ..})
        #[arg(long)]
        json: bool,
    },
    /// Print the generation prompt without calling the model
    #[clap(visible_alias = "p")]
    Prompt {
        /// Deployment file (.toml, .yml, .yaml, .json)
        file: PathBuf,
    },
    /// Generate the PowerShell deployment script
    #[clap(visible_alias = "g")]
    Generate {
        /// Deployment file (.toml, .yml, .yaml, .json)
        file: PathBuf,
        /// Script destination
        #[arg(short, long, default_value = DEFAULT_SCRIPT_FILE_NAME, conflicts_with = "stdout")]
        output: PathBuf,
        /// Print the script instead of writing a file
        #[arg(long)]
        stdout: bool,
        /// Overwrite an existing script file
        #[arg(short, long)]
        force: bool,
        /// Print the result as JSON ({"success": .., "script"|"error": ..})
        #[arg(long)]
        json: bool,
        /// Use the offline mock generator
        #[arg(long)]
        mock: bool,
        /// Settings file (default: .s2d/config.toml)
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Model name overriding the settings file
        #[arg(long)]
        model: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Init { path, force } => run_init(&path, force).map(|_| 0),
        Commands::Form { output, force } => form::run(&output, force).map(|_| 0),
        Commands::Validate { file, json } => run_validate(&file, json),
        Commands::Prompt { file } => run_prompt(&file).map(|_| 0),
        Commands::Generate { file, output, stdout, force, json, mock, settings, model } => {
            let options = GenerateOptions { settings, model, mock };
            run_generate(&file, &output, stdout, force, json, &options)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. in tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_init(path: &Path, force: bool) -> Result<(), AppError> {
    api::init(path, force)?;
    println!("✅ Wrote sample deployment file to {}", path.display());
    Ok(())
}

fn run_validate(file: &Path, json: bool) -> Result<i32, AppError> {
    if json {
        let report = api::validation_report(file)?;
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::config_error(format!("Failed to serialize result: {}", e)))?;
        println!("{}", rendered);
        return Ok(if report.valid { 0 } else { 1 });
    }

    let config = api::validate_file(file)?;
    let normalized = toml::to_string(&RawDeploymentConfig::from(&config)).map_err(|e| {
        AppError::config_error(format!("Failed to serialize configuration: {}", e))
    })?;

    println!("✅ {} is valid", file.display());
    print!("{}", normalized);
    Ok(0)
}

fn run_prompt(file: &Path) -> Result<(), AppError> {
    let prompt = api::render_prompt_file(file)?;
    println!("{}", prompt);
    Ok(())
}

fn run_generate(
    file: &Path,
    output: &Path,
    stdout: bool,
    force: bool,
    json: bool,
    options: &GenerateOptions,
) -> Result<i32, AppError> {
    let result = api::generate_file(file, options).and_then(|script| {
        if !stdout {
            api::save_script(output, &script, force)?;
        }
        Ok(script)
    });

    if json {
        let outcome = GenerationOutcome::from(result);
        let rendered = serde_json::to_string_pretty(&outcome)
            .map_err(|e| AppError::config_error(format!("Failed to serialize result: {}", e)))?;
        println!("{}", rendered);
        return Ok(if outcome.success { 0 } else { 1 });
    }

    let script = result?;
    if stdout {
        println!("{}", script);
    } else {
        println!("✅ Wrote deployment script to {}", output.display());
    }
    Ok(0)
}
