//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `fire_alert_config` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use fire_alert_config::app::{
    evaluate_exit_code, log_report, render_summary, verdict_line, write_template,
    EXIT_LOAD_FAILURE, EXIT_OK,
};
use fire_alert_config::config::constants::DEFAULT_SECRETS_PATH;
use fire_alert_config::initialization::init_logger_with;
use fire_alert_config::{
    load, validate_config, FailOn, LoadOptions, LogFormat, LogLevel, OutputFormat, StaticConfig,
    BUILD_CONFIG, BUILD_CONFIG_SOURCE,
};

#[derive(Debug, Parser)]
#[command(name = "fire_alert_config", version, about)]
struct Cli {
    /// Log level (overrides RUST_LOG; default: info)
    #[arg(long, value_enum, global = true)]
    log_level: Option<LogLevel>,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load and validate the deployment configuration
    Check {
        #[command(flatten)]
        source: SourceArgs,

        /// When to exit non-zero
        #[arg(long, value_enum, default_value_t = FailOn::Errors)]
        fail_on: FailOn,
    },
    /// Print the loaded configuration with the password masked
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Write a template artifact with placeholder values
    Init {
        /// Where to write the template
        #[arg(long, default_value = DEFAULT_SECRETS_PATH)]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Validate the configuration baked in at build time
    Compiled {
        /// When to exit non-zero
        #[arg(long, value_enum, default_value_t = FailOn::Errors)]
        fail_on: FailOn,
    },
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// Configuration artifact (default: secrets.toml, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ignore WIFI_SSID / WIFI_PASSWORD / FIRE_ALERT_URL overrides
    #[arg(long)]
    no_env: bool,
}

impl SourceArgs {
    fn load_options(&self) -> LoadOptions {
        LoadOptions {
            path: self.config.clone(),
            use_env: !self.no_env,
        }
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // This allows keeping WIFI_PASSWORD in .env without exporting it manually
    let dotenv_result = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().map(Into::into), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = &dotenv_result {
        if !e.not_found() {
            warn!("Ignoring malformed .env file: {}", e);
        }
    }

    match run(cli.command) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("fire_alert_config error: {:#}", e);
            process::exit(EXIT_LOAD_FAILURE);
        }
    }
}

fn run(command: Command) -> Result<i32> {
    match command {
        Command::Check { source, fail_on } => {
            let loaded = load(&source.load_options()).context("Failed to load configuration")?;
            let report = validate_config(&loaded.config);
            log_report(&report);
            println!("{}", verdict_line(&report));
            Ok(evaluate_exit_code(fail_on, &report))
        }
        Command::Show { source, format } => {
            let loaded = load(&source.load_options()).context("Failed to load configuration")?;
            print!("{}", render_summary(&loaded, format));
            if format == OutputFormat::Json {
                println!();
            }
            Ok(EXIT_OK)
        }
        Command::Init { output, force } => {
            write_template(&output, force).context("Failed to write template")?;
            println!(
                "Template written to {}; replace every placeholder before deploying",
                output.display()
            );
            Ok(EXIT_OK)
        }
        Command::Compiled { fail_on } => {
            info!("Configuration was compiled from {}", BUILD_CONFIG_SOURCE);
            if StaticConfig::is_from_template() {
                warn!("No secrets.toml was present at build time; the template was compiled in");
            }
            let report = validate_config(&BUILD_CONFIG.to_config());
            log_report(&report);
            println!("{} (source: {})", verdict_line(&report), BUILD_CONFIG_SOURCE);
            Ok(evaluate_exit_code(fail_on, &report))
        }
    }
}
