// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! `OnDrop` CLI - retailer stock availability from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Check one variant at The North Face
//! ondrop 0A8F5C CQO M
//!
//! # Same, explicit subcommand and store
//! ondrop check 0A8F5C CQO M --store tnf
//!
//! # JSON output
//! ondrop --format json --pretty 0A8F5C CQO M
//!
//! # List stores
//! ondrop stores
//!
//! # Write a default config file
//! ondrop config init
//! ```

mod commands;
mod config;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use ondrop_core::CoreError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use commands::{check, config as config_cmd, stores};
use config::Config;

// ============================================================================
// CLI Definition
// ============================================================================

/// `OnDrop` CLI - retailer stock availability.
#[derive(Parser)]
#[command(name = "ondrop")]
#[command(about = "Check whether a product variant is in stock")]
#[command(long_about = r"
OnDrop checks whether a specific product variant (SKU, color, size) is
in stock at a supported retailer.

Supported stores:
  • The North Face (tnf)

Examples:
  ondrop 0A8F5C CQO M                 # Check a variant
  ondrop check 0A8F5C CQO M -s tnf    # Explicit store
  ondrop --format json 0A8F5C CQO M   # JSON output
  ondrop stores                       # List stores
")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'check' with the arguments below.
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub check: check::CheckArgs,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (no logging, no progress line).
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Path to the config file.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Returns the config file path in effect.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Returns true if the command needs the config file contents.
    ///
    /// `config path` and `config init` must work while the file is malformed.
    pub fn reads_config(&self) -> bool {
        match &self.command {
            Some(Commands::Config(args)) => args.action.reads_config(),
            _ => true,
        }
    }

    /// Loads the config file, or defaults for commands that never read it.
    pub fn load_config(&self) -> Result<Config> {
        if self.reads_config() {
            Config::load_from(&self.config_path())
        } else {
            Ok(Config::default())
        }
    }
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Check stock for a product variant (default if no command specified).
    #[command(visible_alias = "c")]
    Check(check::CheckArgs),

    /// List available stores.
    #[command(visible_alias = "s")]
    Stores,

    /// Manage configuration.
    Config(config_cmd::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Lookup completed, in stock or not.
    Success = 0,
    /// Setup error (config, HTTP client, output).
    Error = 1,
    /// Store unknown or disabled.
    StoreUnavailable = 2,
}

impl ExitCode {
    /// Maps a command error to its exit code.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<CoreError>() {
            Some(CoreError::UnknownStore(_) | CoreError::StoreDisabled(_)) => {
                Self::StoreUnavailable
            }
            _ => Self::Error,
        }
    }
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool, level: &str) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("ondrop=debug,info")
    } else {
        EnvFilter::try_new(format!("ondrop={level}"))
            .unwrap_or_else(|_| EnvFilter::new("ondrop=warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    setup_logging(cli.verbose, cli.quiet, &config.general.log_level);

    let result = match &cli.command {
        Some(Commands::Check(args)) => check::run(args, &cli, &config).await,
        Some(Commands::Stores) => stores::run(&cli, &config),
        Some(Commands::Config(args)) => config_cmd::run(args, &cli, &config),
        None => check::run(&cli.check, &cli, &config).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(ExitCode::for_error(&e) as i32);
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_positionals() {
        let cli =
            Cli::try_parse_from(["ondrop", "0A8F5C", "CQO", "M", "--store", "TNF"]).unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.check.sku.as_deref(), Some("0A8F5C"));
        assert_eq!(cli.check.color.as_deref(), Some("CQO"));
        assert_eq!(cli.check.size.as_deref(), Some("M"));
        assert_eq!(cli.check.store.as_deref(), Some("TNF"));
    }

    #[test]
    fn test_default_command_requires_all_positionals() {
        assert!(Cli::try_parse_from(["ondrop", "0A8F5C", "CQO"]).is_err());
    }

    #[test]
    fn test_check_subcommand() {
        let cli = Cli::try_parse_from([
            "ondrop", "--format", "json", "check", "0A8F5C", "CQO", "M", "-s", "tnf",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        let Some(Commands::Check(args)) = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(args.sku.as_deref(), Some("0A8F5C"));
        assert_eq!(args.store.as_deref(), Some("tnf"));
    }

    #[test]
    fn test_stores_subcommand() {
        let cli = Cli::try_parse_from(["ondrop", "stores", "--no-color"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Stores)));
        assert!(cli.no_color);
    }

    #[test]
    fn test_config_path_override() {
        let cli = Cli::try_parse_from(["ondrop", "--config", "/tmp/od.json", "stores"]).unwrap();
        assert_eq!(cli.config_path(), PathBuf::from("/tmp/od.json"));
    }

    #[test]
    fn test_reads_config() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).unwrap();

        assert!(parse(&["ondrop", "0A8F5C", "CQO", "M"]).reads_config());
        assert!(parse(&["ondrop", "stores"]).reads_config());
        assert!(parse(&["ondrop", "config", "show"]).reads_config());
        assert!(!parse(&["ondrop", "config", "path"]).reads_config());
        assert!(!parse(&["ondrop", "config", "init", "--force"]).reads_config());
    }

    #[test]
    fn test_load_config_skips_malformed_file_for_config_init() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let path = path.to_str().unwrap();

        let init = Cli::try_parse_from(["ondrop", "--config", path, "config", "init"]).unwrap();
        assert_eq!(init.load_config().unwrap(), Config::default());

        let show = Cli::try_parse_from(["ondrop", "--config", path, "config", "show"]).unwrap();
        assert!(show.load_config().is_err());
    }

    #[test]
    fn test_exit_codes() {
        let unknown = anyhow::Error::new(CoreError::UnknownStore("acme".to_string()));
        let disabled = anyhow::Error::new(CoreError::StoreDisabled("tnf".to_string()));
        let other = anyhow::anyhow!("Failed to create HTTP client");

        assert_eq!(ExitCode::for_error(&unknown), ExitCode::StoreUnavailable);
        assert_eq!(ExitCode::for_error(&disabled), ExitCode::StoreUnavailable);
        assert_eq!(ExitCode::for_error(&other), ExitCode::Error);
        assert_eq!(ExitCode::Success as i32, 0);
    }
}
