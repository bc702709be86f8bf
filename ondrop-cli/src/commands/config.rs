//! Config command - manage configuration.

use anyhow::Result;
use clap::{Args, Subcommand};
use ondrop_retailers::RetailerRegistry;
use tracing::info;

use crate::config::Config;
use crate::output::JsonFormatter;
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration.
    Show,

    /// Show the configuration file path.
    Path,

    /// Write a configuration file with default values.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl ConfigAction {
    /// Returns true if the action needs the loaded config.
    pub fn reads_config(&self) -> bool {
        matches!(self, Self::Show)
    }
}

/// Runs the config command.
pub fn run(args: &ConfigArgs, cli: &Cli, config: &Config) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(cli, config),
        ConfigAction::Path => show_path(cli),
        ConfigAction::Init { force } => init_config(cli, *force),
    }
}

fn show_config(cli: &Cli, config: &Config) -> Result<()> {
    match cli.format {
        OutputFormat::Text => {
            println!("OnDrop Configuration");
            println!("{}", "─".repeat(40));
            println!();
            println!("Default store: {}", config.general.default_store);
            println!("Timeout:       {}s", config.general.timeout_secs);
            println!("Log level:     {}", config.general.log_level);
            if let Some(domains) = &config.general.allowed_domains {
                println!("Allowed:       {}", domains.join(", "));
            }
            println!();
            println!("Stores:");
            for desc in RetailerRegistry::all() {
                let state = if config.is_store_enabled(desc) {
                    "enabled"
                } else {
                    "disabled"
                };
                let base_url = config
                    .store(desc)
                    .and_then(|s| s.base_url.as_deref())
                    .unwrap_or(desc.default_base_url);
                println!("  • {} ({state}) {base_url}", desc.display_name());
            }
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(config)?);
        }
    }

    Ok(())
}

fn show_path(cli: &Cli) -> Result<()> {
    let path = cli.config_path();

    match cli.format {
        OutputFormat::Text => {
            println!("Config file: {}", path.display());
        }
        OutputFormat::Json => {
            let paths = serde_json::json!({
                "config_file": path.display().to_string(),
                "exists": path.exists(),
            });
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&paths)?);
        }
    }

    Ok(())
}

fn init_config(cli: &Cli, force: bool) -> Result<()> {
    let path = cli.config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;

    info!(path = %path.display(), "Config initialized");
    println!("Wrote default configuration to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_init_force_replaces_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::load_from(&path).is_err());

        let cli = Cli::try_parse_from([
            "ondrop",
            "--quiet",
            "--config",
            path.to_str().unwrap(),
            "config",
            "init",
            "--force",
        ])
        .unwrap();
        let Some(crate::Commands::Config(args)) = &cli.command else {
            panic!("expected config command");
        };

        let config = cli.load_config().unwrap();
        run(args, &cli, &config).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let cli = Cli::try_parse_from([
            "ondrop",
            "--config",
            path.to_str().unwrap(),
            "config",
            "init",
        ])
        .unwrap();

        assert!(init_config(&cli, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }
}
