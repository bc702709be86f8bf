//! Check command - look up stock for one product variant.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use ondrop_core::CoreError;
use ondrop_fetch::FetchContext;
use ondrop_retailers::{RetailerDescriptor, RetailerRegistry};
use tracing::{debug, info};

use crate::config::Config;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the check command.
#[derive(Args, Debug, Default, Clone)]
pub struct CheckArgs {
    /// Product SKU (e.g. 0A8F5C).
    #[arg(required = true)]
    pub sku: Option<String>,

    /// Color code (e.g. CQO).
    #[arg(required = true)]
    pub color: Option<String>,

    /// Size (e.g. M).
    #[arg(required = true)]
    pub size: Option<String>,

    /// Store to query. Defaults to the configured store.
    #[arg(long, short)]
    pub store: Option<String>,
}

impl CheckArgs {
    /// Returns `(sku, color, size)`.
    fn lookup(&self) -> Result<(&str, &str, &str)> {
        match (&self.sku, &self.color, &self.size) {
            (Some(sku), Some(color), Some(size)) => {
                Ok((sku.as_str(), color.as_str(), size.as_str()))
            }
            _ => anyhow::bail!("SKU, COLOR and SIZE are required"),
        }
    }
}

/// Runs the check command.
pub async fn run(args: &CheckArgs, cli: &Cli, config: &Config) -> Result<()> {
    let (sku, color, size) = args.lookup()?;
    let desc = resolve_store(args.store.as_deref(), config)?;

    info!(store = desc.cli_name(), sku, color, size, "Checking stock");

    let ctx = FetchContext::with_settings(config.fetch_settings())
        .context("Failed to create HTTP client")?;
    let client = desc.build_client(&ctx, &config.retailer_options(desc));

    if cli.format == OutputFormat::Text && !cli.quiet {
        eprintln!("Checking product availability...");
    }

    let product = client.check_stock(sku, color, size).await;
    debug!(in_stock = product.in_stock, "Lookup finished");

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_product(&product, desc.display_name()));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_check(&product, desc, Utc::now())?);
        }
    }

    Ok(())
}

/// Resolves the store: flag, then config, then the built-in default.
fn resolve_store(flag: Option<&str>, config: &Config) -> Result<&'static RetailerDescriptor> {
    let name = flag.unwrap_or(&config.general.default_store);

    let desc = RetailerRegistry::get_by_cli_name(name)
        .ok_or_else(|| CoreError::UnknownStore(name.to_string()))?;

    if !config.is_store_enabled(desc) {
        return Err(CoreError::StoreDisabled(desc.cli_name().to_string()).into());
    }

    Ok(desc)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use ondrop_core::StoreKind;

    #[test]
    fn test_resolve_default_store() {
        let desc = resolve_store(None, &Config::default()).unwrap();
        assert_eq!(desc.id, StoreKind::TheNorthFace);
    }

    #[test]
    fn test_resolve_flag_case_insensitive() {
        let desc = resolve_store(Some("TNF"), &Config::default()).unwrap();
        assert_eq!(desc.id, StoreKind::TheNorthFace);
    }

    #[test]
    fn test_resolve_unknown_store() {
        let err = resolve_store(Some("acme"), &Config::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::UnknownStore(name)) if name == "acme"
        ));
    }

    #[test]
    fn test_resolve_configured_default() {
        let mut config = Config::default();
        config.general.default_store = "bogus".to_string();

        assert!(resolve_store(None, &config).is_err());
        assert!(resolve_store(Some("tnf"), &config).is_ok());
    }

    #[test]
    fn test_resolve_disabled_store() {
        let mut config = Config::default();
        config.stores.insert(
            "tnf".to_string(),
            StoreConfig {
                enabled: false,
                ..StoreConfig::default()
            },
        );

        let err = resolve_store(Some("tnf"), &config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::StoreDisabled(_))
        ));
    }

    #[test]
    fn test_lookup_requires_all_fields() {
        let args = CheckArgs {
            sku: Some("0A8F5C".to_string()),
            ..CheckArgs::default()
        };
        assert!(args.lookup().is_err());

        let args = CheckArgs {
            sku: Some("0A8F5C".to_string()),
            color: Some("CQO".to_string()),
            size: Some("M".to_string()),
            store: None,
        };
        assert_eq!(args.lookup().unwrap(), ("0A8F5C", "CQO", "M"));
    }
}
