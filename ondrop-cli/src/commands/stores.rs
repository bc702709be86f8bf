//! Stores command - list available stores.

use anyhow::Result;
use ondrop_retailers::RetailerRegistry;
use tracing::info;

use crate::config::Config;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the stores command.
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    info!("Listing stores");

    let stores = RetailerRegistry::all();

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);

            println!("{}", formatter.format_stores_header());
            println!("{}", "─".repeat(70));

            for desc in stores {
                println!("{}", formatter.format_store_line(desc, config.is_store_enabled(desc)));
            }

            println!();
            println!("Total: {} stores", stores.len());
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_stores(stores, config)?);
        }
    }

    Ok(())
}
