//! The North Face retailer descriptor.

use std::sync::Arc;

use ondrop_core::StoreKind;
use ondrop_fetch::Retailer;

use super::retailer::{BASE_URL, TheNorthFace};
use crate::descriptor::{CliConfig, RetailerDescriptor, RetailerOptions};

/// Returns the descriptor for The North Face.
pub fn thenorthface_descriptor() -> RetailerDescriptor {
    RetailerDescriptor {
        id: StoreKind::TheNorthFace,
        display_name: StoreKind::TheNorthFace.display_name(),
        default_base_url: BASE_URL,
        cli: thenorthface_cli_config(),
        build: build_thenorthface,
    }
}

fn thenorthface_cli_config() -> CliConfig {
    CliConfig {
        name: StoreKind::TheNorthFace.cli_name(),
        aliases: &["thenorthface", "north-face"],
    }
}

fn build_thenorthface(options: &RetailerOptions) -> Arc<dyn Retailer> {
    Arc::new(TheNorthFace::with_options(options))
}
