//! Retailer descriptor system.
//!
//! A descriptor holds the static configuration for a retailer:
//! - Identity and display name
//! - CLI names
//! - A constructor for the retailer client

use std::fmt;
use std::sync::Arc;

use ondrop_core::StoreKind;
use ondrop_fetch::{FetchContext, Headers, Retailer, RetailerClient};

// ============================================================================
// Retailer Descriptor
// ============================================================================

/// Complete descriptor for a retailer.
pub struct RetailerDescriptor {
    /// Retailer identifier.
    pub id: StoreKind,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Storefront origin used when no override is configured.
    pub default_base_url: &'static str,
    /// CLI configuration.
    pub cli: CliConfig,
    /// Builds the retailer from user options.
    pub build: fn(&RetailerOptions) -> Arc<dyn Retailer>,
}

impl RetailerDescriptor {
    /// Returns the display name.
    pub fn display_name(&self) -> &str {
        self.display_name
    }

    /// Returns the CLI name.
    pub fn cli_name(&self) -> &str {
        self.cli.name
    }

    /// Builds the retailer with the given options.
    pub fn build_retailer(&self, options: &RetailerOptions) -> Arc<dyn Retailer> {
        (self.build)(options)
    }

    /// Builds a client that checks stock through the context's transport.
    pub fn build_client(&self, ctx: &FetchContext, options: &RetailerOptions) -> RetailerClient {
        RetailerClient::from_context(self.build_retailer(options), ctx)
    }
}

impl fmt::Debug for RetailerDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetailerDescriptor")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("default_base_url", &self.default_base_url)
            .field("cli", &self.cli)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// CLI Config
// ============================================================================

/// Names a retailer answers to on the command line.
#[derive(Debug)]
pub struct CliConfig {
    /// Primary CLI name.
    pub name: &'static str,
    /// Alternative names.
    pub aliases: &'static [&'static str],
}

// ============================================================================
// Retailer Options
// ============================================================================

/// User overrides applied when building a retailer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetailerOptions {
    /// Replaces the storefront origin.
    pub base_url: Option<String>,
    /// Merged over the retailer's default headers.
    pub extra_headers: Headers,
}

impl RetailerOptions {
    /// Sets the base URL override.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Adds an extra header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(name.into(), value.into());
        self
    }
}
