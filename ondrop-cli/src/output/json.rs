//! JSON output formatting.

use anyhow::Result;
use chrono::{DateTime, Utc};
use ondrop_core::{ProductInfo, StoreKind};
use ondrop_retailers::RetailerDescriptor;
use serde::{Serialize, Serializer};

use crate::config::Config;

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for a stock check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutput<'a> {
    pub store: &'a str,
    pub store_name: &'a str,
    #[serde(serialize_with = "serialize_datetime")]
    pub checked_at: DateTime<Utc>,
    pub product: &'a ProductInfo,
}

/// Store info output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreOutput<'a> {
    pub id: StoreKind,
    pub display_name: &'a str,
    pub cli_name: &'a str,
    pub aliases: &'a [&'a str],
    pub base_url: &'a str,
    pub enabled: bool,
}

// ============================================================================
// Serialization helpers
// ============================================================================

fn serialize_datetime<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339())
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats the result of a stock check.
    pub fn format_check(
        &self,
        product: &ProductInfo,
        desc: &RetailerDescriptor,
        checked_at: DateTime<Utc>,
    ) -> Result<String> {
        self.format(&CheckOutput {
            store: desc.cli_name(),
            store_name: desc.display_name(),
            checked_at,
            product,
        })
    }

    /// Formats the store list.
    pub fn format_stores(&self, stores: &[RetailerDescriptor], config: &Config) -> Result<String> {
        let outputs: Vec<StoreOutput<'_>> = stores
            .iter()
            .map(|desc| StoreOutput {
                id: desc.id,
                display_name: desc.display_name(),
                cli_name: desc.cli_name(),
                aliases: desc.cli.aliases,
                base_url: config
                    .store(desc)
                    .and_then(|s| s.base_url.as_deref())
                    .unwrap_or(desc.default_base_url),
                enabled: config.is_store_enabled(desc),
            })
            .collect();

        self.format(&outputs)
    }
}
