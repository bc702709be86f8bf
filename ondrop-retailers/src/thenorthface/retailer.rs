//! The North Face retailer.

use ondrop_fetch::{Headers, Retailer, WorkingRecord};
use serde_json::Map;
use tracing::{debug, warn};

use super::parser::{InventoryPayload, find_variant_info, inventory_object, summarize};
use crate::descriptor::RetailerOptions;

/// Default storefront origin.
pub const BASE_URL: &str = "https://www.thenorthface.com";

/// Inventory endpoint template, relative to the base URL.
const INVENTORY_PATH: &str = "/api/products/v2/products";

/// Browser user agent the inventory API expects.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Fixed transaction id sent with every request.
const TRANSACTION_ID: &str = "811a725b-ae5e-497e-a565-071ff93c7b6a";

/// The North Face inventory client.
#[derive(Debug, Clone)]
pub struct TheNorthFace {
    base_url: String,
    extra_headers: Headers,
}

impl TheNorthFace {
    /// Creates a client for the public storefront.
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            extra_headers: Headers::new(),
        }
    }

    /// Creates a client with a base URL override and extra headers.
    ///
    /// Extra headers are merged over the defaults.
    pub fn with_options(options: &RetailerOptions) -> Self {
        let base_url = options
            .base_url
            .as_deref()
            .map_or_else(|| BASE_URL.to_string(), |url| url.trim_end_matches('/').to_string());

        Self {
            base_url,
            extra_headers: options.extra_headers.clone(),
        }
    }
}

impl Default for TheNorthFace {
    fn default() -> Self {
        Self::new()
    }
}

impl Retailer for TheNorthFace {
    fn website_name(&self) -> &str {
        "The North Face"
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn product_url(&self, sku: &str) -> String {
        format!("{}{INVENTORY_PATH}/{sku}/inventory", self.base_url)
    }

    fn default_headers(&self) -> Headers {
        let mut headers = Headers::from(
            [
                ("Accept", "application/json"),
                ("User-Agent", USER_AGENT),
                ("x-transaction-id", TRANSACTION_ID),
                ("channel", "ECOMM"),
                ("locale", "en_US"),
                ("brand", "TNF"),
                ("siteid", "TNF-US"),
                ("source", "ECOM15"),
                ("region", "NORA"),
            ]
            .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        headers.extend(self.extra_headers.clone());
        headers
    }

    fn parse_response(&self, mut record: WorkingRecord) -> WorkingRecord {
        let parsed = match record.response.as_ref() {
            None => Map::new(),
            Some(body) => match inventory_object(body) {
                Ok(object) => object.clone(),
                Err(e) => {
                    warn!(sku = %record.sku, error = %e, "Unexpected inventory response");
                    record.error.get_or_insert_with(|| e.to_string());
                    Map::new()
                }
            },
        };

        record.parsed_data = Some(parsed);
        record
    }

    fn extract_stock_info(&self, mut record: WorkingRecord) -> WorkingRecord {
        let payload = match record.parsed_data.as_ref() {
            None => InventoryPayload::default(),
            Some(data) => InventoryPayload::from_map(data).unwrap_or_else(|e| {
                warn!(sku = %record.sku, error = %e, "Malformed inventory payload");
                record.error.get_or_insert_with(|| e.to_string());
                InventoryPayload::default()
            }),
        };

        let variant = find_variant_info(&payload, &record.size, &record.color);
        let info = summarize(&payload);
        debug!(
            sku = %record.sku,
            matched = !variant.is_empty(),
            sizes = info.available_sizes.len(),
            "Extracted stock info"
        );

        record.in_stock = Some(variant.is_in_stock());
        record.additional_info = Some(info);
        record
    }
}

// ============================================================================
// Tests
// ============================================================================
