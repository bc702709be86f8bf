//! Product availability types.
//!
//! This module contains the normalized result of a stock lookup:
//! - [`ProductInfo`] - The record returned to callers
//! - [`AdditionalInfo`] - Retailer-derived details about the product
//! - [`VariantStock`] - Quantity and status of one variant

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Status reported when a retailer omits the variant's stock status.
pub const UNKNOWN_STATUS: &str = "UNKNOWN";

// ============================================================================
// Variant Stock
// ============================================================================

/// Stock details for one color/size variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantStock {
    /// Units available.
    pub quantity: i64,
    /// Retailer status string (e.g. `IN_STOCK`).
    pub status: String,
}

impl VariantStock {
    /// Creates a new variant stock entry.
    pub fn new(quantity: i64, status: impl Into<String>) -> Self {
        Self {
            quantity,
            status: status.into(),
        }
    }
}

impl Default for VariantStock {
    fn default() -> Self {
        Self::new(0, UNKNOWN_STATUS)
    }
}

// ============================================================================
// Additional Info
// ============================================================================

/// Details gathered from every variant in a retailer payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    /// Product display name, if the payload carries one.
    pub product_name: Option<String>,
    /// In-stock sizes, sorted ascending without duplicates.
    #[serde(default)]
    pub available_sizes: Vec<String>,
    /// Stock per variant, keyed by [`AdditionalInfo::status_key`].
    #[serde(default)]
    pub stock_status: BTreeMap<String, VariantStock>,
}

impl AdditionalInfo {
    /// Creates additional info, sorting and de-duplicating the sizes.
    pub fn new(
        product_name: Option<String>,
        available_sizes: impl IntoIterator<Item = String>,
        stock_status: BTreeMap<String, VariantStock>,
    ) -> Self {
        let sizes: BTreeSet<String> = available_sizes.into_iter().collect();
        Self {
            product_name,
            available_sizes: sizes.into_iter().collect(),
            stock_status,
        }
    }

    /// Builds the `stock_status` key for a color/size pair.
    pub fn status_key(color: &str, size: &str) -> String {
        format!("{color}_{size}")
    }

    /// Looks up the stock entry for a color/size pair.
    pub fn stock_for(&self, color: &str, size: &str) -> Option<&VariantStock> {
        self.stock_status.get(&Self::status_key(color, size))
    }

    /// Returns true if no variant contributed anything.
    pub fn is_empty(&self) -> bool {
        self.product_name.is_none()
            && self.available_sizes.is_empty()
            && self.stock_status.is_empty()
    }
}

// ============================================================================
// Product Info
// ============================================================================

/// The normalized result of a stock lookup.
///
/// Always constructible, even when the lookup failed: `in_stock` is then
/// `false` and `additional_info` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    /// Retailer SKU that was looked up.
    pub sku: String,
    /// Requested color code.
    pub color: String,
    /// Requested size.
    pub size: String,
    /// Whether the requested variant is in stock.
    pub in_stock: bool,
    /// Retailer-derived details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<AdditionalInfo>,
}

impl ProductInfo {
    /// Creates a new product info record.
    pub fn new(
        sku: impl Into<String>,
        color: impl Into<String>,
        size: impl Into<String>,
        in_stock: bool,
        additional_info: Option<AdditionalInfo>,
    ) -> Self {
        Self {
            sku: sku.into(),
            color: color.into(),
            size: size.into(),
            in_stock,
            additional_info,
        }
    }

    /// Creates the fallback record used when a lookup could not complete.
    pub fn unavailable(
        sku: impl Into<String>,
        color: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self::new(sku, color, size, false, None)
    }

    /// Returns the stock entry for the requested color and size, if reported.
    pub fn requested_stock(&self) -> Option<&VariantStock> {
        self.additional_info
            .as_ref()
            .and_then(|info| info.stock_for(&self.color, &self.size))
    }

    /// Returns the product name, if reported.
    pub fn product_name(&self) -> Option<&str> {
        self.additional_info
            .as_ref()
            .and_then(|info| info.product_name.as_deref())
    }
}

// ============================================================================
// Tests
// ============================================================================
