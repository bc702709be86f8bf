//! The working record threaded through the lookup pipeline.
//!
//! A record is created at the start of one `check_stock` call, owned by that
//! call alone, and discarded once its `result` has been taken. Steps receive
//! it by value and hand it back; fields are only ever set or overwritten.

use std::collections::BTreeMap;

use ondrop_core::{AdditionalInfo, ProductInfo};
use serde_json::{Map, Value};

/// Request headers sent to a retailer.
pub type Headers = BTreeMap<String, String>;

/// Mutable, pipeline-local state of a single stock lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkingRecord {
    /// Requested SKU.
    pub sku: String,
    /// Requested color code.
    pub color: String,
    /// Requested size.
    pub size: String,
    /// Inventory endpoint for the SKU.
    pub url: Option<String>,
    /// Headers to send with the request.
    pub headers: Option<Headers>,
    /// Decoded JSON body. `None` after a transport failure.
    pub response: Option<Value>,
    /// Description of the transport failure, if any.
    pub error: Option<String>,
    /// Retailer payload after parsing. Empty when there was no response.
    pub parsed_data: Option<Map<String, Value>>,
    /// Whether the requested variant is in stock.
    pub in_stock: Option<bool>,
    /// Details derived from all variants.
    pub additional_info: Option<AdditionalInfo>,
    /// The final record, set by the last step.
    pub result: Option<ProductInfo>,
}

impl WorkingRecord {
    /// Creates a record holding only the lookup input.
    pub fn new(sku: impl Into<String>, color: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            color: color.into(),
            size: size.into(),
            ..Self::default()
        }
    }

    /// Returns true if an earlier step recorded a failure.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Records a failure and clears the response.
    pub fn fail(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.response = None;
    }

    /// Builds the final [`ProductInfo`] from the accumulated fields.
    ///
    /// `in_stock` defaults to `false` and `additional_info` to absent.
    pub fn to_product_info(&self) -> ProductInfo {
        ProductInfo::new(
            self.sku.clone(),
            self.color.clone(),
            self.size.clone(),
            self.in_stock.unwrap_or(false),
            self.additional_info.clone(),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
