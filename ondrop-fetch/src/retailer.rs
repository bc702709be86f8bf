//! Retailer capability trait.
//!
//! A retailer knows where its inventory API lives, which headers it expects
//! and how to turn its payload into stock information. Transport and request
//! preparation are shared; see [`crate::steps`].

use crate::record::{Headers, WorkingRecord};

/// The capability set every concrete retailer provides.
///
/// ## Implementing a Retailer
///
/// ```ignore
/// struct Acme;
///
/// impl Retailer for Acme {
///     fn website_name(&self) -> &str {
///         "Acme"
///     }
///
///     fn base_url(&self) -> &str {
///         "https://acme.example"
///     }
///
///     fn product_url(&self, sku: &str) -> String {
///         format!("{}/inventory/{sku}", self.base_url())
///     }
///
///     fn default_headers(&self) -> Headers {
///         Headers::from([("Accept".into(), "application/json".into())])
///     }
///
///     fn parse_response(&self, mut record: WorkingRecord) -> WorkingRecord {
///         record.parsed_data = record.response.as_ref().and_then(|v| v.as_object().cloned());
///         record
///     }
///
///     fn extract_stock_info(&self, mut record: WorkingRecord) -> WorkingRecord {
///         record.in_stock = Some(false);
///         record
///     }
/// }
/// ```
pub trait Retailer: Send + Sync {
    /// Display name (e.g. "The North Face").
    fn website_name(&self) -> &str;

    /// Scheme and host root of the retailer.
    fn base_url(&self) -> &str;

    /// Inventory-lookup endpoint for a SKU.
    fn product_url(&self, sku: &str) -> String;

    /// Static headers sent with every request.
    fn default_headers(&self) -> Headers;

    /// Populates `parsed_data` from `response`.
    ///
    /// Must yield an empty map when there is no response.
    fn parse_response(&self, record: WorkingRecord) -> WorkingRecord;

    /// Populates `in_stock` and `additional_info` from `parsed_data`.
    fn extract_stock_info(&self, record: WorkingRecord) -> WorkingRecord;
}
