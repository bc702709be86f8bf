//! The North Face inventory parser.
//!
//! Payload shape:
//!
//! ```json
//! {
//!   "name": "Test Product",
//!   "variants": {
//!     "NF:0A8F5C:CQO:M::1:": {"inStock": true, "quantity": 5, "stockStatus": "IN_STOCK"}
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use ondrop_core::{AdditionalInfo, UNKNOWN_STATUS, VariantKey, VariantStock};
use serde_json::{Map, Value};

use super::error::TheNorthFaceError;

// ============================================================================
// Payload Types
// ============================================================================

/// Decoded inventory payload.
#[derive(Debug, Default)]
pub struct InventoryPayload {
    /// Product display name.
    pub name: Option<String>,
    /// Variants keyed by colon-delimited variant key, in payload order.
    pub variants: Option<Map<String, Value>>,
}

/// Stock fields of one variant.
///
/// Each field is read on its own; a field of the wrong type counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantInfo {
    /// Whether the variant can be ordered.
    pub in_stock: Option<bool>,
    /// Units available.
    pub quantity: Option<i64>,
    /// Retailer status string.
    pub stock_status: Option<String>,
}

impl VariantInfo {
    /// Reads the stock fields of a variant entry.
    pub fn from_value(value: &Value) -> Self {
        let Some(entry) = value.as_object() else {
            return Self::default();
        };

        Self {
            in_stock: entry.get("inStock").and_then(Value::as_bool),
            quantity: entry.get("quantity").and_then(as_quantity),
            stock_status: entry
                .get("stockStatus")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    /// Returns true if the variant reports itself in stock.
    pub fn is_in_stock(&self) -> bool {
        self.in_stock.unwrap_or(false)
    }

    /// Returns true if no stock field was present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Integral quantities pass through; fractional ones are truncated.
#[allow(clippy::cast_possible_truncation)]
fn as_quantity(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| value.as_f64().map(|q| q as i64))
}

impl InventoryPayload {
    /// Reads a parsed inventory object.
    ///
    /// Only a `variants` value that is neither an object nor null is an error.
    pub fn from_map(data: &Map<String, Value>) -> Result<Self, TheNorthFaceError> {
        let variants = match data.get("variants") {
            None | Some(Value::Null) => None,
            Some(Value::Object(variants)) => Some(variants.clone()),
            Some(other) => {
                return Err(TheNorthFaceError::InvalidPayload(format!(
                    "variants is {}, expected an object",
                    json_type_name(other)
                )));
            }
        };

        Ok(Self {
            name: data.get("name").and_then(Value::as_str).map(str::to_string),
            variants,
        })
    }

    /// Iterates variants in payload order with their decoded keys.
    pub fn variants(&self) -> impl Iterator<Item = (VariantKey, VariantInfo)> + '_ {
        self.variants
            .iter()
            .flatten()
            .map(|(key, value)| (VariantKey::parse(key), VariantInfo::from_value(value)))
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Returns the JSON object of an inventory response.
pub fn inventory_object(response: &Value) -> Result<&Map<String, Value>, TheNorthFaceError> {
    response
        .as_object()
        .ok_or_else(|| TheNorthFaceError::NotAnObject(json_type_name(response)))
}

/// Finds the variant matching the requested size and color.
///
/// The first variant whose decoded key matches (case-insensitively) wins.
/// Otherwise the variant map is looked up directly by the raw color string.
/// Returns empty info if neither matches.
pub fn find_variant_info(payload: &InventoryPayload, size: &str, color: &str) -> VariantInfo {
    if let Some((_, info)) = payload.variants().find(|(key, _)| key.matches(color, size)) {
        return info;
    }

    payload
        .variants
        .as_ref()
        .and_then(|variants| variants.get(color))
        .map(VariantInfo::from_value)
        .unwrap_or_default()
}

/// Builds additional info by scanning every variant in the payload.
///
/// Each in-stock variant with a size contributes to `available_sizes`; if it
/// also has a color code it contributes a `stock_status` entry.
pub fn summarize(payload: &InventoryPayload) -> AdditionalInfo {
    let mut sizes = Vec::new();
    let mut stock_status = BTreeMap::new();

    for (key, info) in payload.variants() {
        if key.size.is_empty() || !info.is_in_stock() {
            continue;
        }

        if !key.color.is_empty() {
            stock_status.insert(
                AdditionalInfo::status_key(&key.color, &key.size),
                VariantStock::new(
                    info.quantity.unwrap_or(0),
                    info.stock_status.unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
                ),
            );
        }
        sizes.push(key.size);
    }

    AdditionalInfo::new(payload.name.clone(), sizes, stock_status)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> InventoryPayload {
        InventoryPayload::from_map(value.as_object().unwrap()).unwrap()
    }

    fn sample() -> InventoryPayload {
        payload(json!({
            "name": "Test Product",
            "variants": {
                "NF:0A8F5C:CQO:M::1:": {"inStock": true, "quantity": 5, "stockStatus": "IN_STOCK"},
                "NF:0A8F5C:CQO:L::1:": {"inStock": true, "quantity": 3, "stockStatus": "IN_STOCK"},
                "NF:0A8F5C:BLK:M::1:": {
                    "inStock": false,
                    "quantity": 0,
                    "stockStatus": "OUT_OF_STOCK"
                }
            }
        }))
    }

    #[test]
    fn test_find_exact_match() {
        let info = find_variant_info(&sample(), "M", "CQO");
        assert_eq!(info.in_stock, Some(true));
        assert_eq!(info.quantity, Some(5));
    }

    #[test]
    fn test_find_case_insensitive() {
        let info = find_variant_info(&sample(), "m", "cqo");
        assert!(info.is_in_stock());
    }

    #[test]
    fn test_find_no_match() {
        let info = find_variant_info(&sample(), "XL", "RED");
        assert!(info.is_empty());
    }

    #[test]
    fn test_find_falls_back_to_raw_color_key() {
        let data = payload(json!({
            "variants": {"RED": {"inStock": true, "quantity": 2}}
        }));
        let info = find_variant_info(&data, "XL", "RED");
        assert!(info.is_in_stock());
        assert_eq!(info.quantity, Some(2));
    }

    #[test]
    fn test_first_match_wins_in_payload_order() {
        let data = payload(json!({
            "variants": {
                "NF:A:CQO:M::1:": {"inStock": false, "quantity": 0},
                "NF:B:cqo:m::2:": {"inStock": true, "quantity": 9}
            }
        }));
        let info = find_variant_info(&data, "M", "CQO");
        assert_eq!(info.in_stock, Some(false));
    }

    #[test]
    fn test_summarize_sample() {
        let info = summarize(&sample());

        assert_eq!(info.product_name.as_deref(), Some("Test Product"));
        assert_eq!(info.available_sizes, vec!["L", "M"]);
        assert_eq!(
            info.stock_for("CQO", "M"),
            Some(&VariantStock::new(5, "IN_STOCK"))
        );
        assert_eq!(
            info.stock_for("CQO", "L"),
            Some(&VariantStock::new(3, "IN_STOCK"))
        );
        assert!(info.stock_for("BLK", "M").is_none());
    }

    #[test]
    fn test_summarize_defaults_missing_fields() {
        let info = summarize(&payload(json!({
            "variants": {"NF:1:RED:S::1:": {"inStock": true}}
        })));

        assert_eq!(
            info.stock_for("RED", "S"),
            Some(&VariantStock::new(0, UNKNOWN_STATUS))
        );
    }

    #[test]
    fn test_summarize_skips_malformed_keys() {
        let info = summarize(&payload(json!({
            "variants": {
                "bad:key": {"inStock": true, "quantity": 1},
                "NF:1::XS::1:": {"inStock": true, "quantity": 4}
            }
        })));

        // Size without color still counts as available, but has no status entry.
        assert_eq!(info.available_sizes, vec!["XS"]);
        assert!(info.stock_status.is_empty());
    }

    #[test]
    fn test_summarize_deduplicates_sizes() {
        let info = summarize(&payload(json!({
            "variants": {
                "NF:1:RED:M::1:": {"inStock": true},
                "NF:1:BLU:M::1:": {"inStock": true},
                "NF:1:BLU:S::1:": {"inStock": true}
            }
        })));

        assert_eq!(info.available_sizes, vec!["M", "S"]);
        assert_eq!(info.stock_status.len(), 3);
    }

    #[test]
    fn test_empty_payload() {
        let info = summarize(&InventoryPayload::default());
        assert!(info.is_empty());
        assert!(find_variant_info(&InventoryPayload::default(), "M", "CQO").is_empty());
    }

    #[test]
    fn test_undecodable_variant_is_empty() {
        assert!(VariantInfo::from_value(&json!("nope")).is_empty());
        assert!(VariantInfo::from_value(&json!({"inStock": "yes"})).is_empty());
    }

    #[test]
    fn test_fractional_quantity_is_truncated() {
        let info = VariantInfo::from_value(&json!({"inStock": true, "quantity": 5.0}));
        assert!(info.is_in_stock());
        assert_eq!(info.quantity, Some(5));

        let info = VariantInfo::from_value(&json!({"quantity": 2.7}));
        assert_eq!(info.quantity, Some(2));
    }

    #[test]
    fn test_mistyped_field_keeps_other_fields() {
        let info = VariantInfo::from_value(&json!({
            "inStock": true,
            "quantity": "lots",
            "stockStatus": 7
        }));

        assert!(info.is_in_stock());
        assert_eq!(info.quantity, None);
        assert_eq!(info.stock_status, None);
    }

    #[test]
    fn test_summarize_mistyped_fields_fall_back_to_defaults() {
        let info = summarize(&payload(json!({
            "name": 12345,
            "variants": {
                "NF:0A8F5C:CQO:M::1:": {"inStock": true, "quantity": 5.0, "stockStatus": 7}
            }
        })));

        assert!(info.product_name.is_none());
        assert_eq!(info.available_sizes, vec!["M"]);
        assert_eq!(
            info.stock_for("CQO", "M"),
            Some(&VariantStock::new(5, UNKNOWN_STATUS))
        );
    }

    #[test]
    fn test_non_string_name_keeps_variants() {
        let data = payload(json!({
            "name": 12345,
            "variants": {"NF:0A8F5C:CQO:M::1:": {"inStock": true}}
        }));

        assert!(data.name.is_none());
        assert!(find_variant_info(&data, "M", "CQO").is_in_stock());
    }

    #[test]
    fn test_variants_not_an_object() {
        let data = json!({"variants": ["NF:1:RED:M::1:"]});
        assert!(matches!(
            InventoryPayload::from_map(data.as_object().unwrap()),
            Err(TheNorthFaceError::InvalidPayload(msg)) if msg.contains("array")
        ));
    }

    #[test]
    fn test_null_variants_is_empty() {
        let data = payload(json!({"name": null, "variants": null}));
        assert_eq!(data.variants().count(), 0);
    }

    #[test]
    fn test_inventory_object_rejects_array() {
        assert!(matches!(
            inventory_object(&json!([1, 2])),
            Err(TheNorthFaceError::NotAnObject("array"))
        ));
    }
}
