//! Variant key decoding.
//!
//! Retailers identify variants with colon-delimited keys such as
//! `NF:0A8F5C:CQO:M::1:`. Segment 2 holds the color code and segment 3 the
//! size. Every other segment is opaque.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Separator between variant key segments.
const SEGMENT_SEPARATOR: char = ':';

/// Index of the color code segment.
const COLOR_SEGMENT: usize = 2;

/// Index of the size segment.
const SIZE_SEGMENT: usize = 3;

/// Color and size decoded from a variant key.
///
/// Malformed keys decode to an empty color and size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantKey {
    /// Color code (segment 2).
    pub color: String,
    /// Size code (segment 3).
    pub size: String,
}

impl VariantKey {
    /// Decodes a variant key string.
    ///
    /// ```
    /// use ondrop_core::VariantKey;
    ///
    /// let key = VariantKey::parse("NF:0A8F5C:CQO:M::1:");
    /// assert_eq!(key.color, "CQO");
    /// assert_eq!(key.size, "M");
    ///
    /// assert_eq!(VariantKey::parse("invalid:key"), VariantKey::default());
    /// ```
    pub fn parse(key: &str) -> Self {
        let segments: Vec<&str> = key.split(SEGMENT_SEPARATOR).collect();
        if segments.len() <= SIZE_SEGMENT {
            return Self::default();
        }

        Self {
            color: segments[COLOR_SEGMENT].to_string(),
            size: segments[SIZE_SEGMENT].to_string(),
        }
    }

    /// Decodes an optional key; `None` yields the empty key.
    pub fn parse_opt(key: Option<&str>) -> Self {
        key.map(Self::parse).unwrap_or_default()
    }

    /// Decodes a JSON value; anything but a string yields the empty key.
    pub fn from_value(value: &Value) -> Self {
        Self::parse_opt(value.as_str())
    }

    /// Returns the `(color, size)` pair.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.color, &self.size)
    }

    /// Returns true if neither a color nor a size was decoded.
    pub fn is_empty(&self) -> bool {
        self.color.is_empty() && self.size.is_empty()
    }

    /// Case-insensitive match against a requested color and size.
    pub fn matches(&self, color: &str, size: &str) -> bool {
        eq_ignore_case(&self.size, size) && eq_ignore_case(&self.color, color)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_uppercase() == b.to_uppercase()
}

// ============================================================================
// Tests
// ============================================================================
