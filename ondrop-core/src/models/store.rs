//! Supported retailers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ============================================================================
// Store Kind
// ============================================================================

/// Supported retailer kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    /// The North Face (inventory-by-variant-key API).
    TheNorthFace,
}

impl StoreKind {
    /// Returns the display name for this store.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TheNorthFace => "The North Face",
        }
    }

    /// Returns the CLI name for this store (lowercase, no spaces).
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::TheNorthFace => "tnf",
        }
    }

    /// Returns all available store kinds.
    pub fn all() -> &'static [StoreKind] {
        &[Self::TheNorthFace]
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for StoreKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.cli_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownStore(s.to_string()))
    }
}
