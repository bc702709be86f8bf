//! Retailer registry.
//!
//! Static access to every retailer descriptor, and the central point for
//! resolving a `--store` name.

use std::collections::HashMap;
use std::sync::OnceLock;

use ondrop_core::StoreKind;

use crate::descriptor::RetailerDescriptor;
use crate::thenorthface::thenorthface_descriptor;

// ============================================================================
// Static Registry
// ============================================================================

/// Static storage for all retailer descriptors.
static DESCRIPTORS: OnceLock<Vec<RetailerDescriptor>> = OnceLock::new();

/// Lowercased CLI name to store kind.
static CLI_NAME_MAP: OnceLock<HashMap<String, StoreKind>> = OnceLock::new();

fn init_descriptors() -> Vec<RetailerDescriptor> {
    vec![thenorthface_descriptor()]
}

fn build_cli_name_map(descriptors: &[RetailerDescriptor]) -> HashMap<String, StoreKind> {
    let mut map = HashMap::new();

    for desc in descriptors {
        map.insert(desc.cli.name.to_lowercase(), desc.id);

        for alias in desc.cli.aliases {
            map.insert(alias.to_lowercase(), desc.id);
        }
    }

    map
}

// ============================================================================
// Retailer Registry
// ============================================================================

/// Global registry of retailer descriptors, initialized on first access.
pub struct RetailerRegistry;

impl RetailerRegistry {
    /// Returns all retailer descriptors.
    pub fn all() -> &'static [RetailerDescriptor] {
        DESCRIPTORS.get_or_init(init_descriptors)
    }

    /// Gets a descriptor by kind.
    pub fn get(id: StoreKind) -> Option<&'static RetailerDescriptor> {
        Self::all().iter().find(|d| d.id == id)
    }

    /// Returns the CLI name to store kind mapping.
    pub fn cli_name_map() -> &'static HashMap<String, StoreKind> {
        CLI_NAME_MAP.get_or_init(|| build_cli_name_map(Self::all()))
    }

    /// Looks up a retailer by CLI name or alias, ignoring case.
    pub fn get_by_cli_name(name: &str) -> Option<&'static RetailerDescriptor> {
        let kind = Self::cli_name_map().get(&name.trim().to_lowercase())?;
        Self::get(*kind)
    }

    /// Returns the number of registered retailers.
    pub fn count() -> usize {
        Self::all().len()
    }

    /// Returns all store kinds.
    pub fn kinds() -> Vec<StoreKind> {
        Self::all().iter().map(|d| d.id).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
