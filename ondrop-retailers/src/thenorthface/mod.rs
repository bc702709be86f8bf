//! The North Face retailer implementation.
//!
//! Stock comes from the per-SKU inventory endpoint, whose `variants` map is
//! keyed by colon-delimited variant keys (`NF:<style>:<color>:<size>::...`).

mod descriptor;
mod error;
pub(crate) mod parser;
mod retailer;

pub use descriptor::thenorthface_descriptor;
pub use error::TheNorthFaceError;
pub use parser::{InventoryPayload, VariantInfo, find_variant_info, summarize};
pub use retailer::{BASE_URL, TheNorthFace, USER_AGENT};
