//! Domain models for `OnDrop`.
//!
//! - [`product`] - The normalized lookup result
//! - [`variant`] - Variant key decoding
//! - [`store`] - Supported retailers

pub mod product;
pub mod store;
pub mod variant;

pub use product::{AdditionalInfo, ProductInfo, UNKNOWN_STATUS, VariantStock};
pub use store::StoreKind;
pub use variant::VariantKey;
