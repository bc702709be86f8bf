// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `OnDrop` Retailers
//!
//! Retailer-specific implementations for `OnDrop`.
//!
//! Each retailer module includes:
//!
//! - **Retailer**: URL, headers, and response handling
//! - **Parser**: Payload decoding and variant matching
//! - **Descriptor**: Static configuration used by the registry
//!
//! ## Supported Retailers
//!
//! | Retailer | CLI name | Aliases |
//! |----------|----------|---------|
//! | The North Face | `tnf` | `thenorthface`, `north-face` |
//!
//! ## Usage
//!
//! ```ignore
//! use ondrop_fetch::FetchContext;
//! use ondrop_retailers::{RetailerOptions, RetailerRegistry};
//!
//! let desc = RetailerRegistry::get_by_cli_name("tnf").unwrap();
//! let client = desc.build_client(&FetchContext::new()?, &RetailerOptions::default());
//! let info = client.check_stock("0A8F5C", "CQO", "M").await;
//! ```

pub mod descriptor;
pub mod registry;

pub mod thenorthface;

// Re-export key types
pub use descriptor::{CliConfig, RetailerDescriptor, RetailerOptions};
pub use registry::RetailerRegistry;

pub use thenorthface::{TheNorthFace, TheNorthFaceError, thenorthface_descriptor};
