// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `OnDrop` Core
//!
//! Core types and models for the `OnDrop` stock checker.
//!
//! This crate provides the foundational abstractions used across all other
//! `OnDrop` crates. It performs no I/O.
//!
//! ## Key Types
//!
//! ### Result Model
//! - [`ProductInfo`] - Normalized stock record returned by every lookup
//! - [`AdditionalInfo`] - Product name, available sizes and per-variant status
//! - [`VariantStock`] - Quantity and status of a single in-stock variant
//!
//! ### Retailer Payloads
//! - [`VariantKey`] - Colon-delimited variant identifier (color/size codes)
//!
//! ### Stores
//! - [`StoreKind`] - Enum of all supported retailers

pub mod error;
pub mod models;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{AdditionalInfo, ProductInfo, StoreKind, UNKNOWN_STATUS, VariantKey, VariantStock};
