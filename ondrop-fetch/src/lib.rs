// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `OnDrop` Fetch
//!
//! The stock lookup pipeline and its HTTP transport.
//!
//! ## Lookup Pipeline
//!
//! - [`pipeline::Pipeline`] - Runs every step in order, never short-circuits
//! - [`record::WorkingRecord`] - Per-lookup state threaded through the steps
//! - [`retailer::Retailer`] - Capability set each retailer implements
//! - [`steps`] - The shared prepare/request/finalize steps
//! - [`client::RetailerClient`] - `check_stock`, which never fails
//!
//! ## Host APIs
//!
//! - [`host::http`] - `Transport` trait and the `reqwest`-backed client
//!
//! ## Example
//!
//! ```ignore
//! use ondrop_fetch::{FetchContext, RetailerClient};
//!
//! let ctx = FetchContext::new()?;
//! let client = RetailerClient::from_context(Arc::new(TheNorthFace::new()), &ctx);
//!
//! let info = client.check_stock("0A8F5C", "CQO", "M").await;
//! println!("in stock: {}", info.in_stock);
//! ```

pub mod client;
pub mod context;
pub mod error;
pub mod host;
pub mod pipeline;
pub mod record;
pub mod retailer;
pub mod steps;

// Re-export key types at crate root

// Errors
pub use error::FetchError;

// Host APIs
pub use host::http::{HttpClient, Transport, header_map};

// Pipeline
pub use client::RetailerClient;
pub use context::{FetchContext, FetchContextBuilder, FetchSettings};
pub use pipeline::{FnStep, Pipeline, PipelineStep};
pub use record::{Headers, WorkingRecord};
pub use retailer::Retailer;
pub use steps::{
    CreateProductInfo, ExtractStockInfo, MakeRequest, ParseResponse, PrepareRequest, StepContext,
    lookup_pipeline,
};
