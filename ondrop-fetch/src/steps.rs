//! The five steps every stock lookup runs.
//!
//! `prepare_request`, `make_request` and `create_product_info` are shared by
//! all retailers. `parse_response` and `extract_stock_info` delegate to the
//! retailer.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::host::http::Transport;
use crate::pipeline::{Pipeline, PipelineStep};
use crate::record::WorkingRecord;
use crate::retailer::Retailer;

// ============================================================================
// Step Context
// ============================================================================

/// Read-only context shared by the lookup steps.
#[derive(Clone)]
pub struct StepContext {
    /// The retailer being queried.
    pub retailer: Arc<dyn Retailer>,
    /// Transport used for the GET request.
    pub transport: Arc<dyn Transport>,
}

impl StepContext {
    /// Creates a new step context.
    pub fn new(retailer: Arc<dyn Retailer>, transport: Arc<dyn Transport>) -> Self {
        Self {
            retailer,
            transport,
        }
    }
}

/// Builds the standard lookup pipeline:
/// prepare → request → parse → extract → finalize.
pub fn lookup_pipeline() -> Pipeline<StepContext> {
    Pipeline::new()
        .then(PrepareRequest)
        .then(MakeRequest)
        .then(ParseResponse)
        .then(ExtractStockInfo)
        .then(CreateProductInfo)
}

// ============================================================================
// Steps
// ============================================================================

/// Sets `headers` and `url` from the retailer.
pub struct PrepareRequest;

#[async_trait]
impl PipelineStep<StepContext> for PrepareRequest {
    fn name(&self) -> &str {
        "prepare_request"
    }

    async fn run(&self, ctx: &StepContext, mut record: WorkingRecord) -> WorkingRecord {
        record.headers = Some(ctx.retailer.default_headers());
        record.url = Some(ctx.retailer.product_url(&record.sku));
        record
    }
}

/// Performs the GET and stores the body, or the failure, on the record.
pub struct MakeRequest;

#[async_trait]
impl PipelineStep<StepContext> for MakeRequest {
    fn name(&self) -> &str {
        "make_request"
    }

    async fn run(&self, ctx: &StepContext, mut record: WorkingRecord) -> WorkingRecord {
        let Some(url) = record.url.clone() else {
            record.fail(FetchError::MissingRequest.to_string());
            return record;
        };
        let headers = record.headers.clone().unwrap_or_default();

        match ctx.transport.get_json(&url, &headers).await {
            Ok(body) => {
                debug!(url = %url, "Inventory response received");
                record.response = Some(body);
            }
            Err(error) => {
                warn!(url = %url, error = %error, "Inventory request failed");
                record.fail(error.to_string());
            }
        }

        record
    }
}

/// Delegates to [`Retailer::parse_response`].
pub struct ParseResponse;

#[async_trait]
impl PipelineStep<StepContext> for ParseResponse {
    fn name(&self) -> &str {
        "parse_response"
    }

    async fn run(&self, ctx: &StepContext, record: WorkingRecord) -> WorkingRecord {
        ctx.retailer.parse_response(record)
    }
}

/// Delegates to [`Retailer::extract_stock_info`].
pub struct ExtractStockInfo;

#[async_trait]
impl PipelineStep<StepContext> for ExtractStockInfo {
    fn name(&self) -> &str {
        "extract_stock_info"
    }

    async fn run(&self, ctx: &StepContext, record: WorkingRecord) -> WorkingRecord {
        ctx.retailer.extract_stock_info(record)
    }
}

/// Builds the final `result` from the accumulated fields.
pub struct CreateProductInfo;

#[async_trait]
impl PipelineStep<StepContext> for CreateProductInfo {
    fn name(&self) -> &str {
        "create_product_info"
    }

    async fn run(&self, _ctx: &StepContext, mut record: WorkingRecord) -> WorkingRecord {
        record.result = Some(record.to_product_info());
        record
    }
}

// ============================================================================
// Tests
// ============================================================================
