//! Retailer client: the `check_stock` entry point.
//!
//! A client pairs one retailer with a transport and the lookup pipeline.
//! [`RetailerClient::check_stock`] always returns a [`ProductInfo`]; any
//! failure is logged and turned into an out-of-stock record.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use ondrop_core::ProductInfo;
use tracing::{debug, error, info, instrument};

use crate::context::FetchContext;
use crate::host::http::Transport;
use crate::pipeline::Pipeline;
use crate::record::WorkingRecord;
use crate::retailer::Retailer;
use crate::steps::{StepContext, lookup_pipeline};

/// Runs stock lookups against one retailer.
pub struct RetailerClient {
    context: StepContext,
    pipeline: Pipeline<StepContext>,
}

impl RetailerClient {
    /// Creates a client with the standard lookup pipeline.
    pub fn new(retailer: Arc<dyn Retailer>, transport: Arc<dyn Transport>) -> Self {
        Self {
            context: StepContext::new(retailer, transport),
            pipeline: lookup_pipeline(),
        }
    }

    /// Creates a client that uses the context's transport.
    pub fn from_context(retailer: Arc<dyn Retailer>, ctx: &FetchContext) -> Self {
        Self::new(retailer, Arc::clone(&ctx.transport))
    }

    /// Replaces the pipeline.
    #[must_use]
    pub fn with_pipeline(mut self, pipeline: Pipeline<StepContext>) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Returns the retailer.
    pub fn retailer(&self) -> &dyn Retailer {
        self.context.retailer.as_ref()
    }

    /// Returns the retailer's display name.
    pub fn website_name(&self) -> &str {
        self.context.retailer.website_name()
    }

    /// Checks stock availability for a product.
    ///
    /// Never fails: if the pipeline panics or finishes without a result, the
    /// failure is logged and an out-of-stock record with no additional info
    /// is returned.
    #[instrument(skip(self), fields(store = %self.website_name()))]
    pub async fn check_stock(&self, sku: &str, color: &str, size: &str) -> ProductInfo {
        let record = WorkingRecord::new(sku, color, size);
        let run = AssertUnwindSafe(self.pipeline.execute(&self.context, record))
            .catch_unwind()
            .await;

        match run {
            Ok(WorkingRecord {
                result: Some(info), ..
            }) => {
                info!(in_stock = info.in_stock, "Stock check complete");
                info
            }
            Ok(record) => {
                error!(
                    sku,
                    error = record.error.as_deref().unwrap_or("pipeline produced no result"),
                    "Error checking {} stock",
                    self.website_name()
                );
                ProductInfo::unavailable(sku, color, size)
            }
            Err(panic) => {
                error!(
                    sku,
                    error = %panic_message(panic.as_ref()),
                    "Error checking {} stock",
                    self.website_name()
                );
                debug!("Falling back to unavailable product info");
                ProductInfo::unavailable(sku, color, size)
            }
        }
    }
}

/// Extracts a printable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::record::Headers;
    use crate::steps::{ExtractStockInfo, MakeRequest, ParseResponse, PrepareRequest};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    struct MockRetailer;

    impl Retailer for MockRetailer {
        fn website_name(&self) -> &str {
            "Mock Website"
        }

        fn base_url(&self) -> &str {
            "https://mock.com"
        }

        fn product_url(&self, sku: &str) -> String {
            format!("{}/product/{sku}", self.base_url())
        }

        fn default_headers(&self) -> Headers {
            Headers::from([("User-Agent".to_string(), "Mock".to_string())])
        }

        fn parse_response(&self, mut record: WorkingRecord) -> WorkingRecord {
            if record.has_error() {
                record.parsed_data = Some(serde_json::Map::new());
            }
            record
        }

        fn extract_stock_info(&self, mut record: WorkingRecord) -> WorkingRecord {
            record.in_stock = Some(!record.has_error());
            record
        }
    }

    struct StaticTransport(Value);

    #[async_trait]
    impl Transport for StaticTransport {
        async fn get_json(&self, _url: &str, _headers: &Headers) -> Result<Value, FetchError> {
            Ok(self.0.clone())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn get_json(&self, url: &str, _headers: &Headers) -> Result<Value, FetchError> {
            Err(FetchError::Status {
                status: 503,
                url: url.to_string(),
            })
        }
    }

    struct PanickingTransport;

    #[async_trait]
    impl Transport for PanickingTransport {
        async fn get_json(&self, _url: &str, _headers: &Headers) -> Result<Value, FetchError> {
            panic!("transport exploded");
        }
    }

    fn client(transport: impl Transport + 'static) -> RetailerClient {
        RetailerClient::new(Arc::new(MockRetailer), Arc::new(transport))
    }

    #[tokio::test]
    async fn test_check_stock_success() {
        let result = client(StaticTransport(json!({"test": "data"})))
            .check_stock("12345", "red", "M")
            .await;

        assert_eq!(result.sku, "12345");
        assert_eq!(result.color, "red");
        assert_eq!(result.size, "M");
        assert!(result.in_stock);
    }

    #[tokio::test]
    async fn test_check_stock_transport_error() {
        let result = client(FailingTransport).check_stock("12345", "red", "M").await;

        assert_eq!(result.sku, "12345");
        assert!(!result.in_stock);
        assert!(result.additional_info.is_none());
    }

    #[tokio::test]
    async fn test_check_stock_catches_panic() {
        let result = client(PanickingTransport)
            .check_stock("12345", "red", "M")
            .await;

        assert_eq!(result, ProductInfo::unavailable("12345", "red", "M"));
    }

    #[tokio::test]
    async fn test_check_stock_without_finalize_step() {
        let pipeline = Pipeline::new()
            .then(PrepareRequest)
            .then(MakeRequest)
            .then(ParseResponse)
            .then(ExtractStockInfo);
        let client = client(StaticTransport(json!({}))).with_pipeline(pipeline);

        let result = client.check_stock("12345", "red", "M").await;
        assert_eq!(result, ProductInfo::unavailable("12345", "red", "M"));
    }

    #[tokio::test]
    async fn test_check_stock_panicking_step() {
        let pipeline = lookup_pipeline().then_fn("explode", |_: &StepContext, _r: WorkingRecord| {
            panic!("step exploded")
        });
        let client = client(StaticTransport(json!({}))).with_pipeline(pipeline);

        let result = client.check_stock("12345", "red", "M").await;
        assert!(!result.in_stock);
        assert!(result.additional_info.is_none());
    }

    #[test]
    fn test_website_name() {
        let client = client(FailingTransport);
        assert_eq!(client.website_name(), "Mock Website");
        assert_eq!(client.retailer().base_url(), "https://mock.com");
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");

        let payload: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(payload.as_ref()), "bang");

        let payload: Box<dyn Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
