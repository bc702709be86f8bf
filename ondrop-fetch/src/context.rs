//! Fetch context providing access to the transport.
//!
//! The context is built once per process and handed to every retailer
//! client. It owns the HTTP session so lookups share its connection pool.

use std::sync::Arc;
use std::time::Duration;

use crate::error::FetchError;
use crate::host::http::{HttpClient, Transport};

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent when a retailer does not override it.
const USER_AGENT: &str = concat!("OnDrop/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Fetch Settings
// ============================================================================

/// Settings for fetch operations.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Timeout for a single request.
    pub timeout: Duration,
    /// Fallback user agent.
    pub user_agent: String,
    /// Domains requests may go to. `None` allows all.
    pub allowed_domains: Option<Vec<String>>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
            allowed_domains: None,
        }
    }
}

impl FetchSettings {
    /// Creates settings with custom timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ============================================================================
// Fetch Context
// ============================================================================

/// Context handed to retailer clients, giving access to the transport.
pub struct FetchContext {
    /// Transport used by the request step.
    pub transport: Arc<dyn Transport>,
    /// Fetch settings.
    pub settings: FetchSettings,
}

impl FetchContext {
    /// Creates a context with an HTTP client built from default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_settings(FetchSettings::default())
    }

    /// Creates a context with an HTTP client built from the given settings.
    pub fn with_settings(settings: FetchSettings) -> Result<Self, FetchError> {
        let http = HttpClient::with_settings(&settings)?;
        Ok(Self {
            transport: Arc::new(http),
            settings,
        })
    }

    /// Creates a context around an existing transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            settings: FetchSettings::default(),
        }
    }

    /// Creates a builder for customizing the context.
    pub fn builder() -> FetchContextBuilder {
        FetchContextBuilder::new()
    }
}

// ============================================================================
// Fetch Context Builder
// ============================================================================

/// Builder for creating a customized [`FetchContext`].
#[derive(Default)]
pub struct FetchContextBuilder {
    settings: FetchSettings,
    transport: Option<Arc<dyn Transport>>,
}

impl FetchContextBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = timeout;
        self
    }

    /// Sets the fallback user agent.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.settings.user_agent = user_agent.into();
        self
    }

    /// Restricts requests to the given domains (and their subdomains).
    #[must_use]
    pub fn allowed_domains(mut self, domains: Vec<String>) -> Self {
        self.settings.allowed_domains = Some(domains);
        self
    }

    /// Uses a custom transport instead of building an HTTP client.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Builds the context.
    pub fn build(self) -> Result<FetchContext, FetchError> {
        match self.transport {
            Some(transport) => Ok(FetchContext {
                transport,
                settings: self.settings,
            }),
            None => FetchContext::with_settings(self.settings),
        }
    }
}
