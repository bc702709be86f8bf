//! HTTP transport with tracing and domain allowlist.
//!
//! This module provides:
//! - [`Transport`] - The seam the request step talks to
//! - [`HttpClient`] - The `reqwest`-backed implementation
//!
//! The underlying `reqwest::Client` keeps a connection pool; clones of
//! [`HttpClient`] share it.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::context::FetchSettings;
use crate::error::FetchError;
use crate::record::Headers;

// ============================================================================
// Transport Trait
// ============================================================================

/// Issues a GET request and decodes the JSON body.
///
/// Implementations must treat non-2xx statuses as errors.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches `url` with the given headers and returns the decoded body.
    async fn get_json(&self, url: &str, headers: &Headers) -> Result<Value, FetchError>;
}

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client wrapper with tracing and domain allowlist.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    allowed_domains: Option<Vec<String>>,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_settings(&FetchSettings::default())
    }

    /// Creates a new HTTP client from fetch settings.
    pub fn with_settings(settings: &FetchSettings) -> Result<Self, FetchError> {
        let inner = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Self {
            inner,
            allowed_domains: settings.allowed_domains.clone(),
        })
    }

    /// Checks the URL parses and its domain is allowed.
    fn check_url(&self, url: &str) -> Result<(), FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        let Some(ref allowed) = self.allowed_domains else {
            return Ok(()); // No restrictions
        };

        let host = parsed
            .host_str()
            .ok_or_else(|| FetchError::InvalidUrl("No host in URL".to_string()))?;

        let allowed = allowed
            .iter()
            .any(|domain| host == domain || host.ends_with(&format!(".{domain}")));

        if allowed {
            Ok(())
        } else {
            Err(FetchError::DomainNotAllowed(host.to_string()))
        }
    }

    /// Performs a GET request with custom headers.
    #[instrument(skip_all, fields(url = %url))]
    pub async fn get_with_headers(
        &self,
        url: &str,
        headers: HeaderMap,
    ) -> Result<Response, FetchError> {
        self.check_url(url)?;
        debug!("GET request with headers");

        let response = self.inner.get(url).headers(headers).send().await?;
        debug!(status = %response.status(), "Response received");
        Ok(response)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get_json(&self, url: &str, headers: &Headers) -> Result<Value, FetchError> {
        let response = self.get_with_headers(url, header_map(headers)?).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Converts a header mapping into a `reqwest` header map.
pub fn header_map(headers: &Headers) -> Result<HeaderMap, FetchError> {
    let mut map = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers {
        let invalid = |reason: String| FetchError::InvalidHeader {
            name: name.clone(),
            reason,
        };
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
        map.insert(header_name, header_value);
    }

    Ok(map)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves exactly one canned HTTP response on a local port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let mut read = Vec::new();
            while !read.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                read.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}/api/products/ABC123/inventory")
    }

    fn settings_with_domains(domains: &[&str]) -> FetchSettings {
        FetchSettings {
            allowed_domains: Some(domains.iter().map(|d| (*d).to_string()).collect()),
            ..FetchSettings::default()
        }
    }

    #[test]
    fn test_domain_allowlist() {
        let settings = settings_with_domains(&["thenorthface.com"]);
        let client = HttpClient::with_settings(&settings).unwrap();

        assert!(client.check_url("https://www.thenorthface.com/api").is_ok());
        assert!(client.check_url("https://thenorthface.com/api").is_ok());
        assert!(matches!(
            client.check_url("https://evil.com/steal"),
            Err(FetchError::DomainNotAllowed(_))
        ));
    }

    #[test]
    fn test_no_domain_restrictions() {
        let client = HttpClient::new().unwrap();
        assert!(client.check_url("https://any.domain.com").is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = HttpClient::new().unwrap();
        assert!(matches!(
            client.check_url("not-a-valid-url"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_header_map() {
        let headers = Headers::from([
            ("Accept".to_string(), "application/json".to_string()),
            ("siteid".to_string(), "TNF-US".to_string()),
        ]);
        let map = header_map(&headers).unwrap();
        assert_eq!(map.get("accept").unwrap(), "application/json");
        assert_eq!(map.get("siteid").unwrap(), "TNF-US");
    }

    #[test]
    fn test_header_map_rejects_invalid_name() {
        let headers = Headers::from([("bad header".to_string(), "x".to_string())]);
        assert!(matches!(
            header_map(&headers),
            Err(FetchError::InvalidHeader { .. })
        ));
    }

    #[tokio::test]
    async fn test_get_json_success() {
        let url = serve_once("200 OK", r#"{"test": "data"}"#).await;
        let client = HttpClient::new().unwrap();

        let body = client.get_json(&url, &Headers::new()).await.unwrap();
        assert_eq!(body["test"], "data");
    }

    #[tokio::test]
    async fn test_get_json_non_success_status() {
        let url = serve_once("404 Not Found", r#"{"error": "missing"}"#).await;
        let client = HttpClient::new().unwrap();

        let err = client.get_json(&url, &Headers::new()).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_get_json_invalid_body() {
        let url = serve_once("200 OK", "not json").await;
        let client = HttpClient::new().unwrap();

        let err = client.get_json(&url, &Headers::new()).await.unwrap_err();
        assert!(matches!(err, FetchError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
