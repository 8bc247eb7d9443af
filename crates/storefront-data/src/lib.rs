//! HTTP client utilities for the storefront item service.
//!
//! Provides a small builder API for outbound requests with automatic JSON
//! handling. The bytes are moved by a [`Transport`]: Spin's outbound HTTP
//! inside a component, a blocking `reqwest` client on native targets, or
//! anything a test wants to inject.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::FetchClient;
//!
//! let client = FetchClient::new().with_base_url("https://api.example.com");
//!
//! let response = client.get("/Item/sku-1").send()?;
//! if response.is_not_found() {
//!     // ...
//! }
//! let item: serde_json::Value = response.error_for_status()?.json()?;
//! ```

mod error;
mod request;
mod response;
mod transport;

pub use error::FetchError;
pub use request::Request;
pub use response::Response;
#[cfg(not(target_arch = "wasm32"))]
pub use transport::NativeTransport;
#[cfg(target_arch = "wasm32")]
pub use transport::SpinTransport;
pub use transport::{default_transport, Transport};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for making outbound requests.
#[derive(Clone)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
    timeout: Option<Duration>,
    transport: Arc<dyn Transport>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .field("default_headers", &self.default_headers)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a client using the target's default transport.
    pub fn new() -> Self {
        Self::with_transport(default_transport())
    }

    /// Create a client that sends through `transport`.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
            timeout: None,
            transport,
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Apply a deadline to every request sent by this client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a GET request. Relative paths are joined onto the base URL.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder<'_> {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
            }
            _ => url,
        };

        let mut request = Request::get(full_url);
        for (key, value) in &self.default_headers {
            request = request.header(key.clone(), value.clone());
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        ClientRequestBuilder {
            client: self,
            request,
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder<'a> {
    client: &'a FetchClient,
    request: Request,
}

impl ClientRequestBuilder<'_> {
    /// Send the request and return the response.
    ///
    /// Non-2xx responses are returned as `Ok`; use
    /// [`Response::error_for_status`] to turn them into errors.
    pub fn send(self) -> Result<Response, FetchError> {
        tracing::debug!(url = self.request.url(), "sending request");
        let response = self.client.transport.send(&self.request)?;
        tracing::debug!(status = response.status, url = self.request.url(), "received response");
        Ok(response)
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Response, Transport};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records requests and answers with a canned response.
    struct Recorder {
        seen: Mutex<Vec<Request>>,
        status: u16,
    }

    impl Transport for Recorder {
        fn send(&self, request: &Request) -> Result<Response, FetchError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(Response::new(self.status, HashMap::new(), b"[]".to_vec()))
        }
    }

    fn recorder(status: u16) -> Arc<Recorder> {
        Arc::new(Recorder {
            seen: Mutex::new(Vec::new()),
            status,
        })
    }

    #[test]
    fn test_base_url_joining() {
        let transport = recorder(200);
        let client = FetchClient::with_transport(transport.clone())
            .with_base_url("https://api.example.com/");

        client.get("/Item/sku-1").send().unwrap();
        client.get("Item/branch/main").send().unwrap();
        client.get("https://other.example.com/x").send().unwrap();

        let seen = transport.seen.lock().unwrap();
        let urls: Vec<_> = seen.iter().map(|r| r.url().to_string()).collect();
        assert_eq!(
            urls,
            vec![
                "https://api.example.com/Item/sku-1",
                "https://api.example.com/Item/branch/main",
                "https://other.example.com/x",
            ]
        );
    }

    #[test]
    fn test_default_headers_and_timeout_are_applied() {
        let transport = recorder(200);
        let client = FetchClient::with_transport(transport.clone())
            .with_default_header("Accept", "application/json")
            .with_timeout(Duration::from_secs(5));

        client.get("/x").send().unwrap();

        let seen = transport.seen.lock().unwrap();
        let req = &seen[0];
        assert!(req.headers().any(|(k, v)| k == "Accept" && v == "application/json"));
        assert_eq!(req.timeout_duration(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_non_success_is_returned_not_raised() {
        let client = FetchClient::with_transport(recorder(404));
        let response = client.get("/Item/missing").send().unwrap();
        assert!(response.is_not_found());
        assert!(response.error_for_status().is_err());
    }
}
