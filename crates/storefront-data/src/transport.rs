//! Pluggable transports that actually move bytes.
//!
//! Inside a Spin component outbound HTTP goes through the host; on native
//! targets a blocking `reqwest` client is used. Tests inject their own.

use crate::{FetchError, Request, Response};
use std::sync::Arc;

/// Something that can execute a [`Request`].
pub trait Transport: Send + Sync {
    fn send(&self, request: &Request) -> Result<Response, FetchError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: &Request) -> Result<Response, FetchError> {
        (**self).send(request)
    }
}

/// The transport appropriate for the compilation target.
pub fn default_transport() -> Arc<dyn Transport> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(SpinTransport)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(NativeTransport::new())
    }
}

/// Outbound HTTP through the Spin host.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SpinTransport;

#[cfg(target_arch = "wasm32")]
impl Transport for SpinTransport {
    fn send(&self, request: &Request) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method, Request as SpinRequest, Response as SpinResponse};

        let mut builder = SpinRequest::builder();
        builder.method(Method::Get).uri(request.url());
        for (key, value) in request.headers() {
            builder.header(key, value);
        }
        let outgoing = builder.body(Vec::new()).build();

        let response: SpinResponse = spin_sdk::http::run(spin_sdk::http::send(outgoing))
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = *response.status();
        let headers = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
            .collect();

        Ok(Response::new(status, headers, response.into_body()))
    }
}

/// Blocking HTTP for native builds (CLI, tests against a live service).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct NativeTransport {
    client: reqwest::blocking::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl NativeTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Transport for NativeTransport {
    fn send(&self, request: &Request) -> Result<Response, FetchError> {
        let mut builder = self.client.get(request.url());
        for (key, value) in request.headers() {
            builder = builder.header(key, value);
        }
        if let Some(timeout) = request.timeout_duration() {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().map_err(map_reqwest_error)?.to_vec();

        Ok(Response::new(status, headers, body))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_reqwest_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::RequestError(e.to_string())
    }
}
