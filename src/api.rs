//! The request-simulation engine.

use crate::error::VirtualApiError;
use crate::schema::{ApiSchema, HttpMethod};
use crate::select::{IndexSelector, RandomSelector};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Simulated latency applied when a call gives no override, in
/// milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 1500;

/// Per-call overrides. All fields are optional; `Default` means no
/// overrides.
#[derive(Debug, Clone, Default)]
pub struct CallConfig {
    /// Return this candidate response instead of a random one. Ignored
    /// when out of range.
    pub use_response_idx: Option<usize>,

    /// Raise the error descriptor at this index. Takes precedence over
    /// response selection; an out-of-range index falls through to
    /// response selection instead of failing.
    pub use_error_idx: Option<usize>,

    /// Simulated latency override in milliseconds.
    pub request_timeout_ms: Option<u64>,

    /// Request payload. Carried for caller-side contract checking only;
    /// the engine never validates it.
    pub body: Option<Value>,
}

/// A resolved simulated response.
///
/// Wraps the payload so later additions (headers, metadata) do not break
/// the contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockResponse {
    /// The selected candidate payload
    pub data: Value,
}

/// Mock HTTP client that simulates requests against an [`ApiSchema`].
///
/// Each call sleeps for the configured latency, then resolves to either a
/// forced [`crate::ApiError`] or a selected candidate response. The schema
/// is read-only after construction, so any number of calls may run
/// concurrently against a shared reference; completion order follows the
/// individual delays, not invocation order.
pub struct VirtualApi {
    schema: ApiSchema,
    selector: Box<dyn IndexSelector>,
}

impl VirtualApi {
    /// Create an engine using the default random selector.
    pub fn new(schema: ApiSchema) -> Self {
        Self::with_selector(schema, RandomSelector)
    }

    /// Create an engine with an injected selector, letting tests pin the
    /// selection sequence.
    pub fn with_selector(schema: ApiSchema, selector: impl IndexSelector + 'static) -> Self {
        info!(routes = schema.route_count(), "virtual API initialized");
        Self {
            schema,
            selector: Box::new(selector),
        }
    }

    /// Create an engine from a YAML schema string.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let schema: ApiSchema = serde_yaml::from_str(yaml)?;
        Ok(Self::new(schema))
    }

    /// Simulate a GET request against `endpoint`.
    pub async fn get(
        &self,
        endpoint: &str,
        config: CallConfig,
    ) -> Result<MockResponse, VirtualApiError> {
        self.handle_request(endpoint, HttpMethod::Get, config).await
    }

    /// Simulate a POST request against `endpoint`.
    pub async fn post(
        &self,
        endpoint: &str,
        config: CallConfig,
    ) -> Result<MockResponse, VirtualApiError> {
        self.handle_request(endpoint, HttpMethod::Post, config).await
    }

    /// Simulate a PUT request against `endpoint`.
    pub async fn put(
        &self,
        endpoint: &str,
        config: CallConfig,
    ) -> Result<MockResponse, VirtualApiError> {
        self.handle_request(endpoint, HttpMethod::Put, config).await
    }

    /// Simulate a PATCH request against `endpoint`.
    pub async fn patch(
        &self,
        endpoint: &str,
        config: CallConfig,
    ) -> Result<MockResponse, VirtualApiError> {
        self.handle_request(endpoint, HttpMethod::Patch, config).await
    }

    /// Simulate a DELETE request against `endpoint`.
    pub async fn delete(
        &self,
        endpoint: &str,
        config: CallConfig,
    ) -> Result<MockResponse, VirtualApiError> {
        self.handle_request(endpoint, HttpMethod::Delete, config).await
    }

    /// Resolve one simulated call. All five verb operations delegate here.
    async fn handle_request(
        &self,
        endpoint: &str,
        method: HttpMethod,
        config: CallConfig,
    ) -> Result<MockResponse, VirtualApiError> {
        // Latency applies unconditionally, error outcomes included.
        let delay_ms = config.request_timeout_ms.unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);
        debug!(%method, endpoint, delay_ms, "simulating request");
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        let definition = self.schema.endpoint(endpoint, method).ok_or_else(|| {
            VirtualApiError::UnknownRoute {
                endpoint: endpoint.to_string(),
                method,
            }
        })?;

        // A forced error wins over response selection.
        if let Some(idx) = config.use_error_idx {
            if let Some(error) = definition.errors.get(idx) {
                debug!(%method, endpoint, idx, code = error.code, "raising simulated error");
                return Err(error.clone().into());
            }
            // No descriptor at that index: fall through to response
            // selection rather than failing.
            debug!(%method, endpoint, idx, "no error descriptor at index, falling through");
        }

        let index = match config.use_response_idx {
            Some(idx) if idx < definition.responses.len() => idx,
            _ => self.selector.pick(definition.responses.len()),
        };

        let data = definition.responses.get(index).cloned().ok_or_else(|| {
            VirtualApiError::NoResponses {
                endpoint: endpoint.to_string(),
                method,
            }
        })?;

        Ok(MockResponse { data })
    }
}
