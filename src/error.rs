//! Error types for the virtual API.
//!
//! Distinguishes simulated API failures (the intended, caller-triggerable
//! outcome) from contract violations (programmer mistakes upstream of the
//! engine).

use crate::schema::HttpMethod;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A simulated API failure.
///
/// Doubles as the error descriptor declared in a schema and as the error
/// value raised when a call selects it; `message`, `code`, and
/// `custom_code` reach the caller exactly as declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message} (code {code})")]
pub struct ApiError {
    /// Human-readable error message
    pub message: String,

    /// HTTP-style status code
    pub code: u16,

    /// Application-specific secondary code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<i64>,
}

/// Everything a simulated call can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VirtualApiError {
    /// The simulated API error forced via `use_error_idx`.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The schema declares no entry for the requested endpoint/verb pair.
    #[error("no schema entry for {method} {endpoint}")]
    UnknownRoute {
        /// Requested endpoint identifier
        endpoint: String,
        /// Requested HTTP verb
        method: HttpMethod,
    },

    /// The endpoint declares no candidate responses to select from.
    #[error("no candidate responses for {method} {endpoint}")]
    NoResponses {
        /// Requested endpoint identifier
        endpoint: String,
        /// Requested HTTP verb
        method: HttpMethod,
    },
}

impl VirtualApiError {
    /// Borrow the simulated API error, if that is what this is.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            VirtualApiError::Api(err) => Some(err),
            _ => None,
        }
    }
}
