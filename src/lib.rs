//! Virtual API
//!
//! A mock HTTP client that simulates requests against a declarative schema
//! instead of a real transport. Client code can be developed and tested
//! before (or without) a real backend while still exercising async timing,
//! error paths, and response-shape variation.
//!
//! # Features
//!
//! - **Declarative Schema**: Endpoints, verbs, candidate responses, and
//!   candidate errors, in YAML or built programmatically
//! - **Latency Simulation**: Every call sleeps for a configurable delay
//!   (1500 ms by default) before resolving
//! - **Error Injection**: Force a declared error descriptor per call;
//!   forcing an error always wins over response selection
//! - **Response Variation**: Pin a specific candidate response or let a
//!   uniform random selector pick one
//! - **Deterministic Tests**: Inject a seeded selector to pin the
//!   selection sequence
//!
//! # Example Schema
//!
//! ```yaml
//! /users:
//!   GET:
//!     responses:
//!       - - id: 1
//!           name: Ada
//!       - []
//!   POST:
//!     body:
//!       name: string
//!     responses:
//!       - id: 2
//!         name: Grace
//!     errors:
//!       - message: bad request
//!         code: 400
//! ```
//!
//! # Example
//!
//! ```no_run
//! use virtual_api::{CallConfig, VirtualApi, VirtualApiError};
//!
//! # async fn demo() -> Result<(), VirtualApiError> {
//! let api = VirtualApi::from_yaml(
//!     "/users:\n  GET:\n    responses:\n      - [{id: 1, name: Ada}]\n",
//! )
//! .expect("schema parses");
//!
//! // Resolves with one of the candidate payloads after ~1500 ms.
//! let users = api.get("/users", CallConfig::default()).await?;
//! println!("{}", users.data);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod schema;
pub mod select;

pub use api::{CallConfig, MockResponse, VirtualApi, DEFAULT_REQUEST_TIMEOUT_MS};
pub use error::{ApiError, VirtualApiError};
pub use schema::{ApiSchema, EndpointDefinition, HttpMethod};
pub use select::{IndexSelector, RandomSelector, SeededSelector};
