//! Request handling around the mutascan scanner.
//!
//! This crate turns a raw JSON request body into a classified response
//! without tying itself to any HTTP framework. Every request ends in one of
//! these outcomes, each with a status code and a `{"data", "error"}` JSON
//! envelope:
//!
//! - mutant: `200`, `{"data": "DNA is a mutant.", "error": null}`
//! - not mutant: `403`, `{"data": null, "error": "DNA is not a mutant."}`
//! - malformed request: `400`, `{"data": null, "error": "<validation messages>"}`
//! - internal failure: `500`, `{"data": null, "error": "<message>"}`
//!
//! # Modules
//!
//! - [`error`]: [`ApiError`] and its status mapping
//! - [`request`]: [`DnaRequest`] shape validation
//! - [`response`]: [`ApiResponse`], [`ResponseClass`] and the JSON envelope
//! - [`handler`]: [`Handler`], [`Verdict`] and [`classify`]
//!
//! # Example
//!
//! ```
//! let body = r#"{"dna": ["ATGCGA","CAGTGC","TTATGT","AGAAGG","CCCCTA","TCACTG"]}"#;
//! let response = mutascan_api::handle(body);
//! assert_eq!(response.status, 200);
//!
//! let v: serde_json::Value = serde_json::from_str(&response.body).unwrap();
//! assert_eq!(v["data"], "DNA is a mutant.");
//! assert!(v["error"].is_null());
//! ```

pub mod error;
pub mod handler;
pub mod request;
pub mod response;

pub use error::ApiError;
pub use handler::{classify, handle, Handler, HandlerConfig, Verdict};
pub use request::{parse_request, DnaRequest};
pub use response::{ApiResponse, Envelope, ResponseClass};
