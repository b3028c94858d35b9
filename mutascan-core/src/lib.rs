//! Shared primitives for the mutascan workspace.
//!
//! - **Error types**: [`ScanError`] and [`Result`] for structured error handling
//! - **Traits**: [`Summarizable`] for one-line descriptions of domain values

pub mod error;
pub mod traits;

pub use error::{Result, ScanError};
pub use traits::*;
