//! Core trait definitions shared across crates.

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display or logging.
    fn summary(&self) -> String;
}
