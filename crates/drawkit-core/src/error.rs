//! Error handling for DrawKit.
//!
//! The editing core has a deliberately small, purely domain-level error
//! surface: no I/O, no external resources. Degenerate geometry (zero-length
//! lines, zero-area ellipses) is a defined outcome of the affected
//! operations, never an error.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Design-layer error type.
///
/// Surfaced to the UI collaborator for user notification; never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignError {
    /// A transform was requested on a variant that does not support it.
    #[error("{operation} is not supported for {shape}")]
    UnsupportedOperation {
        /// The shape variant name.
        shape: String,
        /// The requested operation name.
        operation: String,
    },

    /// A selection-scoped operation was invoked with nothing selected.
    #[error("no shape is selected")]
    NoSelection,
}

/// Result type using [`DesignError`].
pub type Result<T> = std::result::Result<T, DesignError>;
