//! Error types for lexfair

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or solving a network
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed input data (rejected before any solving happens)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Lookup of a link or flow that does not exist or is no longer active
    #[error("unknown {kind} id {id}")]
    UnknownId {
        /// Entity kind ("link" or "flow")
        kind: &'static str,
        /// The offending identifier
        id: u32,
    },

    /// The single-link allocator failed to converge
    #[error("allocator did not converge after {iterations} passes")]
    NoConvergence {
        /// Passes completed before giving up
        iterations: usize,
    },

    /// Internal invariant violated (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an unknown-link lookup error
    pub fn unknown_link(id: u32) -> Self {
        Self::UnknownId { kind: "link", id }
    }

    /// Create an unknown-flow lookup error
    pub fn unknown_flow(id: u32) -> Self {
        Self::UnknownId { kind: "flow", id }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
