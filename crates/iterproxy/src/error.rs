//! Error types for the iterproxy crate.

use thiserror::Error;

/// Errors that can occur while configuring or consuming a proxy.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProxyError {
    /// The filtered source has no more items to yield.
    #[error("iterator is exhausted")]
    Exhausted,

    /// A filter was added after consumption started.
    #[error("cannot add filters once iteration has started")]
    Frozen,
}

/// Result type for proxy operations.
pub type Result<T> = std::result::Result<T, ProxyError>;
