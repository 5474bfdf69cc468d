// crates/checksums/src/error.rs
use thiserror::Error;

/// Errors reported by the digest library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChecksumError {
    /// The requested algorithm name is not registered.
    #[error("unknown message digest: {0:?}")]
    AlgorithmNotFound(String),
    /// The primitive produced more bytes than the output buffer can hold.
    #[error("digest output of {len} bytes exceeds buffer capacity of {capacity}")]
    OutputOverflow { len: usize, capacity: usize },
}

/// Result type for digest operations.
pub type Result<T> = std::result::Result<T, ChecksumError>;
