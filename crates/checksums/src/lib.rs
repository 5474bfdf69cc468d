// crates/checksums/src/lib.rs
//! Named digest algorithms behind a small init/update/finalize API.
//!
//! The hashing itself comes from the RustCrypto `md4`, `md-5` and `sha1`
//! crates and from `xxhash-rust`; this crate resolves algorithms by name,
//! owns the digest context and stores the finished digest in a
//! fixed-capacity buffer.
#![deny(unsafe_op_in_unsafe_fn, rust_2018_idioms)]

mod context;
mod error;
mod registry;
mod render;

pub use context::{DigestContext, DigestOutput, MAX_DIGEST_SIZE, compute_digest};
pub use error::{ChecksumError, Result};
pub use registry::{AlgorithmHandle, DigestAlgorithm, DigestRegistry};
pub use render::{HexStyle, format_hex};

/// Human-readable version line for this library and its hash backends.
pub const VERSION_TEXT: &str = concat!(
    "checksums ",
    env!("CARGO_PKG_VERSION"),
    " (md4 0.10, md-5 0.10, sha1 0.10, xxhash-rust 0.8)"
);
