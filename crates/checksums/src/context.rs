// crates/checksums/src/context.rs

use md4::{Digest, Md4};
use md5::Md5;
use sha1::Sha1;
use xxhash_rust::xxh64::Xxh64;

use crate::error::{ChecksumError, Result};
use crate::registry::{AlgorithmHandle, DigestAlgorithm};

/// Largest digest any registered algorithm produces.
pub const MAX_DIGEST_SIZE: usize = 64;

trait DigestEngine: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self: Box<Self>) -> Vec<u8>;
}

struct Md4Engine(Md4);

impl DigestEngine for Md4Engine {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.finalize().to_vec()
    }
}

struct Md5Engine(Md5);

impl DigestEngine for Md5Engine {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.finalize().to_vec()
    }
}

struct Sha1Engine(Sha1);

impl DigestEngine for Sha1Engine {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.finalize().to_vec()
    }
}

struct Xxh64Engine(Xxh64);

impl DigestEngine for Xxh64Engine {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.digest().to_le_bytes().to_vec()
    }
}

fn select_engine(alg: DigestAlgorithm) -> Box<dyn DigestEngine> {
    match alg {
        DigestAlgorithm::Md4 => Box::new(Md4Engine(Md4::new())),
        DigestAlgorithm::Md5 => Box::new(Md5Engine(Md5::new())),
        DigestAlgorithm::Sha1 => Box::new(Sha1Engine(Sha1::new())),
        DigestAlgorithm::Xxh64 => Box::new(Xxh64Engine(Xxh64::new(0))),
    }
}

/// In-progress digest computation.
///
/// A context is fed any number of chunks and then consumed by
/// [`DigestContext::finalize`]; the chunks are hashed as if concatenated
/// in the order they were supplied. Dropping the context releases it
/// whether or not it was finalized.
pub struct DigestContext {
    algorithm: DigestAlgorithm,
    engine: Box<dyn DigestEngine>,
    fed: u64,
}

impl DigestContext {
    pub fn new(handle: AlgorithmHandle<'_>) -> Self {
        let algorithm = handle.algorithm();
        Self {
            algorithm,
            engine: select_engine(algorithm),
            fed: 0,
        }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Total number of bytes fed since creation or the last reset.
    pub fn bytes_fed(&self) -> u64 {
        self.fed
    }

    pub fn update(&mut self, data: &[u8]) {
        self.engine.update(data);
        self.fed += data.len() as u64;
    }

    /// Discards any fed input and starts over with the same algorithm.
    pub fn reset(&mut self) {
        self.engine = select_engine(self.algorithm);
        self.fed = 0;
    }

    pub fn finalize(self) -> Result<DigestOutput> {
        DigestOutput::from_slice(&self.engine.finalize())
    }
}

impl std::fmt::Debug for DigestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigestContext")
            .field("algorithm", &self.algorithm)
            .field("fed", &self.fed)
            .finish_non_exhaustive()
    }
}

/// Fixed-capacity digest value together with its true length.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DigestOutput {
    buf: [u8; MAX_DIGEST_SIZE],
    len: usize,
}

impl DigestOutput {
    fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > MAX_DIGEST_SIZE {
            return Err(ChecksumError::OutputOverflow {
                len: bytes.len(),
                capacity: MAX_DIGEST_SIZE,
            });
        }
        let mut buf = [0u8; MAX_DIGEST_SIZE];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            buf,
            len: bytes.len(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        MAX_DIGEST_SIZE
    }
}

impl AsRef<[u8]> for DigestOutput {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Debug for DigestOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DigestOutput")
            .field(&self.as_bytes())
            .finish()
    }
}

/// Hashes `chunks` in order with a fresh context.
pub fn compute_digest(handle: AlgorithmHandle<'_>, chunks: &[&[u8]]) -> Result<DigestOutput> {
    let mut ctx = DigestContext::new(handle);
    for chunk in chunks {
        ctx.update(chunk);
    }
    ctx.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DigestRegistry;

    const FIRST: &[u8] = b"Test Message\n";
    const SECOND: &[u8] = b"Hello World\n";

    #[test]
    fn chunks_hash_as_concatenation() {
        let registry = DigestRegistry::load();
        let md5 = registry.digest_by_name("md5").unwrap();
        let split = compute_digest(md5, &[FIRST, SECOND]).unwrap();
        let whole = compute_digest(md5, &[&b"Test Message\nHello World\n"[..]]).unwrap();
        assert_eq!(split, whole);
        assert_eq!(
            hex::encode(split.as_bytes()),
            "ce73931d2b3da6e60bf18af27494c6cd"
        );
    }

    #[test]
    fn chunk_order_matters() {
        let registry = DigestRegistry::load();
        let md5 = registry.digest_by_name("md5").unwrap();
        let forward = compute_digest(md5, &[FIRST, SECOND]).unwrap();
        let swapped = compute_digest(md5, &[SECOND, FIRST]).unwrap();
        assert_ne!(forward, swapped);
        assert_eq!(
            hex::encode(swapped.as_bytes()),
            "60833b315d7561eb19d220cb271430de"
        );
    }

    #[test]
    fn reset_discards_input() {
        let registry = DigestRegistry::load();
        let md5 = registry.digest_by_name("md5").unwrap();
        let mut ctx = DigestContext::new(md5);
        ctx.update(b"discarded");
        assert_eq!(ctx.bytes_fed(), 9);
        ctx.reset();
        assert_eq!(ctx.bytes_fed(), 0);
        let out = ctx.finalize().unwrap();
        assert_eq!(
            hex::encode(out.as_bytes()),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn output_length_matches_algorithm() {
        let registry = DigestRegistry::load();
        for name in ["md4", "md5", "sha1", "xxh64"] {
            let handle = registry.digest_by_name(name).unwrap();
            let out = compute_digest(handle, &[&b"hello world"[..]]).unwrap();
            assert_eq!(out.len(), handle.output_size(), "{name}");
            assert!(out.len() <= out.capacity());
            assert!(!out.is_empty());
        }
    }

    #[test]
    fn oversized_output_is_rejected() {
        let err = DigestOutput::from_slice(&[0u8; MAX_DIGEST_SIZE + 1]).unwrap_err();
        assert_eq!(
            err,
            ChecksumError::OutputOverflow {
                len: MAX_DIGEST_SIZE + 1,
                capacity: MAX_DIGEST_SIZE,
            }
        );
    }
}
