// crates/checksums/src/registry.rs

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{ChecksumError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Md4,
    Md5,
    Sha1,
    Xxh64,
}

impl DigestAlgorithm {
    pub const fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Md4 => "md4",
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Xxh64 => "xxh64",
        }
    }

    /// Size in bytes of the finished digest.
    pub const fn output_size(self) -> usize {
        match self {
            DigestAlgorithm::Md4 | DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Xxh64 => 8,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const ALIASES: &[(&str, DigestAlgorithm)] = &[
    ("md4", DigestAlgorithm::Md4),
    ("MD4", DigestAlgorithm::Md4),
    ("md5", DigestAlgorithm::Md5),
    ("MD5", DigestAlgorithm::Md5),
    ("sha1", DigestAlgorithm::Sha1),
    ("SHA1", DigestAlgorithm::Sha1),
    ("xxh64", DigestAlgorithm::Xxh64),
];

/// Table of digest algorithms addressable by name.
///
/// Loading the registry is the library's start-up step; every
/// [`AlgorithmHandle`] borrows from it, so no handle can outlive the
/// registry that produced it.
#[derive(Debug)]
pub struct DigestRegistry {
    by_name: BTreeMap<&'static str, DigestAlgorithm>,
}

impl DigestRegistry {
    pub fn load() -> Self {
        Self {
            by_name: ALIASES.iter().copied().collect(),
        }
    }

    /// Looks up an algorithm by its exact, case-sensitive name.
    pub fn digest_by_name(&self, name: &str) -> Result<AlgorithmHandle<'_>> {
        self.by_name
            .get_key_value(name)
            .map(|(name, alg)| AlgorithmHandle {
                registered_as: *name,
                algorithm: alg,
            })
            .ok_or_else(|| ChecksumError::AlgorithmNotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_name.keys().copied()
    }
}

impl Default for DigestRegistry {
    fn default() -> Self {
        Self::load()
    }
}

/// Borrowed reference to a registered algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlgorithmHandle<'r> {
    registered_as: &'r str,
    algorithm: &'r DigestAlgorithm,
}

impl AlgorithmHandle<'_> {
    pub fn algorithm(&self) -> DigestAlgorithm {
        *self.algorithm
    }

    /// The name the handle was looked up under.
    pub fn registered_as(&self) -> &str {
        self.registered_as
    }

    pub fn output_size(&self) -> usize {
        self.algorithm.output_size()
    }
}
