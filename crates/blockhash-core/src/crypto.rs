//! Digest algorithms: SHA-256 (default) and Blake3.
//!
//! Both are stateless. Each call hashes its input from a fresh state, so
//! nothing is shared between records or threads.

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};
use crate::types::{Digest, DIGEST_LEN};

/// The 256-bit hash function used to produce a digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// SHA-256 (FIPS 180-4).
    #[default]
    Sha256,
    /// Blake3 with its default 32-byte output.
    Blake3,
}

impl DigestAlgorithm {
    /// Hash `data` with this algorithm.
    pub fn digest(self, data: &[u8]) -> Result<Digest> {
        let bytes: [u8; DIGEST_LEN] = match self {
            DigestAlgorithm::Sha256 => {
                let mut hasher = Sha256::new();
                hasher.update(data);
                hasher.finalize().into()
            }
            DigestAlgorithm::Blake3 => *blake3::hash(data).as_bytes(),
        };
        Ok(Digest(bytes))
    }

    /// Stable lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "sha256",
            DigestAlgorithm::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            "blake3" => Ok(DigestAlgorithm::Blake3),
            other => Err(CoreError::InvalidInput(format!(
                "unknown digest algorithm: {}",
                other
            ))),
        }
    }
}
