//! SHA-256 hashing utilities for the ledger.
//!
//! Digests are carried around as lowercase hex text. Every combination step
//! (merkle parents, block headers) hashes the *text* of its inputs, so a digest
//! is never decoded back to bytes.

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fmt;
use thiserror::Error;

/// Number of hex characters in a rendered SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Text of the genesis block's previous-hash field.
pub const GENESIS_PARENT: &str = "0";

/// Errors produced when parsing digest text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DigestError {
    #[error("digest must be 64 hex characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid character {0:?} in digest (expected lowercase hex)")]
    InvalidCharacter(char),
}

pub type Result<T> = std::result::Result<T, DigestError>;

/// A 256-bit digest rendered as 64 lowercase hex characters.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digest(String);

impl Digest {
    /// Parse digest text, rejecting anything that is not 64 lowercase hex chars.
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() != DIGEST_HEX_LEN {
            return Err(DigestError::InvalidLength(s.len()));
        }
        if let Some(c) = s.chars().find(|c| !matches!(c, '0'..='9' | 'a'..='f')) {
            return Err(DigestError::InvalidCharacter(c));
        }
        Ok(Self(s.to_owned()))
    }

    /// The hex text of this digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Shortened form for log lines and listings.
    pub fn short(&self) -> &str {
        &self.0[..16]
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", &self.0[..8])
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Digest {
    type Error = DigestError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Digest> for String {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

/// Hash arbitrary bytes with SHA-256.
pub fn hash(data: &[u8]) -> Digest {
    Digest(hex::encode(Sha256::digest(data)))
}

/// Hash UTF-8 text.
pub fn hash_str(text: &str) -> Digest {
    hash(text.as_bytes())
}

/// Hash the text concatenation `left || right`.
///
/// Used for merkle parents (two digests) and block headers (parent text and
/// merkle root).
pub fn hash_concat(left: &str, right: &str) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    Digest(hex::encode(hasher.finalize()))
}

/// The previous-hash field of a block.
///
/// The genesis block has no predecessor and carries the sentinel text `"0"`;
/// every other block points at its parent's digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ParentHash {
    Genesis,
    Block(Digest),
}

impl ParentHash {
    /// Text fed into the block header hash.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Genesis => GENESIS_PARENT,
            Self::Block(digest) => digest.as_str(),
        }
    }

    pub fn is_genesis(&self) -> bool {
        matches!(self, Self::Genesis)
    }

    /// The parent digest, if this is not the genesis sentinel.
    pub fn digest(&self) -> Option<&Digest> {
        match self {
            Self::Genesis => None,
            Self::Block(digest) => Some(digest),
        }
    }
}

impl fmt::Display for ParentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Digest> for ParentHash {
    fn from(digest: Digest) -> Self {
        Self::Block(digest)
    }
}

impl TryFrom<String> for ParentHash {
    type Error = DigestError;

    fn try_from(s: String) -> Result<Self> {
        if s == GENESIS_PARENT {
            Ok(Self::Genesis)
        } else {
            Digest::try_from(s).map(Self::Block)
        }
    }
}

impl From<ParentHash> for String {
    fn from(parent: ParentHash) -> Self {
        match parent {
            ParentHash::Genesis => GENESIS_PARENT.to_owned(),
            ParentHash::Block(digest) => digest.into(),
        }
    }
}
