//! Transaction records.
//!
//! A transaction is opaque text: nothing inside it is interpreted, it is only
//! encoded as UTF-8 and hashed.

use crate::hash::{hash_str, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A transaction record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transaction(String);

impl Transaction {
    /// Create a transaction from any text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Create the reward record credited to a miner.
    pub fn reward(miner: &str, amount: u64, unit: &str) -> Self {
        Self(format!("Reward: {} received {} {}", miner, amount, unit))
    }

    /// The record text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The UTF-8 encoding that gets hashed.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Leaf digest of this transaction.
    pub fn hash(&self) -> Digest {
        hash_str(&self.0)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Transaction {
    fn from(text: &str) -> Self {
        Self(text.to_owned())
    }
}

impl From<String> for Transaction {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for Transaction {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
