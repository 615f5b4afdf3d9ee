//! Merkle root construction over transaction records.
//!
//! Leaves are the SHA-256 digests of the transactions' UTF-8 text. Parents are
//! the digest of the concatenated hex text of their two children. An odd
//! transaction list is padded once, before hashing, by repeating its last
//! record.

use crate::hash::{hash, hash_concat, Digest};
use crate::transaction::Transaction;
use tracing::trace;

/// Root of an empty transaction list: the digest of the empty string.
pub fn empty_root() -> Digest {
    hash(b"")
}

/// Return the transactions padded to an even length.
pub fn pad_transactions(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut padded = transactions.to_vec();
    if padded.len() % 2 != 0 {
        if let Some(last) = padded.last().cloned() {
            padded.push(last);
        }
    }
    padded
}

/// Hash the (padded) leaf level.
fn leaf_level(transactions: &[Transaction]) -> Vec<Digest> {
    if transactions.is_empty() {
        return vec![empty_root()];
    }

    let mut leaves: Vec<Digest> = transactions.iter().map(Transaction::hash).collect();
    if leaves.len() % 2 != 0 {
        if let Some(last) = leaves.last().cloned() {
            leaves.push(last);
        }
    }
    leaves
}

/// Derive the parent level from consecutive pairs.
///
/// Leaf padding only makes the leaf level even; a deeper level can still be
/// odd (six leaves reduce to three parents). Such a level pairs its last
/// digest with itself so nothing is dropped.
fn next_level(level: &[Digest]) -> Vec<Digest> {
    if level.len() % 2 != 0 {
        trace!(len = level.len(), "odd merkle level, repeating last digest");
    }

    level
        .chunks(2)
        .map(|chunk| {
            if chunk.len() == 2 {
                hash_concat(chunk[0].as_str(), chunk[1].as_str())
            } else {
                hash_concat(chunk[0].as_str(), chunk[0].as_str())
            }
        })
        .collect()
}

/// Compute the merkle root of an ordered transaction list.
///
/// The root is order sensitive. An empty list yields [`empty_root`].
pub fn build_merkle_root(transactions: &[Transaction]) -> Digest {
    let mut level = leaf_level(transactions);

    while level.len() > 1 {
        level = next_level(&level);
    }

    level.pop().unwrap_or_else(empty_root)
}

/// Iterate the levels of the tree, leaves first.
pub fn merkle_levels(transactions: &[Transaction]) -> MerkleLevels {
    MerkleLevels {
        current: Some(leaf_level(transactions)),
        index: 0,
        started: false,
    }
}

/// Lazy iterator over `(level index, digests)` pairs.
///
/// Level 0 holds the leaf digests; the final item is the one-element root
/// level. Each level is only derived when it is requested.
#[derive(Debug, Clone)]
pub struct MerkleLevels {
    current: Option<Vec<Digest>>,
    index: usize,
    started: bool,
}

impl Iterator for MerkleLevels {
    type Item = (usize, Vec<Digest>);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return self.current.clone().map(|level| (0, level));
        }

        let current = self.current.as_ref()?;
        if current.len() <= 1 {
            self.current = None;
            return None;
        }

        let parent = next_level(current);
        self.index += 1;
        self.current = Some(parent.clone());
        Some((self.index, parent))
    }
}

/// An immutable merkle tree over a transaction list.
///
/// Owns the padded transaction list and its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    transactions: Vec<Transaction>,
    root: Digest,
}

impl MerkleTree {
    /// Build a tree, padding odd-length input.
    pub fn new(transactions: &[Transaction]) -> Self {
        let transactions = pad_transactions(transactions);
        let root = build_merkle_root(&transactions);
        Self { transactions, root }
    }

    /// The merkle root.
    pub fn root(&self) -> &Digest {
        &self.root
    }

    /// The padded transactions the leaves were built from.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn leaf_count(&self) -> usize {
        self.transactions.len()
    }

    /// Iterate the tree's levels, leaves first.
    pub fn levels(&self) -> MerkleLevels {
        merkle_levels(&self.transactions)
    }
}
