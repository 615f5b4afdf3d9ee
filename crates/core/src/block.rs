//! Blocks: a transaction list bound to its parent through a header digest.

use crate::hash::{hash_concat, Digest, ParentHash};
use crate::merkle::MerkleTree;
use crate::transaction::Transaction;

/// A block of transactions.
///
/// The block digest is `SHA-256(previous_hash || merkle_root)` over the hex
/// text of both fields. It is recomputed on every call and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    transactions: Vec<Transaction>,
    previous_hash: ParentHash,
    merkle_tree: MerkleTree,
}

impl Block {
    /// Create a block and build the merkle tree over its transactions.
    pub fn new(transactions: Vec<Transaction>, previous_hash: ParentHash) -> Self {
        let merkle_tree = MerkleTree::new(&transactions);
        Self {
            transactions,
            previous_hash,
            merkle_tree,
        }
    }

    /// Create the genesis block: no transactions, sentinel parent `"0"`.
    pub fn genesis() -> Self {
        Self::new(Vec::new(), ParentHash::Genesis)
    }

    /// The block digest.
    pub fn digest(&self) -> Digest {
        hash_concat(self.previous_hash.as_str(), self.merkle_root().as_str())
    }

    /// Transactions in their original order, without merkle padding.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn previous_hash(&self) -> &ParentHash {
        &self.previous_hash
    }

    pub fn merkle_root(&self) -> &Digest {
        self.merkle_tree.root()
    }

    pub fn merkle_tree(&self) -> &MerkleTree {
        &self.merkle_tree
    }

    /// Check if this is the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.previous_hash.is_genesis() && self.transactions.is_empty()
    }

    /// Get the number of transactions in this block.
    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }
}
