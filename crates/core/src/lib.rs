//! Core ledger primitives for merklechain.
//!
//! This crate provides the fundamental types used throughout the ledger:
//! - SHA-256 hashing with hex-text digests
//! - Transaction records
//! - Merkle roots and level-by-level tree views
//! - Blocks chained by previous-hash

pub mod block;
pub mod hash;
pub mod merkle;
pub mod transaction;

// Re-export commonly used types at the crate root
pub use block::Block;
pub use hash::{hash, hash_concat, hash_str, Digest, DigestError, ParentHash, DIGEST_HEX_LEN};
pub use merkle::{build_merkle_root, empty_root, merkle_levels, MerkleLevels, MerkleTree};
pub use transaction::Transaction;
