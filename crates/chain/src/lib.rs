//! Blockchain orchestration for merklechain.
//!
//! This crate chains blocks from `merklechain-core` into a ledger:
//! - **Blockchain**: append-only block list starting at genesis
//! - **Mempool**: pending transactions waiting to be mined
//! - **Validation**: genesis and previous-hash link checks
//!
//! # Example
//!
//! ```rust
//! use merklechain_chain::{Blockchain, MineOutcome};
//!
//! let mut blockchain = Blockchain::new();
//! blockchain.add_transaction("Alice sends 1 BTC to Bob");
//! blockchain.add_transaction("Bob sends 0.5 BTC to Charlie");
//!
//! match blockchain.mine_block("Miner1") {
//!     MineOutcome::Mined(block) => assert_eq!(block.tx_count(), 3),
//!     MineOutcome::NothingPending => unreachable!(),
//! }
//! assert_eq!(blockchain.chain_length(), 2);
//! ```

pub mod blockchain;
pub mod mempool;

// Re-export commonly used types
pub use blockchain::{
    validate_chain, Blockchain, BlockchainConfig, BlockchainError, BlockchainStats, MineOutcome,
    Reward,
};
pub use mempool::Mempool;
