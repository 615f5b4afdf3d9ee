//! Main blockchain orchestration.
//!
//! The chain is an in-memory append log: blocks are only ever pushed on the
//! tip, never edited or removed. Nothing is persisted, so dropping a
//! [`Blockchain`] loses its state.

use crate::mempool::Mempool;
use merklechain_core::{Block, Digest, ParentHash, Transaction};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors reported by chain validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockchainError {
    #[error("chain has no blocks")]
    EmptyChain,

    #[error("first block is not a genesis block")]
    InvalidGenesis,

    #[error("block {index} links to {found}, expected {expected}")]
    BrokenLink {
        index: usize,
        expected: Digest,
        found: ParentHash,
    },
}

pub type Result<T> = std::result::Result<T, BlockchainError>;

/// The reward credited to whoever mines a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    /// Amount paid per mined block.
    pub amount: u64,
    /// Currency unit the amount is denominated in.
    pub unit: String,
}

impl Reward {
    pub fn new(amount: u64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
        }
    }

    /// The reward record for `miner`.
    pub fn transaction(&self, miner: &str) -> Transaction {
        Transaction::reward(miner, self.amount, &self.unit)
    }
}

impl Default for Reward {
    fn default() -> Self {
        Self::new(1, "BTC")
    }
}

/// Blockchain configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockchainConfig {
    /// Reward used by [`Blockchain::mine_block`].
    pub reward: Reward,
}

/// Result of a mining attempt.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MineOutcome {
    /// A block was appended to the chain.
    Mined(Block),
    /// The pending pool was empty; the chain is unchanged.
    NothingPending,
}

impl MineOutcome {
    pub fn is_mined(&self) -> bool {
        matches!(self, Self::Mined(_))
    }

    pub fn block(&self) -> Option<&Block> {
        match self {
            Self::Mined(block) => Some(block),
            Self::NothingPending => None,
        }
    }

    pub fn into_block(self) -> Option<Block> {
        match self {
            Self::Mined(block) => Some(block),
            Self::NothingPending => None,
        }
    }
}

/// An append-only chain of blocks plus a pool of pending transactions.
///
/// Mutation goes through `&mut self`; callers sharing a chain between threads
/// have to serialize access themselves (e.g. behind a `Mutex`).
#[derive(Debug, Clone)]
pub struct Blockchain {
    /// Blocks, genesis first. Never empty.
    chain: Vec<Block>,
    /// Transactions waiting for the next mined block.
    mempool: Mempool,
    /// Configuration.
    config: BlockchainConfig,
}

impl Blockchain {
    /// Create a chain holding only the genesis block, with default config.
    pub fn new() -> Self {
        Self::with_config(BlockchainConfig::default())
    }

    /// Create a chain holding only the genesis block.
    pub fn with_config(config: BlockchainConfig) -> Self {
        let genesis = Block::genesis();
        debug!(digest = %genesis.digest(), "created genesis block");

        Self {
            chain: vec![genesis],
            mempool: Mempool::new(),
            config,
        }
    }

    pub fn config(&self) -> &BlockchainConfig {
        &self.config
    }

    /// Queue a transaction for the next mined block.
    pub fn add_transaction(&mut self, tx: impl Into<Transaction>) {
        let tx = tx.into();
        debug!(tx = %tx, pending = self.mempool.len() + 1, "transaction queued");
        self.mempool.add(tx);
    }

    /// Append a block of `transactions` on top of the current tip.
    pub fn add_block(&mut self, transactions: Vec<Transaction>) -> &Block {
        let previous_hash = ParentHash::from(self.latest_block().digest());
        let block = Block::new(transactions, previous_hash);

        info!(
            height = self.chain.len(),
            digest = %block.digest(),
            txs = block.tx_count(),
            "block appended"
        );

        self.chain.push(block);
        self.latest_block()
    }

    /// Mine the pending transactions using the configured reward.
    pub fn mine_block(&mut self, miner_address: &str) -> MineOutcome {
        let reward = self.config.reward.clone();
        self.mine_block_with_reward(miner_address, &reward)
    }

    /// Mine the pending transactions, crediting `reward` to `miner_address`.
    ///
    /// The reward record is appended after the pending transactions. With no
    /// pending transactions nothing is mined and no reward is issued.
    pub fn mine_block_with_reward(
        &mut self,
        miner_address: &str,
        reward: &Reward,
    ) -> MineOutcome {
        if self.mempool.is_empty() {
            debug!(miner = miner_address, "nothing to mine");
            return MineOutcome::NothingPending;
        }

        self.mempool.add(reward.transaction(miner_address));
        let transactions = self.mempool.take_all();

        MineOutcome::Mined(self.add_block(transactions).clone())
    }

    /// Number of blocks, genesis included.
    pub fn chain_length(&self) -> usize {
        self.chain.len()
    }

    /// All blocks, genesis first.
    pub fn blocks(&self) -> &[Block] {
        &self.chain
    }

    /// Get a block by its position in the chain.
    pub fn block(&self, index: usize) -> Option<&Block> {
        self.chain.get(index)
    }

    /// Get the latest block.
    pub fn latest_block(&self) -> &Block {
        self.chain.last().expect("chain always holds the genesis block")
    }

    /// Transactions waiting to be mined.
    pub fn pending_transactions(&self) -> &[Transaction] {
        self.mempool.as_slice()
    }

    /// Check the genesis block and every previous-hash link.
    pub fn validate(&self) -> Result<()> {
        validate_chain(&self.chain)
    }

    /// Get blockchain statistics.
    pub fn stats(&self) -> BlockchainStats {
        BlockchainStats {
            length: self.chain_length(),
            latest_digest: self.latest_block().digest(),
            pending_transactions: self.mempool.len(),
        }
    }
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}

/// Verify that `blocks` starts with a genesis block and that every later
/// block's previous hash is the digest of the block before it.
pub fn validate_chain(blocks: &[Block]) -> Result<()> {
    let genesis = blocks.first().ok_or(BlockchainError::EmptyChain)?;
    if !genesis.is_genesis() {
        return Err(BlockchainError::InvalidGenesis);
    }

    for (index, pair) in blocks.windows(2).enumerate() {
        let expected = pair[0].digest();
        if pair[1].previous_hash().digest() != Some(&expected) {
            return Err(BlockchainError::BrokenLink {
                index: index + 1,
                expected,
                found: pair[1].previous_hash().clone(),
            });
        }
    }

    Ok(())
}

/// Blockchain statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockchainStats {
    /// Number of blocks, genesis included.
    pub length: usize,
    /// Digest of the latest block.
    pub latest_digest: Digest,
    /// Number of pending transactions.
    pub pending_transactions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use merklechain_core::hash_str;

    #[test]
    fn test_blockchain_init() {
        let blockchain = Blockchain::new();

        assert_eq!(blockchain.chain_length(), 1);
        let genesis = blockchain.latest_block();
        assert!(genesis.is_genesis());
        assert_eq!(genesis.previous_hash().as_str(), "0");
        assert!(blockchain.pending_transactions().is_empty());
    }

    #[test]
    fn test_add_transaction() {
        let mut blockchain = Blockchain::new();
        blockchain.add_transaction("Alice sends 1 BTC to Bob");
        blockchain.add_transaction(Transaction::from("Bob sends 0.5 BTC to Charlie"));

        assert_eq!(blockchain.pending_transactions().len(), 2);
        assert_eq!(blockchain.chain_length(), 1);
    }

    #[test]
    fn test_mine_block() {
        let mut blockchain = Blockchain::new();
        blockchain.add_transaction("Alice sends 1 BTC to Bob");
        blockchain.add_transaction("Bob sends 0.5 BTC to Charlie");

        let block = blockchain.mine_block("Miner1").into_block().unwrap();

        assert_eq!(
            block.transactions(),
            &[
                Transaction::from("Alice sends 1 BTC to Bob"),
                Transaction::from("Bob sends 0.5 BTC to Charlie"),
                Transaction::from("Reward: Miner1 received 1 BTC"),
            ]
        );
        assert_eq!(blockchain.chain_length(), 2);
        assert!(blockchain.pending_transactions().is_empty());
        assert_eq!(blockchain.latest_block(), &block);
        assert_eq!(
            block.previous_hash(),
            &ParentHash::from(blockchain.blocks()[0].digest())
        );
    }

    #[test]
    fn test_mine_nothing_pending() {
        let mut blockchain = Blockchain::new();

        assert_eq!(blockchain.mine_block("Miner1"), MineOutcome::NothingPending);
        assert_eq!(blockchain.chain_length(), 1);
        assert!(blockchain.pending_transactions().is_empty());
    }

    #[test]
    fn test_mine_with_configured_reward() {
        let config = BlockchainConfig {
            reward: Reward::new(50, "LDG"),
        };
        let mut blockchain = Blockchain::with_config(config);
        blockchain.add_transaction("tx");

        let outcome = blockchain.mine_block("Miner2");
        let block = outcome.block().unwrap();
        assert_eq!(
            block.transactions().last().unwrap().as_str(),
            "Reward: Miner2 received 50 LDG"
        );
    }

    #[test]
    fn test_mine_with_explicit_reward() {
        let mut blockchain = Blockchain::new();
        blockchain.add_transaction("tx");

        let outcome = blockchain.mine_block_with_reward("M", &Reward::new(7, "SAT"));
        assert!(outcome.is_mined());
        assert_eq!(
            outcome.block().unwrap().transactions()[1].as_str(),
            "Reward: M received 7 SAT"
        );
    }

    #[test]
    fn test_add_block_links_to_tip() {
        let mut blockchain = Blockchain::new();
        let genesis_digest = blockchain.latest_block().digest();

        let block = blockchain.add_block(vec![Transaction::from("a")]).clone();
        assert_eq!(block.previous_hash().digest(), Some(&genesis_digest));

        let next = blockchain.add_block(Vec::new()).clone();
        assert_eq!(next.previous_hash().digest(), Some(&block.digest()));
        assert_eq!(blockchain.chain_length(), 3);
    }

    #[test]
    fn test_add_block_leaves_pending_alone() {
        let mut blockchain = Blockchain::new();
        blockchain.add_transaction("queued");
        blockchain.add_block(vec![Transaction::from("direct")]);

        assert_eq!(blockchain.pending_transactions().len(), 1);
    }

    #[test]
    fn test_validate_after_mining() {
        let mut blockchain = Blockchain::new();
        for round in 0..5 {
            blockchain.add_transaction(format!("tx-{}", round));
            let _ = blockchain.mine_block("Miner1");
            blockchain.add_block(vec![Transaction::from("direct")]);
        }

        assert_eq!(blockchain.chain_length(), 11);
        assert_eq!(blockchain.validate(), Ok(()));
    }

    #[test]
    fn test_validate_chain_rejects_broken_link() {
        let genesis = Block::genesis();
        let good = Block::new(vec![Transaction::from("a")], genesis.digest().into());
        let bad = Block::new(vec![Transaction::from("b")], hash_str("forged").into());

        let err = validate_chain(&[genesis, good.clone(), bad]).unwrap_err();
        assert_eq!(
            err,
            BlockchainError::BrokenLink {
                index: 2,
                expected: good.digest(),
                found: hash_str("forged").into(),
            }
        );
    }

    #[test]
    fn test_validate_chain_rejects_bad_genesis() {
        assert_eq!(validate_chain(&[]), Err(BlockchainError::EmptyChain));

        let not_genesis = Block::new(vec![Transaction::from("a")], ParentHash::Genesis);
        assert_eq!(
            validate_chain(&[not_genesis]),
            Err(BlockchainError::InvalidGenesis)
        );
    }

    #[test]
    fn test_blockchain_stats() {
        let mut blockchain = Blockchain::new();
        blockchain.add_transaction("tx");

        let stats = blockchain.stats();
        assert_eq!(stats.length, 1);
        assert_eq!(stats.pending_transactions, 1);
        assert_eq!(stats.latest_digest, Block::genesis().digest());
    }

    #[test]
    fn test_config_from_json() {
        let config: BlockchainConfig =
            serde_json::from_str(r#"{"reward":{"amount":3,"unit":"ETH"}}"#).unwrap();
        assert_eq!(config.reward, Reward::new(3, "ETH"));

        let config: BlockchainConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BlockchainConfig::default());
    }
}
