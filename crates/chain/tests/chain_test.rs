use merklechain_chain::{validate_chain, Blockchain, BlockchainConfig, MineOutcome, Reward};
use merklechain_core::{build_merkle_root, hash_str, Block, ParentHash, Transaction};

fn is_lower_hex_digest(s: &str) -> bool {
    s.len() == 64 && s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}

#[test]
fn test_sample_session() {
    let mut blockchain = Blockchain::new();

    blockchain.add_transaction("Alice sends 1 BTC to Bob");
    blockchain.add_transaction("Bob sends 0.5 BTC to Charlie");

    let block = match blockchain.mine_block("Miner1") {
        MineOutcome::Mined(block) => block,
        MineOutcome::NothingPending => panic!("expected a block"),
    };

    assert_eq!(block.tx_count(), 3);
    assert_eq!(
        block.transactions()[2],
        Transaction::from("Reward: Miner1 received 1 BTC")
    );
    assert_eq!(blockchain.chain_length(), 2);
    assert!(blockchain.pending_transactions().is_empty());

    // A second attempt has nothing to mine.
    assert_eq!(blockchain.mine_block("Miner1"), MineOutcome::NothingPending);
    assert_eq!(blockchain.chain_length(), 2);
}

#[test]
fn test_chain_links_hold_after_mixed_appends() {
    let mut blockchain = Blockchain::with_config(BlockchainConfig {
        reward: Reward::new(25, "COIN"),
    });

    for i in 0..4 {
        for j in 0..=i {
            blockchain.add_transaction(format!("payment {}-{}", i, j));
        }
        assert!(blockchain.mine_block("miner").is_mined());
        blockchain.add_block(vec![Transaction::new(format!("direct {}", i))]);
    }

    let blocks = blockchain.blocks();
    assert_eq!(blocks.len(), 9);
    for i in 1..blocks.len() {
        assert_eq!(
            blocks[i].previous_hash(),
            &ParentHash::from(blocks[i - 1].digest())
        );
    }
    assert!(blockchain.validate().is_ok());
}

#[test]
fn test_every_digest_is_lowercase_hex() {
    let mut blockchain = Blockchain::new();
    blockchain.add_transaction("tx1");
    let _ = blockchain.mine_block("m");

    for block in blockchain.blocks() {
        assert!(is_lower_hex_digest(block.digest().as_str()));
        assert!(is_lower_hex_digest(block.merkle_root().as_str()));
    }
}

#[test]
fn test_block_digest_matches_manual_computation() {
    let mut blockchain = Blockchain::new();
    blockchain.add_transaction("tx1");
    let block = blockchain.mine_block("Miner1").into_block().unwrap();

    let root = build_merkle_root(block.transactions());
    let parent = blockchain.blocks()[0].digest();
    assert_eq!(block.digest(), hash_str(&format!("{}{}", parent, root)));
}

#[test]
fn test_tampered_copy_fails_validation() {
    let mut blockchain = Blockchain::new();
    for i in 0..3 {
        blockchain.add_transaction(format!("tx{}", i));
        let _ = blockchain.mine_block("m");
    }

    let mut blocks = blockchain.blocks().to_vec();
    let forged = Block::new(
        vec![Transaction::from("Mallory sends 100 BTC to Mallory")],
        blocks[1].previous_hash().clone(),
    );
    blocks[1] = forged;

    assert!(validate_chain(&blocks).is_err());
    assert!(blockchain.validate().is_ok());
}
