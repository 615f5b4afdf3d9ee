//! Mine command: build an in-memory chain and print it.

use crate::config::load_config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use merklechain_chain::{Blockchain, MineOutcome};
use merklechain_core::Block;
use std::path::PathBuf;

const SAMPLE_TRANSACTIONS: [&str; 2] = [
    "Alice sends 1 BTC to Bob",
    "Bob sends 0.5 BTC to Charlie",
];

#[derive(Args)]
pub struct MineArgs {
    /// Transaction to queue before mining (repeatable)
    #[arg(short, long = "tx")]
    transactions: Vec<String>,

    /// Address credited with the mining reward
    #[arg(short, long, default_value = "Miner1")]
    miner: String,

    /// Number of mining attempts
    #[arg(short, long, default_value = "1")]
    rounds: usize,

    /// JSON config file (reward amount and unit)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the resulting chain as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: MineArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut blockchain = Blockchain::with_config(config);

    if args.transactions.is_empty() {
        for tx in SAMPLE_TRANSACTIONS {
            blockchain.add_transaction(tx);
        }
    } else {
        for tx in args.transactions {
            blockchain.add_transaction(tx);
        }
    }

    for round in 1..=args.rounds {
        match blockchain.mine_block(&args.miner) {
            MineOutcome::Mined(block) => {
                if !args.json {
                    println!(
                        "{}  Round {}: mined block {} ({} txs)",
                        "✓".green().bold(),
                        round,
                        block.digest().short().bright_yellow(),
                        block.tx_count()
                    );
                }
            }
            MineOutcome::NothingPending => {
                if !args.json {
                    println!(
                        "{}  Round {}: no transactions pending",
                        "-".bright_black(),
                        round
                    );
                }
            }
        }
    }

    blockchain
        .validate()
        .context("Chain failed validation after mining")?;

    if args.json {
        print_json(&blockchain)
    } else {
        print_chain(&blockchain);
        Ok(())
    }
}

fn block_json(height: usize, block: &Block) -> serde_json::Value {
    serde_json::json!({
        "height": height,
        "digest": block.digest(),
        "previous_hash": block.previous_hash(),
        "merkle_root": block.merkle_root(),
        "transactions": block.transactions(),
    })
}

fn print_json(blockchain: &Blockchain) -> Result<()> {
    let blocks: Vec<_> = blockchain
        .blocks()
        .iter()
        .enumerate()
        .map(|(height, block)| block_json(height, block))
        .collect();

    let dump = serde_json::json!({
        "length": blockchain.chain_length(),
        "pending": blockchain.pending_transactions(),
        "blocks": blocks,
    });
    println!("{}", serde_json::to_string_pretty(&dump)?);
    Ok(())
}

fn print_chain(blockchain: &Blockchain) {
    println!();
    println!("{}", "Chain:".bold().cyan());

    for (height, block) in blockchain.blocks().iter().enumerate() {
        println!();
        println!(
            "  {} {}",
            format!("#{}", height).bright_black(),
            block.digest().to_string().bright_yellow()
        );
        println!(
            "    Previous:    {}",
            block.previous_hash().to_string().bright_black()
        );
        println!(
            "    Merkle Root: {}",
            block.merkle_root().to_string().bright_black()
        );
        for (i, tx) in block.transactions().iter().enumerate() {
            println!("    {} {}", format!("{}.", i + 1).bright_black(), tx);
        }
    }

    let stats = blockchain.stats();
    println!();
    println!("  Length:  {}", stats.length.to_string().bright_cyan());
    println!(
        "  Pending: {}",
        stats.pending_transactions.to_string().bright_cyan()
    );
    println!();
}
