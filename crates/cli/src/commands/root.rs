//! Merkle root command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use merklechain_core::{build_merkle_root, Transaction};

#[derive(Args)]
pub struct RootArgs {
    /// Transactions, in order (none is allowed)
    transactions: Vec<String>,

    /// Print only the root digest
    #[arg(short, long)]
    quiet: bool,
}

pub fn run(args: RootArgs) -> Result<()> {
    let transactions: Vec<Transaction> = args
        .transactions
        .into_iter()
        .map(Transaction::from)
        .collect();
    let root = build_merkle_root(&transactions);

    if args.quiet {
        println!("{}", root);
        return Ok(());
    }

    println!();
    println!(
        "  Transactions: {}",
        transactions.len().to_string().bright_cyan()
    );
    println!("  Merkle Root:  {}", root.to_string().bright_yellow());
    println!();

    Ok(())
}
