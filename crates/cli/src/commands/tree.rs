//! Merkle tree dump command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use merklechain_core::{MerkleTree, Transaction};

#[derive(Args)]
pub struct TreeArgs {
    /// Transactions, in order (none is allowed)
    transactions: Vec<String>,

    /// Print the levels as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: TreeArgs) -> Result<()> {
    let transactions: Vec<Transaction> = args
        .transactions
        .into_iter()
        .map(Transaction::from)
        .collect();
    let tree = MerkleTree::new(&transactions);

    if args.json {
        let levels: Vec<_> = tree
            .levels()
            .map(|(index, digests)| serde_json::json!({ "level": index, "digests": digests }))
            .collect();
        let dump = serde_json::json!({
            "leaves": tree.leaf_count(),
            "root": tree.root(),
            "levels": levels,
        });
        println!("{}", serde_json::to_string_pretty(&dump)?);
        return Ok(());
    }

    println!();
    println!("{}", "Merkle Tree:".bold().cyan());
    for (index, digests) in tree.levels() {
        println!();
        println!("  {}", format!("Level {}", index).bold());
        let last = digests.len() - 1;
        for (i, digest) in digests.iter().enumerate() {
            let branch = match (i, digests.len()) {
                (_, 1) => "──",
                (0, _) => "┌─",
                (i, _) if i == last => "└─",
                _ => "├─",
            };
            println!(
                "  {} {}",
                branch.bright_black(),
                digest.to_string().bright_yellow()
            );
        }
    }
    println!();
    println!("  Root: {}", tree.root().to_string().green().bold());
    println!();

    Ok(())
}
