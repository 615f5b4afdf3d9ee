//! CLI commands module.

use anyhow::Result;
use clap::Subcommand;

mod hash;
mod mine;
mod root;
mod tree;

#[derive(Subcommand)]
pub enum Commands {
    /// Hash a piece of text
    Hash(hash::HashArgs),
    /// Compute the merkle root of a transaction list
    Root(root::RootArgs),
    /// Show every level of the merkle tree, leaves first
    Tree(tree::TreeArgs),
    /// Queue transactions, mine them and print the chain
    Mine(mine::MineArgs),
}

pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Hash(args) => hash::run(args),
        Commands::Root(args) => root::run(args),
        Commands::Tree(args) => tree::run(args),
        Commands::Mine(args) => mine::run(args),
    }
}
