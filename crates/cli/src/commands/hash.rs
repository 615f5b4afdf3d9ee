//! Hash text command.

use anyhow::Result;
use clap::Args;
use merklechain_core::hash_str;

#[derive(Args)]
pub struct HashArgs {
    /// Text to hash (UTF-8)
    text: String,
}

pub fn run(args: HashArgs) -> Result<()> {
    println!("{}", hash_str(&args.text));
    Ok(())
}
