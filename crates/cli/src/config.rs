//! Loading blockchain configuration from disk.

use anyhow::{Context, Result};
use merklechain_chain::BlockchainConfig;
use std::fs;
use std::path::Path;

/// Load a JSON config file, or the defaults when no path is given.
///
/// Keys missing from the file keep their default values.
pub fn load_config(path: Option<&Path>) -> Result<BlockchainConfig> {
    let Some(path) = path else {
        return Ok(BlockchainConfig::default());
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}
