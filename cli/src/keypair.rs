use std::path::PathBuf;

use anyhow::{anyhow, Result};
use solana_sdk::signature::{read_keypair_file, Keypair};

const DEFAULT_KEYPAIR: &str = ".config/solana/id.json";

pub fn get_keypair_path(keypair: Option<PathBuf>) -> PathBuf {
    keypair.unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_KEYPAIR)
    })
}

pub fn get_payer(path: PathBuf) -> Result<Keypair> {
    read_keypair_file(&path)
        .map_err(|e| anyhow!("Failed to read keypair {}: {}", path.display(), e))
}
