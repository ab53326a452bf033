use std::time::Duration;

use solana_sdk::commitment_config::CommitmentConfig;

use crate::consts::*;

/// Knobs for [`deploy_token`](crate::flows::deploy_token).
#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub decimals: u8,
    /// Amount minted to the payer's associated account, in base units.
    pub initial_supply: u64,
    /// Priority fee in micro-lamports per compute unit. `None` sends no
    /// compute budget instruction.
    pub compute_unit_price: Option<u64>,
    pub commitment: CommitmentConfig,
    pub skip_preflight: bool,
    pub poll_interval: Duration,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            initial_supply: INITIAL_MINT_SUPPLY,
            compute_unit_price: None,
            commitment: CommitmentConfig::confirmed(),
            skip_preflight: true,
            poll_interval: Duration::from_millis(CONFIRM_POLL_INTERVAL_MS),
        }
    }
}

impl DeployConfig {
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }
}

/// Knobs for [`request_faucet_funds`](crate::flows::request_faucet_funds).
#[derive(Debug, Clone)]
pub struct FaucetConfig {
    pub lamports: u64,
    pub commitment: CommitmentConfig,
    pub poll_interval: Duration,
}

impl Default for FaucetConfig {
    fn default() -> Self {
        Self {
            lamports: AIRDROP_LAMPORTS,
            commitment: CommitmentConfig::confirmed(),
            poll_interval: Duration::from_millis(CONFIRM_POLL_INTERVAL_MS),
        }
    }
}
