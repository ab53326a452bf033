#![allow(dead_code)]

mod ledger;

pub use ledger::*;

use std::time::Duration;

use tokenkit_client::{DeployConfig, FaucetConfig};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("tokenkit_client=debug")
        .with_test_writer()
        .try_init();
}

pub fn deploy_config(decimals: u8) -> DeployConfig {
    DeployConfig {
        poll_interval: Duration::ZERO,
        ..DeployConfig::default().with_decimals(decimals)
    }
}

pub fn faucet_config() -> FaucetConfig {
    FaucetConfig {
        poll_interval: Duration::ZERO,
        ..FaucetConfig::default()
    }
}
