//! Client-side helpers for two devnet chores: deploying a fresh SPL token with
//! an initial supply, and pulling SOL from the cluster faucet.

pub mod config;
pub mod consts;
pub mod error;
pub mod flows;
pub mod ledger;
mod utils;

pub use config::*;
pub use error::*;
pub use flows::*;
pub use ledger::*;
pub use utils::*;
