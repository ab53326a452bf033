pub mod deploy;
pub mod faucet;

pub use deploy::*;
pub use faucet::*;
