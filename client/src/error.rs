use solana_sdk::{signature::Signature, signer::SignerError};
use thiserror::Error;

/// What went wrong while building, submitting or confirming a transaction.
#[derive(Error, Debug)]
pub enum TxError {
    #[error("RPC transport failure: {0}")]
    Transport(String),

    #[error("Malformed RPC response: {0}")]
    MalformedResponse(String),

    #[error("Blockhash expired at block height {last_valid_block_height} before {signature} was confirmed")]
    ExpiredBlockhash {
        signature: Signature,
        last_valid_block_height: u64,
    },

    #[error("Transaction rejected: {0}")]
    Rejected(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Invalid instruction: {0}")]
    Instruction(String),

    #[error("Transaction encoding failed: {0}")]
    Encoding(String),
}

impl TxError {
    /// Failures where re-running the whole flow may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, TxError::Transport(_) | TxError::ExpiredBlockhash { .. })
    }
}

impl From<SignerError> for TxError {
    fn from(err: SignerError) -> Self {
        TxError::Signing(err.to_string())
    }
}

pub type TxResult<T> = Result<T, TxError>;

#[derive(Error, Debug)]
#[error("Token deployment failed: {0}")]
pub struct TokenDeploymentError(#[from] TxError);

impl TokenDeploymentError {
    pub fn cause(&self) -> &TxError {
        &self.0
    }

    pub fn is_retryable(&self) -> bool {
        self.0.is_retryable()
    }
}

#[derive(Error, Debug)]
#[error("Faucet request failed: {0}")]
pub struct FaucetRequestError(#[from] TxError);

impl FaucetRequestError {
    pub fn cause(&self) -> &TxError {
        &self.0
    }

    pub fn is_retryable(&self) -> bool {
        self.0.is_retryable()
    }
}
