use solana_sdk::{pubkey::Pubkey, signature::Signature};
use tracing::{info, instrument};

use crate::config::FaucetConfig;
use crate::error::{FaucetRequestError, TxError};
use crate::ledger::LedgerClient;

/// Requests `config.lamports` from the cluster faucet for `address` and waits
/// until the airdrop is confirmed. Only devnet, testnet and local validators
/// run a faucet.
#[instrument(skip_all, fields(%address, lamports = config.lamports))]
pub async fn request_faucet_funds<L>(
    ledger: &L,
    address: &Pubkey,
    config: &FaucetConfig,
) -> Result<Signature, FaucetRequestError>
where
    L: LedgerClient + ?Sized,
{
    info!("requesting faucet funds");
    let response = ledger.request_airdrop(address, config.lamports).await?;

    let raw = response.result.ok_or_else(|| {
        TxError::MalformedResponse("airdrop response did not contain a transaction signature".into())
    })?;
    let signature: Signature = raw
        .parse()
        .map_err(|e| TxError::MalformedResponse(format!("invalid airdrop signature {raw:?}: {e}")))?;

    let (_, last_valid_block_height) = ledger.get_latest_blockhash(config.commitment).await?;
    ledger
        .confirm_transaction(&signature, config.commitment, last_valid_block_height, config.poll_interval)
        .await?;

    info!(%signature, "airdrop confirmed");
    Ok(signature)
}
