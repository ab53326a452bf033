use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use tracing::{info, instrument};

use crate::config::DeployConfig;
use crate::error::{TokenDeploymentError, TxError};
use crate::ledger::{LedgerClient, SendOptions};
use crate::utils::*;

/// A freshly deployed mint and the transaction that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployedToken {
    pub mint: Pubkey,
    pub ata: Pubkey,
    pub signature: Signature,
}

/// Creates a new SPL mint owned by `wallet`, creates the wallet's associated
/// account and mints `config.initial_supply` into it, all in one transaction.
///
/// The mint keypair is generated here and dropped once the transaction is
/// signed. Nothing is retried; see [`with_retry`](crate::with_retry).
#[instrument(skip_all, fields(payer = %wallet.pubkey(), decimals = config.decimals))]
pub async fn deploy_token<L, W>(
    ledger: &L,
    wallet: &W,
    config: &DeployConfig,
) -> Result<DeployedToken, TokenDeploymentError>
where
    L: LedgerClient + ?Sized,
    W: Signer,
{
    let mint = Keypair::new();
    let mint_pubkey = mint.pubkey();
    let payer = wallet.pubkey();
    let ata = find_ata(&payer, &mint_pubkey);
    info!(mint = %mint_pubkey, %ata, "generated mint address");

    let rent_lamports = ledger.get_minimum_balance_for_rent_exemption(MINT_LEN).await?;

    let ixs = build_deploy_token_ixs(&MintParams {
        payer,
        mint: mint_pubkey,
        decimals: config.decimals,
        rent_lamports,
        initial_supply: config.initial_supply,
        compute_unit_price: config.compute_unit_price,
    })?;

    let (recent_blockhash, last_valid_block_height) =
        ledger.get_latest_blockhash(config.commitment).await?;

    let mut tx = Transaction::new_with_payer(&ixs, Some(&payer));
    tx.try_partial_sign(&[&mint], recent_blockhash)
        .map_err(TxError::from)?;
    tx.try_sign(&[wallet], recent_blockhash)
        .map_err(TxError::from)?;

    let wire_tx = serialize(&tx)
        .map_err(|e| TxError::Encoding(e.to_string()))?;
    let options = SendOptions {
        skip_preflight: config.skip_preflight,
        preflight_commitment: config.commitment.commitment,
    };
    let signature = ledger.send_raw_transaction(&wire_tx, options).await?;
    info!(%signature, last_valid_block_height, "submitted deployment");

    ledger
        .confirm_transaction(&signature, config.commitment, last_valid_block_height, config.poll_interval)
        .await?;

    info!(mint = %mint_pubkey, %signature, "token deployed");
    Ok(DeployedToken { mint: mint_pubkey, ata, signature })
}
