use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    nonblocking::rpc_client::RpcClient,
    rpc_config::RpcSendTransactionConfig,
    rpc_custom_error::JSON_RPC_SERVER_ERROR_NODE_UNHEALTHY,
    rpc_request::{RpcError, RpcRequest, RpcResponseErrorData},
};
use solana_sdk::{
    commitment_config::{CommitmentConfig, CommitmentLevel},
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::TransactionError,
};
use solana_transaction_status::UiTransactionEncoding;
use tracing::debug;

use crate::error::{TxError, TxResult};
use crate::utils::encode_base64;

/// Submission options for [`LedgerClient::send_raw_transaction`].
#[derive(Debug, Clone, Copy)]
pub struct SendOptions {
    pub skip_preflight: bool,
    pub preflight_commitment: CommitmentLevel,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            skip_preflight: true,
            preflight_commitment: CommitmentLevel::Confirmed,
        }
    }
}

/// The faucet answer as it comes off the wire. `result` holds the airdrop
/// signature when the request was accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirdropResponse {
    pub result: Option<String>,
}

/// The RPC calls the flows need. Everything except
/// [`confirm_transaction`](LedgerClient::confirm_transaction) maps onto a single
/// JSON-RPC method.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Returns the latest blockhash and the last block height at which it is valid.
    async fn get_latest_blockhash(&self, commitment: CommitmentConfig) -> TxResult<(Hash, u64)>;

    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> TxResult<u64>;

    /// Submits an already signed, serialized transaction.
    async fn send_raw_transaction(&self, wire_tx: &[u8], options: SendOptions) -> TxResult<Signature>;

    /// `None` while the cluster has not seen the signature at `commitment`.
    async fn get_signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> TxResult<Option<Result<(), TransactionError>>>;

    async fn get_block_height(&self, commitment: CommitmentConfig) -> TxResult<u64>;

    async fn request_airdrop(&self, address: &Pubkey, lamports: u64) -> TxResult<AirdropResponse>;

    /// Polls until `signature` reaches `commitment`, the transaction fails, or
    /// the block height moves past `last_valid_block_height`.
    async fn confirm_transaction(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
        last_valid_block_height: u64,
        poll_interval: Duration,
    ) -> TxResult<()> {
        loop {
            match self.get_signature_status(signature, commitment).await? {
                Some(Ok(())) => return Ok(()),
                Some(Err(e)) => return Err(TxError::Rejected(e.to_string())),
                None => {}
            }

            let block_height = self.get_block_height(commitment).await?;
            if block_height > last_valid_block_height {
                // The status may have landed between the two calls.
                return match self.get_signature_status(signature, commitment).await? {
                    Some(Ok(())) => Ok(()),
                    Some(Err(e)) => Err(TxError::Rejected(e.to_string())),
                    None => Err(TxError::ExpiredBlockhash {
                        signature: *signature,
                        last_valid_block_height,
                    }),
                };
            }

            debug!(%signature, block_height, last_valid_block_height, "awaiting confirmation");
            tokio::time::sleep(poll_interval).await;
        }
    }
}

impl From<ClientError> for TxError {
    fn from(err: ClientError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ClientErrorKind::SerdeJson(_) => TxError::MalformedResponse(message),
            ClientErrorKind::RpcError(RpcError::RpcRequestError(_)) => TxError::Transport(message),
            ClientErrorKind::RpcError(RpcError::ParseError(_)) => TxError::MalformedResponse(message),
            // an unhealthy or lagging node says nothing about the transaction itself
            ClientErrorKind::RpcError(RpcError::RpcResponseError { code, data, .. })
                if *code == JSON_RPC_SERVER_ERROR_NODE_UNHEALTHY
                    || matches!(data, RpcResponseErrorData::NodeUnhealthy { .. }) =>
            {
                TxError::Transport(message)
            }
            ClientErrorKind::RpcError(_) | ClientErrorKind::TransactionError(_) => {
                TxError::Rejected(message)
            }
            ClientErrorKind::SigningError(_) => TxError::Signing(message),
            // io, reqwest, middleware and custom errors
            _ => TxError::Transport(message),
        }
    }
}

#[async_trait]
impl LedgerClient for RpcClient {
    async fn get_latest_blockhash(&self, commitment: CommitmentConfig) -> TxResult<(Hash, u64)> {
        Ok(self.get_latest_blockhash_with_commitment(commitment).await?)
    }

    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> TxResult<u64> {
        Ok(RpcClient::get_minimum_balance_for_rent_exemption(self, data_len).await?)
    }

    async fn send_raw_transaction(&self, wire_tx: &[u8], options: SendOptions) -> TxResult<Signature> {
        let config = RpcSendTransactionConfig {
            skip_preflight: options.skip_preflight,
            preflight_commitment: Some(options.preflight_commitment),
            encoding: Some(UiTransactionEncoding::Base64),
            ..RpcSendTransactionConfig::default()
        };
        let signature: String = self
            .send(RpcRequest::SendTransaction, json!([encode_base64(wire_tx), config]))
            .await?;
        signature
            .parse()
            .map_err(|e| TxError::MalformedResponse(format!("Invalid signature {signature:?}: {e}")))
    }

    async fn get_signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> TxResult<Option<Result<(), TransactionError>>> {
        Ok(self.get_signature_status_with_commitment(signature, commitment).await?)
    }

    async fn get_block_height(&self, commitment: CommitmentConfig) -> TxResult<u64> {
        Ok(self.get_block_height_with_commitment(commitment).await?)
    }

    async fn request_airdrop(&self, address: &Pubkey, lamports: u64) -> TxResult<AirdropResponse> {
        let result: Option<String> = self
            .send(RpcRequest::RequestAirdrop, json!([address.to_string(), lamports]))
            .await?;
        Ok(AirdropResponse { result })
    }
}
