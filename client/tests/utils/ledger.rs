#![cfg(test)]
use std::sync::Mutex;

use async_trait::async_trait;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    hash::Hash,
    pubkey::Pubkey,
    signature::Signature,
    transaction::{Transaction, TransactionError},
};
use tokenkit_client::{deserialize, AirdropResponse, LedgerClient, SendOptions, TxError, TxResult};

/// How the mock answers signature status queries.
#[derive(Debug, Clone)]
pub enum Landing {
    Confirms,
    Never,
    Fails(TransactionError),
}

#[derive(Debug, Default)]
pub struct MockState {
    pub sent: Vec<(Transaction, SendOptions)>,
    pub airdrops: Vec<(Pubkey, u64)>,
    pub blockhash_calls: usize,
    pub status_polls: usize,
    pub block_height: u64,
}

/// In-memory ledger. Every `get_block_height` call advances the height by
/// `height_step`, so an unconfirmed signature eventually outlives its blockhash.
pub struct MockLedger {
    pub blockhash: Hash,
    pub last_valid_block_height: u64,
    pub rent_lamports: u64,
    pub height_step: u64,
    pub landing: Landing,
    pub airdrop_response: AirdropResponse,
    pub transport_down: bool,
    pub state: Mutex<MockState>,
}

impl Default for MockLedger {
    fn default() -> Self {
        Self {
            blockhash: Hash::new_unique(),
            last_valid_block_height: 100,
            rent_lamports: 1_461_600,
            height_step: 5,
            landing: Landing::Confirms,
            airdrop_response: AirdropResponse::default(),
            transport_down: false,
            state: Mutex::new(MockState { block_height: 90, ..MockState::default() }),
        }
    }
}

impl MockLedger {
    pub fn sent(&self) -> Vec<Transaction> {
        self.state.lock().unwrap().sent.iter().map(|(tx, _)| tx.clone()).collect()
    }

    fn check_up(&self) -> TxResult<()> {
        if self.transport_down {
            return Err(TxError::Transport("error sending request: connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    async fn get_latest_blockhash(&self, _: CommitmentConfig) -> TxResult<(Hash, u64)> {
        self.check_up()?;
        self.state.lock().unwrap().blockhash_calls += 1;
        Ok((self.blockhash, self.last_valid_block_height))
    }

    async fn get_minimum_balance_for_rent_exemption(&self, _: usize) -> TxResult<u64> {
        self.check_up()?;
        Ok(self.rent_lamports)
    }

    async fn send_raw_transaction(&self, wire_tx: &[u8], options: SendOptions) -> TxResult<Signature> {
        self.check_up()?;
        let tx: Transaction = deserialize(wire_tx).map_err(|e| TxError::MalformedResponse(e.to_string()))?;
        if tx.message.recent_blockhash != self.blockhash {
            return Err(TxError::Rejected("Blockhash not found".into()));
        }
        tx.verify()
            .map_err(|e| TxError::Rejected(format!("signature verification failed: {}", e)))?;

        let signature = tx.signatures[0];
        self.state.lock().unwrap().sent.push((tx, options));
        Ok(signature)
    }

    async fn get_signature_status(
        &self,
        _: &Signature,
        _: CommitmentConfig,
    ) -> TxResult<Option<Result<(), TransactionError>>> {
        self.check_up()?;
        self.state.lock().unwrap().status_polls += 1;
        Ok(match &self.landing {
            Landing::Confirms => Some(Ok(())),
            Landing::Never => None,
            Landing::Fails(e) => Some(Err(e.clone())),
        })
    }

    async fn get_block_height(&self, _: CommitmentConfig) -> TxResult<u64> {
        self.check_up()?;
        let mut state = self.state.lock().unwrap();
        state.block_height += self.height_step;
        Ok(state.block_height)
    }

    async fn request_airdrop(&self, address: &Pubkey, lamports: u64) -> TxResult<AirdropResponse> {
        self.check_up()?;
        self.state.lock().unwrap().airdrops.push((*address, lamports));
        Ok(self.airdrop_response.clone())
    }
}
