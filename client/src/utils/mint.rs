use solana_sdk::{
    compute_budget::ComputeBudgetInstruction,
    instruction::Instruction,
    pubkey::Pubkey,
    system_instruction,
};
use spl_token::instruction as token_instruction;
use spl_token::solana_program::program_pack::Pack;
use spl_token::ID as TOKEN_PROGRAM_ID;

use crate::error::{TxError, TxResult};
use crate::utils::{build_create_ata_ix, find_ata};

pub const MINT_LEN: usize = spl_token::state::Mint::LEN;

/// Inputs for the instructions of a token deployment.
#[derive(Debug, Clone, Copy)]
pub struct MintParams {
    pub payer: Pubkey,
    pub mint: Pubkey,
    pub decimals: u8,
    pub rent_lamports: u64,
    pub initial_supply: u64,
    pub compute_unit_price: Option<u64>,
}

/// Builds the deployment instructions: create the mint account, initialize it,
/// create the payer's associated account, then mint the initial supply into it.
/// Each step relies on the previous one having run, so the order is fixed.
///
/// The payer is mint authority, freeze authority and owner of the associated
/// account. A compute unit price, when given, goes in front.
pub fn build_deploy_token_ixs(params: &MintParams) -> TxResult<Vec<Instruction>> {
    let MintParams { payer, mint, decimals, rent_lamports, initial_supply, compute_unit_price } = *params;
    let ata = find_ata(&payer, &mint);

    let create_mint_ix = system_instruction::create_account(
        &payer,
        &mint,
        rent_lamports,
        MINT_LEN as u64,
        &TOKEN_PROGRAM_ID,
    );

    let init_mint_ix = token_instruction::initialize_mint(
        &TOKEN_PROGRAM_ID,
        &mint,
        &payer,          // mint authority
        Some(&payer),    // freeze authority
        decimals,
    )
    .map_err(|e| TxError::Instruction(format!("initialize_mint: {}", e)))?;

    let create_ata_ix = build_create_ata_ix(&payer, &payer, &mint);

    let mint_to_ix = token_instruction::mint_to(
        &TOKEN_PROGRAM_ID,
        &mint,
        &ata,
        &payer,
        &[],
        initial_supply,
    )
    .map_err(|e| TxError::Instruction(format!("mint_to: {}", e)))?;

    let mut ixs = Vec::with_capacity(5);
    if let Some(price) = compute_unit_price {
        ixs.push(ComputeBudgetInstruction::set_compute_unit_price(price));
    }
    ixs.extend([create_mint_ix, init_mint_ix, create_ata_ix, mint_to_ix]);

    Ok(ixs)
}
