use solana_sdk::native_token::LAMPORTS_PER_SOL;

pub const DEFAULT_DECIMALS: u8            = 9;
pub const INITIAL_MINT_SUPPLY: u64        = 1_000_000_000 * 10u64.pow(8);

pub const AIRDROP_SOL: u64                = 5;
pub const AIRDROP_LAMPORTS: u64           = AIRDROP_SOL * LAMPORTS_PER_SOL;

pub const CONFIRM_POLL_INTERVAL_MS: u64   = 500;
pub const RETRY_DELAY_MS: u64             = 1_000;

pub const EXPLORER_URL: &str              = "https://explorer.solana.com";
