mod keypair;

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    native_token::sol_to_lamports,
    pubkey::Pubkey,
    signer::Signer,
};
use tokenkit_client::consts::*;
use tokenkit_client::{
    deploy_token, request_faucet_funds, with_retry, DeployConfig, FaucetConfig,
    FaucetRequestError, TokenDeploymentError,
};
use tracing_subscriber::EnvFilter;
use keypair::{get_keypair_path, get_payer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cluster {
    Localnet,
    Mainnet,
    Devnet,
    Testnet,
    Custom(String),
}

impl Cluster {
    pub fn rpc_url(&self) -> String {
        match self {
            Cluster::Localnet => "http://127.0.0.1:8899".to_string(),
            Cluster::Mainnet => "https://api.mainnet-beta.solana.com".to_string(),
            Cluster::Devnet => "https://api.devnet.solana.com".to_string(),
            Cluster::Testnet => "https://api.testnet.solana.com".to_string(),
            Cluster::Custom(url) => url.clone(),
        }
    }

    pub fn has_faucet(&self) -> bool {
        !matches!(self, Cluster::Mainnet)
    }

    pub fn explorer_url(&self, path: &str) -> String {
        let query = match self {
            Cluster::Mainnet => String::new(),
            Cluster::Devnet => "?cluster=devnet".to_string(),
            Cluster::Testnet => "?cluster=testnet".to_string(),
            Cluster::Localnet | Cluster::Custom(_) => {
                format!("?cluster=custom&customUrl={}", self.rpc_url())
            }
        };
        format!("{}/{}{}", EXPLORER_URL, path, query)
    }
}

impl FromStr for Cluster {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" => Ok(Cluster::Localnet),
            "m" => Ok(Cluster::Mainnet),
            "d" => Ok(Cluster::Devnet),
            "t" => Ok(Cluster::Testnet),
            s if s.starts_with("http://") || s.starts_with("https://") => Ok(Cluster::Custom(s.to_string())),
            _ => Err(format!(
                "Invalid cluster value: '{}'. Use l, m, d, t, or a valid RPC URL (http:// or https://)",
                s
            )),
        }
    }
}

#[derive(Parser)]
#[command(name = "tokenkit")]
#[command(about = "Deploy SPL tokens and request faucet funds on Solana")]
struct Cli {
    #[arg(long, global = true, help = "Path to Solana keypair file (default: ~/.config/solana/id.json)")]
    keypair: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        default_value = "d",
        help = "Solana cluster (l = localnet, m = mainnet, d = devnet, t = testnet, or a custom RPC URL)"
    )]
    cluster: Cluster,

    #[arg(long, global = true, default_value_t = 0, help = "Retries after a timeout or an expired blockhash")]
    retries: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Creates a new SPL token mint and mints the initial supply to your associated token account
    DeployToken {
        #[arg(long, default_value_t = DEFAULT_DECIMALS, help = "Decimals for the new mint")]
        decimals: u8,

        #[arg(long, default_value_t = INITIAL_MINT_SUPPLY, help = "Initial amount to mint (in smallest units)")]
        initial_supply: u64,

        #[arg(long, help = "Priority fee in micro-lamports per compute unit")]
        priority_fee: Option<u64>,

        #[arg(long, short, help = "Skip the mainnet confirmation prompt")]
        yes: bool,
    },

    /// Requests SOL from the cluster faucet (devnet, testnet and localnet only)
    Airdrop {
        #[arg(long, help = "Recipient address (default: the keypair's address)")]
        address: Option<Pubkey>,

        #[arg(long, default_value_t = AIRDROP_SOL as f64, help = "Amount of SOL to request")]
        sol: f64,
    },
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner());
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Converts a `--sol` amount to lamports, refusing anything that is not a
/// positive number.
fn airdrop_lamports(sol: f64) -> Result<u64> {
    if !(sol.is_finite() && sol > 0.0) {
        bail!("Airdrop amount must be a positive number of SOL, got {}", sol);
    }
    let lamports = sol_to_lamports(sol);
    if lamports == 0 {
        bail!("Airdrop amount {} SOL is less than one lamport", sol);
    }
    Ok(lamports)
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let client = RpcClient::new_with_commitment(cli.cluster.rpc_url(), CommitmentConfig::confirmed());
    let keypair_path = get_keypair_path(cli.keypair);
    let retry_delay = Duration::from_millis(RETRY_DELAY_MS);

    match cli.command {
        Commands::DeployToken { decimals, initial_supply, priority_fee, yes } => {
            let payer = get_payer(keypair_path)?;

            if cli.cluster == Cluster::Mainnet && !yes {
                let proceed = Confirm::new()
                    .with_prompt(format!("Deploy a new token on mainnet paying from {}?", payer.pubkey()))
                    .default(false)
                    .interact()?;
                if !proceed {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            let config = DeployConfig {
                initial_supply,
                compute_unit_price: priority_fee,
                ..DeployConfig::default().with_decimals(decimals)
            };

            let pb = spinner("Deploying token...");
            let result = with_retry(cli.retries, retry_delay, TokenDeploymentError::is_retryable, || {
                deploy_token(&client, &payer, &config)
            })
            .await;
            pb.finish_and_clear();
            let deployed = result?;

            println!("{}", "Token deployed.".green().bold());
            println!("  Mint: {}", deployed.mint);
            println!("  Token Account: {}", deployed.ata);
            println!("  Decimals: {}", decimals);
            println!("  Initial Supply: {}", initial_supply);
            println!("  Signature: {}", deployed.signature);
            println!("  Explorer: {}", cli.cluster.explorer_url(&format!("tx/{}", deployed.signature)).cyan());
        }

        Commands::Airdrop { address, sol } => {
            if !cli.cluster.has_faucet() {
                bail!("Airdrops are only available on devnet, testnet or a local validator");
            }

            let lamports = airdrop_lamports(sol)?;
            let address = match address {
                Some(address) => address,
                None => get_payer(keypair_path)?.pubkey(),
            };
            let config = FaucetConfig {
                lamports,
                ..FaucetConfig::default()
            };

            let pb = spinner(&format!("Requesting {} SOL for {}...", sol, address));
            let result = with_retry(cli.retries, retry_delay, FaucetRequestError::is_retryable, || {
                request_faucet_funds(&client, &address, &config)
            })
            .await;
            pb.finish_and_clear();
            let signature = result?;

            println!("{}", format!("Airdropped {} SOL to {}.", sol, address).green().bold());
            println!("  Signature: {}", signature);
            println!("  Explorer: {}", cli.cluster.explorer_url(&format!("tx/{}", signature)).cyan());
        }
    }

    Ok(())
}
