//! Command-line front-end for the vesting registry.
//!
//! Each subcommand maps to one registry operation. The signing key is read
//! from `VESTING_PRIVATE_KEY`; without it only reads are possible.

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use alloy::primitives::Address;
use clap::{Parser, Subcommand};

use vesting_client::blockchain::wallet::PRIVATE_KEY_ENV_VAR;
use vesting_client::blockchain::{BlockchainClient, Wallet};
use vesting_client::config::{finalize, read_or_default, ClientConfig, ConfigError};
use vesting_client::observability::init_logging;
use vesting_client::{Command, Notice, OnchainRegistry, Session};

#[derive(Parser)]
#[command(name = "vesting-client")]
#[command(
    about = "Register companies, whitelist stakeholders and claim vested tokens",
    long_about = None
)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the JSON-RPC endpoint.
    #[arg(long)]
    rpc_url: Option<String>,

    /// Override the registry contract address.
    #[arg(long)]
    contract: Option<String>,

    /// Override the expected chain ID.
    #[arg(long)]
    chain_id: Option<u64>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect and show the current balance
    Status,
    /// Check the wallet is on the expected network
    Connect,
    /// Show your token balance
    Balance,
    /// Show your whitelist balance with a company
    WhitelistBalance { company: String },
    /// Register your company and its token
    RegisterCompany {
        token_name: String,
        token_abbrev: String,
        total_supply: Option<String>,
    },
    /// Set the stakeholder title and vesting period
    SetStakeholder {
        title: String,
        vesting_period: Option<String>,
    },
    /// Whitelist an address for an amount of your token
    Whitelist {
        address: String,
        amount: Option<String>,
    },
    /// Claim tokens a company whitelisted you for
    Claim { company: String },
    /// Show a company's stakeholder title
    Stakeholder { company: String },
    /// Show a company's vesting period
    TokenPeriod { company: String },
    /// Show your company's total supply
    TotalSupply,
}

impl Commands {
    fn into_commands(self) -> Vec<Command> {
        match self {
            Commands::Status => vec![Command::Connect, Command::MyBalance],
            Commands::Connect => vec![Command::Connect],
            Commands::Balance => vec![Command::MyBalance],
            Commands::WhitelistBalance { company } => vec![Command::WhitelistBalance {
                company_address: company,
            }],
            Commands::RegisterCompany {
                token_name,
                token_abbrev,
                total_supply,
            } => vec![Command::RegisterCompany {
                token_name,
                token_abbrev,
                total_supply: total_supply.unwrap_or_default(),
            }],
            Commands::SetStakeholder {
                title,
                vesting_period,
            } => vec![Command::SetStakeholderAndPeriod {
                stakeholder_title: title,
                vesting_period: vesting_period.unwrap_or_default(),
            }],
            Commands::Whitelist { address, amount } => vec![Command::WhiteListAddress {
                address,
                amount: amount.unwrap_or_default(),
            }],
            Commands::Claim { company } => vec![Command::ClaimToken {
                company_address: company,
            }],
            Commands::Stakeholder { company } => vec![Command::Stakeholder {
                company_address: company,
            }],
            Commands::TokenPeriod { company } => vec![Command::TokenPeriod {
                company_address: company,
            }],
            Commands::TotalSupply => vec![Command::TotalSupply],
        }
    }
}

fn load_effective_config(cli: &Cli) -> Result<ClientConfig, ConfigError> {
    let mut config = read_or_default(cli.config.as_deref())?;

    if let Some(rpc_url) = &cli.rpc_url {
        config.network.rpc_url = rpc_url.clone();
    }
    if let Some(contract) = &cli.contract {
        config.contract.address = contract.clone();
    }
    if let Some(chain_id) = cli.chain_id {
        config.network.chain_id = chain_id;
    }

    finalize(config)
}

fn build_session(
    config: &ClientConfig,
) -> Result<Session<OnchainRegistry>, Box<dyn std::error::Error>> {
    let wallet = if std::env::var_os(PRIVATE_KEY_ENV_VAR).is_some() {
        Some(Wallet::from_env()?)
    } else {
        tracing::info!("{} not set, running read-only", PRIVATE_KEY_ENV_VAR);
        None
    };

    let client = BlockchainClient::new(config.network.clone(), wallet)?;
    let contract = Address::from_str(&config.contract.address)?;
    let registry = OnchainRegistry::new(client, contract);

    Ok(Session::new(registry, config.network.clone()))
}

fn print_notice(notice: &Notice, json: bool) {
    if json {
        match serde_json::to_string_pretty(notice) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error: failed to encode result: {}", e),
        }
    } else {
        println!("{}", notice);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_effective_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.observability.log_level);

    tracing::info!(
        network = %config.network.name,
        chain_id = config.network.chain_id,
        contract = %config.contract.address,
        "Configuration loaded"
    );

    let mut session = match build_session(&config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for command in cli.command.into_commands() {
        match session.execute(command).await {
            Ok(notice) => print_notice(&notice, cli.json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
