//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Sepolia testnet chain ID.
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// Address of the deployed vesting registry on Sepolia.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0xBfEa691E0A6ca378b18c27BCA4Cd16C3F5D7Bc30";

/// Root configuration for the vesting client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Network the deployment lives on.
    pub network: NetworkConfig,

    /// Deployed contract settings.
    pub contract: ContractConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Network and RPC configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Human readable network name, used in wrong-network messages.
    pub name: String,

    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Chain ID every operation must be connected to.
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Number of block confirmations to wait for on writes.
    pub confirmation_blocks: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: "Sepolia".to_string(),
            rpc_url: "https://ethereum-sepolia-rpc.publicnode.com".to_string(),
            chain_id: SEPOLIA_CHAIN_ID,
            rpc_timeout_secs: 10,
            confirmation_blocks: 1,
        }
    }
}

/// Deployed contract configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Address of the vesting registry contract.
    pub address: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_CONTRACT_ADDRESS.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
