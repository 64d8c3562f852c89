//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to JSON-RPC endpoint, with or without a signing wallet
//! - Query the active chain
//! - Bound read-only RPC requests with the configured timeout

use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use std::future::IntoFuture;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId, NetworkConfig};
use crate::blockchain::wallet::Wallet;

/// Blockchain RPC client wrapper.
#[derive(Clone)]
pub struct BlockchainClient {
    /// Type-erased provider, carrying the wallet filler when signing is enabled.
    provider: DynProvider,
    /// Account bound to the wallet, if any.
    account: Option<Address>,
    /// Configuration.
    config: NetworkConfig,
    /// Request timeout duration.
    timeout_duration: Duration,
}

impl BlockchainClient {
    /// Create a new blockchain client.
    ///
    /// No request is made here; the first RPC call opens the connection.
    ///
    /// # Arguments
    /// * `config` - Network configuration
    /// * `wallet` - Signing wallet, `None` for a read-only client
    pub fn new(config: NetworkConfig, wallet: Option<Wallet>) -> BlockchainResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e| {
            BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", config.rpc_url, e))
        })?;

        let account = wallet.as_ref().map(Wallet::address);
        let provider = match wallet {
            Some(wallet) => ProviderBuilder::new()
                .wallet(wallet.ethereum_wallet())
                .connect_http(url)
                .erased(),
            None => ProviderBuilder::new().connect_http(url).erased(),
        };

        tracing::info!(
            rpc_url = %config.rpc_url,
            chain_id = config.chain_id,
            signer = account.is_some(),
            "Blockchain client initialized"
        );

        Ok(Self {
            provider,
            account,
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
            config,
        })
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        self.with_timeout(self.provider.get_chain_id())
            .await?
            .map(ChainId)
            .map_err(|e| BlockchainError::Rpc(format!("Failed to get chain ID: {}", e)))
    }

    /// Run a request future under the configured RPC timeout.
    pub async fn with_timeout<F, T>(&self, fut: F) -> BlockchainResult<T>
    where
        F: IntoFuture<Output = T>,
    {
        timeout(self.timeout_duration, fut)
            .await
            .map_err(|_| BlockchainError::Timeout(self.config.rpc_timeout_secs))
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Account that signs transactions, if a wallet was supplied.
    pub fn account(&self) -> Option<Address> {
        self.account
    }

    /// Get the number of confirmation blocks required.
    pub fn confirmation_blocks(&self) -> u64 {
        self.config.confirmation_blocks
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.config.rpc_url)
            .field("chain_id", &self.config.chain_id)
            .field("account", &self.account)
            .field("timeout_secs", &self.config.rpc_timeout_secs)
            .finish()
    }
}
