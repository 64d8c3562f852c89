//! Chain-specific types and error definitions.

use alloy::primitives::TxHash;
use serde::Serialize;
use thiserror::Error;

pub use crate::config::schema::NetworkConfig;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Contract call or transaction submission was rejected.
    #[error("Contract call failed: {0}")]
    Contract(String),

    /// Transaction was reverted on-chain.
    #[error("Transaction reverted: {0}")]
    Reverted(TxHash),

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// A write was attempted without a signing key.
    #[error("No signer available: set the signing key to send transactions")]
    NoSigner,
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// A mined and successful transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TxOutcome {
    /// Hash of the confirmed transaction.
    pub tx_hash: TxHash,
    /// Block the transaction was included in, when the node reports it.
    pub block_number: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_id_conversion() {
        let chain_id = ChainId::from(11155111u64);
        assert_eq!(chain_id.0, 11155111);
        assert_eq!(u64::from(chain_id), 11155111);
        assert_eq!(chain_id.to_string(), "11155111");
    }

    #[test]
    fn test_error_display() {
        let err = BlockchainError::Timeout(10);
        assert_eq!(err.to_string(), "RPC timeout after 10 seconds");

        let err = BlockchainError::NoSigner;
        assert!(err.to_string().starts_with("No signer available"));

        let err = BlockchainError::Reverted(TxHash::ZERO);
        assert!(err.to_string().starts_with("Transaction reverted: 0x"));
    }
}
