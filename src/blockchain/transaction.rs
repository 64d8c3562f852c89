//! Transaction confirmation monitoring.
//!
//! # Responsibilities
//! - Wait for a broadcast transaction to reach the required depth
//! - Turn a reverted receipt into an error

use alloy::network::Ethereum;
use alloy::providers::PendingTransactionBuilder;

use crate::blockchain::types::{BlockchainError, BlockchainResult, TxOutcome};

/// Wait for a submitted transaction to be confirmed.
///
/// # Arguments
/// * `pending` - Handle returned by the provider after broadcast
/// * `confirmations` - Number of blocks required for finality
pub async fn await_confirmation(
    pending: PendingTransactionBuilder<Ethereum>,
    confirmations: u64,
) -> BlockchainResult<TxOutcome> {
    let tx_hash = *pending.tx_hash();
    tracing::debug!(tx_hash = %tx_hash, confirmations, "Transaction pending");

    let receipt = pending
        .with_required_confirmations(confirmations)
        .get_receipt()
        .await
        .map_err(|e| BlockchainError::Rpc(format!("Failed to confirm {}: {}", tx_hash, e)))?;

    if !receipt.status() {
        tracing::warn!(tx_hash = %tx_hash, "Transaction reverted");
        return Err(BlockchainError::Reverted(tx_hash));
    }

    tracing::info!(
        tx_hash = %tx_hash,
        block_number = ?receipt.block_number,
        "Transaction confirmed"
    );

    Ok(TxOutcome {
        tx_hash,
        block_number: receipt.block_number,
    })
}
