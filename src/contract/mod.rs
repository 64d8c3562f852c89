//! Vesting registry contract access.
//!
//! # Data Flow
//! ```text
//! Session (validated inputs)
//!     → VestingContract (trait seam, injected into the session)
//!     → registry.rs (sol! bindings over the alloy provider)
//!     → deployed contract
//! ```
//!
//! The trait is the only thing the session depends on, so a session can be
//! driven against any chain endpoint or an in-memory double.

pub mod registry;

use alloy::primitives::{Address, U256};
use async_trait::async_trait;

use crate::blockchain::{BlockchainResult, ChainId, TxOutcome};

pub use registry::{IVestingRegistry, OnchainRegistry};

/// Connection handle to the deployed vesting registry.
///
/// Reads return the contract's values untouched. Writes resolve once the
/// transaction is confirmed and fail if it reverted.
#[async_trait]
pub trait VestingContract: Send + Sync {
    /// Chain ID the underlying provider is connected to.
    async fn chain_id(&self) -> BlockchainResult<ChainId>;

    /// Account that signs writes.
    fn signer_address(&self) -> BlockchainResult<Address>;

    /// `getMyBalance()`: token balance of the calling account.
    async fn get_my_balance(&self) -> BlockchainResult<U256>;

    /// `whitelistedBalanceBeforewithdrawal(companyAddress)`.
    async fn whitelisted_balance_before_withdrawal(
        &self,
        company: Address,
    ) -> BlockchainResult<U256>;

    /// `getStakeholder(companyAddress)`.
    async fn get_stakeholder(&self, company: Address) -> BlockchainResult<String>;

    /// `getTokenPeriod(companyAddress)`, in base units.
    async fn get_token_period(&self, company: Address) -> BlockchainResult<U256>;

    /// `getTotalSupply()` of the calling company.
    async fn get_total_supply(&self) -> BlockchainResult<U256>;

    /// `registerCompany(tokenName, tokenAbbrev, totalSupply)`.
    async fn register_company(
        &self,
        token_name: String,
        token_abbrev: String,
        total_supply: U256,
    ) -> BlockchainResult<TxOutcome>;

    /// `setStakeholderAndPeriod(stakeholder, period)`, period already in base units.
    async fn set_stakeholder_and_period(
        &self,
        stakeholder: String,
        period: U256,
    ) -> BlockchainResult<TxOutcome>;

    /// `whiteListAddress(address, amount)`.
    async fn white_list_address(
        &self,
        address: Address,
        amount: U256,
    ) -> BlockchainResult<TxOutcome>;

    /// `claimToken(companyAddress)`.
    async fn claim_token(&self, company: Address) -> BlockchainResult<TxOutcome>;
}
