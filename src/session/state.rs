//! Ephemeral session state.
//!
//! Mirrors what the page kept in memory: connection status, the form fields
//! as typed, the latest query results and two busy flags.

use alloy::primitives::U256;
use crate::blockchain::ChainId;

/// Wallet connection status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionState {
    /// True once a matching chain was observed.
    pub connected: bool,
    /// Last chain observed from the provider.
    pub chain_id: Option<ChainId>,
}

/// Raw form inputs, kept as strings until an operation parses them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub token_name: String,
    pub token_abbrev: String,
    pub total_supply: String,
    pub stakeholder_name: String,
    pub vesting_period: String,
    pub address_to_whitelist: String,
    pub amount_to_offer: String,
    /// Company whose tokens are claimed.
    pub company_address: String,
    /// Company whose whitelist balance or details are queried.
    pub company_address_to_query: String,
}

/// Latest successful read results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResults {
    pub current_balance: U256,
    pub whitelist_balance: U256,
    pub stakeholder: Option<String>,
    pub token_period: Option<U256>,
    pub total_supply: Option<U256>,
}

/// Which busy flag an operation drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusyKind {
    /// Writes.
    Store,
    /// Reads.
    Retrieve,
}

/// Presentation-level progress flags. Not a lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusyFlags {
    pub store: bool,
    pub retrieve: bool,
}

impl BusyFlags {
    pub fn set(&mut self, kind: BusyKind, value: bool) {
        match kind {
            BusyKind::Store => self.store = value,
            BusyKind::Retrieve => self.retrieve = value,
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.store && !self.retrieve
    }
}

/// Everything a session holds between operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub connection: ConnectionState,
    pub form: FormFields,
    pub results: QueryResults,
    pub busy: BusyFlags,
}
