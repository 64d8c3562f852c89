//! Request objects and their user-facing results.

use std::fmt;

use alloy::primitives::U256;
use serde::{Serialize, Serializer};

use crate::blockchain::{ChainId, TxOutcome};

/// One user-initiated action, carrying the form inputs as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Connect,
    MyBalance,
    WhitelistBalance {
        company_address: String,
    },
    RegisterCompany {
        token_name: String,
        token_abbrev: String,
        total_supply: String,
    },
    SetStakeholderAndPeriod {
        stakeholder_title: String,
        vesting_period: String,
    },
    WhiteListAddress {
        address: String,
        amount: String,
    },
    ClaimToken {
        company_address: String,
    },
    Stakeholder {
        company_address: String,
    },
    TokenPeriod {
        company_address: String,
    },
    TotalSupply,
}

impl Command {
    /// Operation name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Connect => "connect",
            Command::MyBalance => "getMyBalance",
            Command::WhitelistBalance { .. } => "whitelistedBalanceBeforewithdrawal",
            Command::RegisterCompany { .. } => "registerCompany",
            Command::SetStakeholderAndPeriod { .. } => "setStakeholderAndPeriod",
            Command::WhiteListAddress { .. } => "whiteListAddress",
            Command::ClaimToken { .. } => "claimToken",
            Command::Stakeholder { .. } => "getStakeholder",
            Command::TokenPeriod { .. } => "getTokenPeriod",
            Command::TotalSupply => "getTotalSupply",
        }
    }
}

/// A confirmed write, with the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub message: String,
    #[serde(flatten)]
    pub outcome: TxOutcome,
}

/// Integers are reported in decimal, exactly as the contract returned them.
fn decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Successful result of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    Connected { chain_id: ChainId },
    Value {
        label: &'static str,
        #[serde(serialize_with = "decimal")]
        value: U256,
    },
    Text {
        label: &'static str,
        value: String,
    },
    Period {
        #[serde(serialize_with = "decimal")]
        raw: U256,
        formatted: String,
    },
    Confirmed(Confirmation),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Connected { chain_id } => write!(f, "Connected to chain {}", chain_id),
            Notice::Value { label, value } => write!(f, "{} is {}", label, value),
            Notice::Text { label, value } => write!(f, "{} is {}", label, value),
            Notice::Period { raw, formatted } => {
                write!(f, "Vesting period is {} ({} base units)", formatted, raw)
            }
            Notice::Confirmed(confirmation) => {
                write!(f, "{} (tx {})", confirmation.message, confirmation.outcome.tx_hash)
            }
        }
    }
}
