//! Shared utilities for session integration tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use vesting_client::blockchain::{
    BlockchainError, BlockchainResult, ChainId, NetworkConfig, TxOutcome,
};
use vesting_client::contract::VestingContract;
use vesting_client::Session;

pub const SEPOLIA: u64 = 11_155_111;

/// Address of the test signer (Anvil account #0).
pub fn signer() -> Address {
    "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".parse().unwrap()
}

/// A contract call that reached the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    GetMyBalance,
    WhitelistedBalance(Address),
    GetStakeholder(Address),
    GetTokenPeriod(Address),
    GetTotalSupply,
    RegisterCompany {
        token_name: String,
        token_abbrev: String,
        total_supply: U256,
    },
    SetStakeholderAndPeriod {
        stakeholder: String,
        period: U256,
    },
    WhiteListAddress {
        address: Address,
        amount: U256,
    },
    ClaimToken(Address),
}

#[derive(Debug)]
struct MockState {
    chain_id: u64,
    chain_error: Option<String>,
    signer: Option<Address>,
    balance: U256,
    whitelist: HashMap<Address, U256>,
    stakeholder: String,
    token_period: U256,
    total_supply: U256,
    read_error: Option<String>,
    write_error: Option<String>,
    revert_writes: bool,
    chain_checks: usize,
    calls: Vec<MockCall>,
}

/// In-memory stand-in for the deployed registry.
#[derive(Clone)]
pub struct MockContract {
    state: Arc<Mutex<MockState>>,
}

#[allow(dead_code)]
impl MockContract {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                chain_id: SEPOLIA,
                chain_error: None,
                signer: Some(signer()),
                balance: U256::ZERO,
                whitelist: HashMap::new(),
                stakeholder: String::new(),
                token_period: U256::ZERO,
                total_supply: U256::ZERO,
                read_error: None,
                write_error: None,
                revert_writes: false,
                chain_checks: 0,
                calls: Vec::new(),
            })),
        }
    }

    pub fn on_chain(self, chain_id: u64) -> Self {
        self.state.lock().unwrap().chain_id = chain_id;
        self
    }

    pub fn without_signer(self) -> Self {
        self.state.lock().unwrap().signer = None;
        self
    }

    pub fn with_balance(self, balance: u64) -> Self {
        self.state.lock().unwrap().balance = U256::from(balance);
        self
    }

    pub fn with_whitelist(self, company: Address, amount: u64) -> Self {
        self.state
            .lock()
            .unwrap()
            .whitelist
            .insert(company, U256::from(amount));
        self
    }

    pub fn with_stakeholder(self, title: &str, period: U256) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.stakeholder = title.to_string();
            state.token_period = period;
        }
        self
    }

    pub fn with_total_supply(self, supply: u64) -> Self {
        self.state.lock().unwrap().total_supply = U256::from(supply);
        self
    }

    pub fn set_chain_id(&self, chain_id: u64) {
        self.state.lock().unwrap().chain_id = chain_id;
    }

    pub fn fail_chain_id(&self, message: &str) {
        self.state.lock().unwrap().chain_error = Some(message.to_string());
    }

    pub fn fail_reads(&self, message: &str) {
        self.state.lock().unwrap().read_error = Some(message.to_string());
    }

    pub fn reject_writes(&self, message: &str) {
        self.state.lock().unwrap().write_error = Some(message.to_string());
    }

    pub fn revert_writes(&self) {
        self.state.lock().unwrap().revert_writes = true;
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn chain_checks(&self) -> usize {
        self.state.lock().unwrap().chain_checks
    }

    fn read(&self, call: MockCall) -> BlockchainResult<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match &state.read_error {
            Some(message) => Err(BlockchainError::Rpc(message.clone())),
            None => Ok(()),
        }
    }

    fn write(&self, call: MockCall) -> BlockchainResult<TxOutcome> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if let Some(message) = &state.write_error {
            return Err(BlockchainError::Contract(message.clone()));
        }
        let tx_hash = TxHash::repeat_byte(state.calls.len() as u8);
        if state.revert_writes {
            return Err(BlockchainError::Reverted(tx_hash));
        }
        Ok(TxOutcome {
            tx_hash,
            block_number: Some(100 + state.calls.len() as u64),
        })
    }
}

#[async_trait]
impl VestingContract for MockContract {
    async fn chain_id(&self) -> BlockchainResult<ChainId> {
        let mut state = self.state.lock().unwrap();
        state.chain_checks += 1;
        match &state.chain_error {
            Some(message) => Err(BlockchainError::Rpc(message.clone())),
            None => Ok(ChainId(state.chain_id)),
        }
    }

    fn signer_address(&self) -> BlockchainResult<Address> {
        self.state
            .lock()
            .unwrap()
            .signer
            .ok_or(BlockchainError::NoSigner)
    }

    async fn get_my_balance(&self) -> BlockchainResult<U256> {
        self.read(MockCall::GetMyBalance)?;
        Ok(self.state.lock().unwrap().balance)
    }

    async fn whitelisted_balance_before_withdrawal(
        &self,
        company: Address,
    ) -> BlockchainResult<U256> {
        self.read(MockCall::WhitelistedBalance(company))?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .whitelist
            .get(&company)
            .copied()
            .unwrap_or_default())
    }

    async fn get_stakeholder(&self, company: Address) -> BlockchainResult<String> {
        self.read(MockCall::GetStakeholder(company))?;
        Ok(self.state.lock().unwrap().stakeholder.clone())
    }

    async fn get_token_period(&self, company: Address) -> BlockchainResult<U256> {
        self.read(MockCall::GetTokenPeriod(company))?;
        Ok(self.state.lock().unwrap().token_period)
    }

    async fn get_total_supply(&self) -> BlockchainResult<U256> {
        self.read(MockCall::GetTotalSupply)?;
        Ok(self.state.lock().unwrap().total_supply)
    }

    async fn register_company(
        &self,
        token_name: String,
        token_abbrev: String,
        total_supply: U256,
    ) -> BlockchainResult<TxOutcome> {
        self.write(MockCall::RegisterCompany {
            token_name,
            token_abbrev,
            total_supply,
        })
    }

    async fn set_stakeholder_and_period(
        &self,
        stakeholder: String,
        period: U256,
    ) -> BlockchainResult<TxOutcome> {
        self.write(MockCall::SetStakeholderAndPeriod { stakeholder, period })
    }

    async fn white_list_address(
        &self,
        address: Address,
        amount: U256,
    ) -> BlockchainResult<TxOutcome> {
        self.write(MockCall::WhiteListAddress { address, amount })
    }

    async fn claim_token(&self, company: Address) -> BlockchainResult<TxOutcome> {
        self.write(MockCall::ClaimToken(company))
    }
}

/// A session against `mock`, expecting Sepolia.
#[allow(dead_code)]
pub fn session(mock: &MockContract) -> Session<MockContract> {
    Session::new(mock.clone(), NetworkConfig::default())
}
