//! Session operations.
//!
//! Every network-bound operation runs the same protocol:
//!
//! ```text
//! validate form fields ──(empty/invalid)──▶ MissingInput / InvalidInput, no call
//!     → set busy flag
//!     → check chain ID ──(mismatch)──▶ WrongNetwork, no call
//!     → obtain signer (writes only)
//!     → parse addresses, call contract, await confirmation (writes only)
//!     → clear busy flag, store result or report error
//! ```

use std::str::FromStr;

use alloy::primitives::utils::{format_ether, parse_ether};
use alloy::primitives::{Address, U256};

use crate::blockchain::{ChainId, NetworkConfig, TxOutcome};
use crate::contract::VestingContract;
use crate::session::command::{Command, Confirmation, Notice};
use crate::session::error::{SessionError, SessionResult};
use crate::session::state::{BusyKind, FormFields, UiState};

/// One user's interaction with the vesting registry.
///
/// The contract handle is injected and owned for the session's lifetime.
pub struct Session<C> {
    contract: C,
    network: NetworkConfig,
    state: UiState,
}

impl<C: VestingContract> Session<C> {
    /// Create a session expecting the chain described by `network`.
    pub fn new(contract: C, network: NetworkConfig) -> Self {
        Self {
            contract,
            network,
            state: UiState::default(),
        }
    }

    /// Current session state.
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Mutable access to the form, for callers that fill fields one by one.
    pub fn form_mut(&mut self) -> &mut FormFields {
        &mut self.state.form
    }

    /// Copy the command's inputs into the form and run it.
    pub async fn execute(&mut self, command: Command) -> SessionResult<Notice> {
        let name = command.name();
        tracing::debug!(operation = name, "Executing command");

        let result = match command {
            Command::Connect => self
                .connect()
                .await
                .map(|chain_id| Notice::Connected { chain_id }),
            Command::MyBalance => self.get_my_balance().await.map(|value| Notice::Value {
                label: "Current balance",
                value,
            }),
            Command::WhitelistBalance { company_address } => {
                self.state.form.company_address_to_query = company_address;
                self.whitelisted_balance_before_withdrawal()
                    .await
                    .map(|value| Notice::Value {
                        label: "Whitelist balance",
                        value,
                    })
            }
            Command::RegisterCompany {
                token_name,
                token_abbrev,
                total_supply,
            } => {
                self.state.form.token_name = token_name;
                self.state.form.token_abbrev = token_abbrev;
                self.state.form.total_supply = total_supply;
                self.register_company().await.map(Notice::Confirmed)
            }
            Command::SetStakeholderAndPeriod {
                stakeholder_title,
                vesting_period,
            } => {
                self.state.form.stakeholder_name = stakeholder_title;
                self.state.form.vesting_period = vesting_period;
                self.set_stakeholder_and_period().await.map(Notice::Confirmed)
            }
            Command::WhiteListAddress { address, amount } => {
                self.state.form.address_to_whitelist = address;
                self.state.form.amount_to_offer = amount;
                self.white_list_address().await.map(Notice::Confirmed)
            }
            Command::ClaimToken { company_address } => {
                self.state.form.company_address = company_address;
                self.claim_token().await.map(Notice::Confirmed)
            }
            Command::Stakeholder { company_address } => {
                self.state.form.company_address_to_query = company_address;
                self.get_stakeholder().await.map(|value| Notice::Text {
                    label: "Stakeholder title",
                    value,
                })
            }
            Command::TokenPeriod { company_address } => {
                self.state.form.company_address_to_query = company_address;
                self.get_token_period().await.map(|raw| Notice::Period {
                    formatted: format_ether(raw),
                    raw,
                })
            }
            Command::TotalSupply => self.get_total_supply().await.map(|value| Notice::Value {
                label: "Total supply",
                value,
            }),
        };

        if let Err(e) = &result {
            tracing::warn!(operation = name, error = %e, "Operation failed");
        }
        result
    }

    /// Check the provider's chain and mark the session connected.
    pub async fn connect(&mut self) -> SessionResult<ChainId> {
        let chain_id = self.ensure_network().await?;
        tracing::info!(
            chain_id = %chain_id,
            network = %self.network.name,
            "Wallet connected"
        );
        Ok(chain_id)
    }

    /// `getMyBalance()`.
    pub async fn get_my_balance(&mut self) -> SessionResult<U256> {
        self.begin(BusyKind::Retrieve);
        let result = self.fetch_my_balance().await;
        let value = self.finish(BusyKind::Retrieve, result)?;
        self.state.results.current_balance = value;
        Ok(value)
    }

    /// `whitelistedBalanceBeforewithdrawal(companyAddressToQuery)`.
    pub async fn whitelisted_balance_before_withdrawal(&mut self) -> SessionResult<U256> {
        let company = self.state.form.company_address_to_query.clone();
        self.begin(BusyKind::Retrieve);
        let result = self.fetch_whitelist_balance(&company).await;
        let value = self.finish(BusyKind::Retrieve, result)?;
        self.state.results.whitelist_balance = value;
        Ok(value)
    }

    /// `getStakeholder(companyAddressToQuery)`.
    pub async fn get_stakeholder(&mut self) -> SessionResult<String> {
        let company = self.state.form.company_address_to_query.clone();
        self.begin(BusyKind::Retrieve);
        let result = self.fetch_stakeholder(&company).await;
        let value = self.finish(BusyKind::Retrieve, result)?;
        self.state.results.stakeholder = Some(value.clone());
        Ok(value)
    }

    /// `getTokenPeriod(companyAddressToQuery)`.
    pub async fn get_token_period(&mut self) -> SessionResult<U256> {
        let company = self.state.form.company_address_to_query.clone();
        self.begin(BusyKind::Retrieve);
        let result = self.fetch_token_period(&company).await;
        let value = self.finish(BusyKind::Retrieve, result)?;
        self.state.results.token_period = Some(value);
        Ok(value)
    }

    /// `getTotalSupply()`.
    pub async fn get_total_supply(&mut self) -> SessionResult<U256> {
        self.begin(BusyKind::Retrieve);
        let result = self.fetch_total_supply().await;
        let value = self.finish(BusyKind::Retrieve, result)?;
        self.state.results.total_supply = Some(value);
        Ok(value)
    }

    /// `registerCompany(tokenName, tokenAbbrev, totalSupply)`.
    pub async fn register_company(&mut self) -> SessionResult<Confirmation> {
        let form = &self.state.form;
        if form.token_name.is_empty() || form.token_abbrev.is_empty() {
            return Err(SessionError::MissingInput(
                "Please enter the token name and abbreviation",
            ));
        }
        let token_name = form.token_name.clone();
        let token_abbrev = form.token_abbrev.clone();
        let total_supply = parse_quantity("total supply", &form.total_supply)?;

        self.begin(BusyKind::Store);
        let result = self
            .submit_registration(token_name.clone(), token_abbrev, total_supply)
            .await;
        let outcome = self.finish(BusyKind::Store, result)?;

        Ok(Confirmation {
            message: format!("Company registered successfully {}", token_name),
            outcome,
        })
    }

    /// `setStakeholderAndPeriod(stakeholder, parseEther(vestingPeriod))`.
    pub async fn set_stakeholder_and_period(&mut self) -> SessionResult<Confirmation> {
        let form = &self.state.form;
        if form.stakeholder_name.is_empty() {
            return Err(SessionError::MissingInput("Please enter the stakeholder title"));
        }
        let stakeholder = form.stakeholder_name.clone();
        let period_text = form.vesting_period.trim().to_string();
        let period = parse_period(&period_text)?;

        self.begin(BusyKind::Store);
        let result = self.submit_stakeholder(stakeholder.clone(), period).await;
        let outcome = self.finish(BusyKind::Store, result)?;

        Ok(Confirmation {
            message: format!(
                "Stakeholder title successfully {}, vestation period is {}",
                stakeholder,
                if period_text.is_empty() { "0" } else { &period_text }
            ),
            outcome,
        })
    }

    /// `whiteListAddress(addressToWhitelist, amountToOffer)`.
    pub async fn white_list_address(&mut self) -> SessionResult<Confirmation> {
        let form = &self.state.form;
        if form.address_to_whitelist.is_empty() {
            return Err(SessionError::MissingInput("Please enter an address"));
        }
        let address = form.address_to_whitelist.clone();
        let amount = parse_quantity("amount", &form.amount_to_offer)?;

        self.begin(BusyKind::Store);
        let result = self.submit_whitelisting(&address, amount).await;
        let outcome = self.finish(BusyKind::Store, result)?;

        Ok(Confirmation {
            message: format!("{} successfully whitelisted, with amount {}", address, amount),
            outcome,
        })
    }

    /// `claimToken(companyAddress)`.
    pub async fn claim_token(&mut self) -> SessionResult<Confirmation> {
        if self.state.form.company_address.is_empty() {
            return Err(SessionError::MissingInput("Please enter an address"));
        }
        let company = self.state.form.company_address.clone();

        self.begin(BusyKind::Store);
        let result = self.submit_claim(&company).await;
        let outcome = self.finish(BusyKind::Store, result)?;

        Ok(Confirmation {
            message: "Token successfully claimed. Please check balance".to_string(),
            outcome,
        })
    }

    async fn fetch_my_balance(&mut self) -> SessionResult<U256> {
        self.ensure_network().await?;
        Ok(self.contract.get_my_balance().await?)
    }

    async fn fetch_whitelist_balance(&mut self, company: &str) -> SessionResult<U256> {
        self.ensure_network().await?;
        let company = parse_address(company)?;
        Ok(self.contract.whitelisted_balance_before_withdrawal(company).await?)
    }

    async fn fetch_stakeholder(&mut self, company: &str) -> SessionResult<String> {
        self.ensure_network().await?;
        let company = parse_address(company)?;
        Ok(self.contract.get_stakeholder(company).await?)
    }

    async fn fetch_token_period(&mut self, company: &str) -> SessionResult<U256> {
        self.ensure_network().await?;
        let company = parse_address(company)?;
        Ok(self.contract.get_token_period(company).await?)
    }

    async fn fetch_total_supply(&mut self) -> SessionResult<U256> {
        self.ensure_network().await?;
        Ok(self.contract.get_total_supply().await?)
    }

    async fn submit_registration(
        &mut self,
        token_name: String,
        token_abbrev: String,
        total_supply: U256,
    ) -> SessionResult<TxOutcome> {
        self.ensure_signer().await?;
        Ok(self
            .contract
            .register_company(token_name, token_abbrev, total_supply)
            .await?)
    }

    async fn submit_stakeholder(
        &mut self,
        stakeholder: String,
        period: U256,
    ) -> SessionResult<TxOutcome> {
        self.ensure_signer().await?;
        Ok(self.contract.set_stakeholder_and_period(stakeholder, period).await?)
    }

    async fn submit_whitelisting(
        &mut self,
        address: &str,
        amount: U256,
    ) -> SessionResult<TxOutcome> {
        self.ensure_signer().await?;
        let address = parse_address(address)?;
        Ok(self.contract.white_list_address(address, amount).await?)
    }

    async fn submit_claim(&mut self, company: &str) -> SessionResult<TxOutcome> {
        self.ensure_signer().await?;
        let company = parse_address(company)?;
        Ok(self.contract.claim_token(company).await?)
    }

    /// Network check plus signer lookup, as every write needs both.
    async fn ensure_signer(&mut self) -> SessionResult<()> {
        self.ensure_network().await?;
        let signer = self.contract.signer_address()?;
        tracing::debug!(signer = %signer, "Signer obtained");
        Ok(())
    }

    async fn ensure_network(&mut self) -> SessionResult<ChainId> {
        let chain_id = match self.contract.chain_id().await {
            Ok(chain_id) => chain_id,
            Err(e) => {
                self.state.connection.connected = false;
                return Err(e.into());
            }
        };
        self.state.connection.chain_id = Some(chain_id);

        if chain_id.0 != self.network.chain_id {
            self.state.connection.connected = false;
            tracing::warn!(
                expected = self.network.chain_id,
                actual = chain_id.0,
                "Connected to the wrong network"
            );
            return Err(SessionError::WrongNetwork {
                network: self.network.name.clone(),
                expected: self.network.chain_id,
                actual: chain_id.0,
            });
        }

        self.state.connection.connected = true;
        Ok(chain_id)
    }

    fn begin(&mut self, kind: BusyKind) {
        self.state.busy.set(kind, true);
    }

    fn finish<T>(&mut self, kind: BusyKind, result: SessionResult<T>) -> SessionResult<T> {
        self.state.busy.set(kind, false);
        result
    }
}

/// Parse an address the way the provider library would.
fn parse_address(input: &str) -> SessionResult<Address> {
    Address::from_str(input.trim()).map_err(|e| SessionError::InvalidAddress {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a whole-number quantity; an untouched field counts as zero.
fn parse_quantity(field: &'static str, input: &str) -> SessionResult<U256> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(input, 10).map_err(|e| SessionError::InvalidInput {
        field,
        reason: e.to_string(),
    })
}

/// Convert a decimal vesting period to 18-decimal base units.
fn parse_period(input: &str) -> SessionResult<U256> {
    let input = if input.is_empty() { "0" } else { input };
    parse_ether(input).map_err(|e| SessionError::InvalidInput {
        field: "vesting period",
        reason: e.to_string(),
    })
}
