//! On-chain implementation of [`VestingContract`].

use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use alloy::sol;
use async_trait::async_trait;

use crate::blockchain::transaction::await_confirmation;
use crate::blockchain::{BlockchainClient, BlockchainError, BlockchainResult, ChainId, TxOutcome};
use crate::contract::VestingContract;

sol! {
    /// Company token registry with stakeholder vesting and whitelisting.
    #[sol(rpc)]
    interface IVestingRegistry {
        function claimToken(address _companyAddress) external;
        function getMyBalance() external view returns (uint256);
        function getStakeholder(address companyAddress) external view returns (string);
        function getTokenPeriod(address companyAddress) external view returns (uint256);
        function getTotalSupply() external view returns (uint256);
        function registerCompany(
            string _tokenName,
            string _tokenAbbrev,
            uint256 _totalSupply
        ) external;
        function setStakeholderAndPeriod(string _stakeholder, uint256 _period) external;
        function whiteListAddress(address _addressToBeWhiteListed, uint256 amount) external;
        function whitelistedBalanceBeforewithdrawal(address companyAddress)
            external
            view
            returns (uint256);
    }
}

/// Vesting registry reached through a [`BlockchainClient`].
#[derive(Clone)]
pub struct OnchainRegistry {
    client: BlockchainClient,
    instance: IVestingRegistry::IVestingRegistryInstance<DynProvider>,
}

impl OnchainRegistry {
    /// Bind the registry at `address` to the client's provider.
    pub fn new(client: BlockchainClient, address: Address) -> Self {
        let instance = IVestingRegistry::new(address, client.provider().clone());
        tracing::debug!(contract = %address, "Vesting registry bound");
        Self { client, instance }
    }

    /// Address of the bound contract.
    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    /// `from` for view calls. Views keyed on `msg.sender` need the signer;
    /// without one the zero address is what a bare `eth_call` would use.
    fn caller(&self) -> Address {
        self.client.account().unwrap_or(Address::ZERO)
    }
}

fn contract_error(e: alloy::contract::Error) -> BlockchainError {
    BlockchainError::Contract(e.to_string())
}

#[async_trait]
impl VestingContract for OnchainRegistry {
    async fn chain_id(&self) -> BlockchainResult<ChainId> {
        self.client.get_chain_id().await
    }

    fn signer_address(&self) -> BlockchainResult<Address> {
        self.client.account().ok_or(BlockchainError::NoSigner)
    }

    async fn get_my_balance(&self) -> BlockchainResult<U256> {
        let call = self.instance.getMyBalance().from(self.caller());
        self.client
            .with_timeout(call.call())
            .await?
            .map_err(contract_error)
    }

    async fn whitelisted_balance_before_withdrawal(
        &self,
        company: Address,
    ) -> BlockchainResult<U256> {
        let call = self
            .instance
            .whitelistedBalanceBeforewithdrawal(company)
            .from(self.caller());
        self.client
            .with_timeout(call.call())
            .await?
            .map_err(contract_error)
    }

    async fn get_stakeholder(&self, company: Address) -> BlockchainResult<String> {
        let call = self.instance.getStakeholder(company).from(self.caller());
        self.client
            .with_timeout(call.call())
            .await?
            .map_err(contract_error)
    }

    async fn get_token_period(&self, company: Address) -> BlockchainResult<U256> {
        let call = self.instance.getTokenPeriod(company).from(self.caller());
        self.client
            .with_timeout(call.call())
            .await?
            .map_err(contract_error)
    }

    async fn get_total_supply(&self) -> BlockchainResult<U256> {
        let call = self.instance.getTotalSupply().from(self.caller());
        self.client
            .with_timeout(call.call())
            .await?
            .map_err(contract_error)
    }

    async fn register_company(
        &self,
        token_name: String,
        token_abbrev: String,
        total_supply: U256,
    ) -> BlockchainResult<TxOutcome> {
        let pending = self
            .instance
            .registerCompany(token_name, token_abbrev, total_supply)
            .from(self.signer_address()?)
            .send()
            .await
            .map_err(contract_error)?;
        await_confirmation(pending, self.client.confirmation_blocks()).await
    }

    async fn set_stakeholder_and_period(
        &self,
        stakeholder: String,
        period: U256,
    ) -> BlockchainResult<TxOutcome> {
        let pending = self
            .instance
            .setStakeholderAndPeriod(stakeholder, period)
            .from(self.signer_address()?)
            .send()
            .await
            .map_err(contract_error)?;
        await_confirmation(pending, self.client.confirmation_blocks()).await
    }

    async fn white_list_address(
        &self,
        address: Address,
        amount: U256,
    ) -> BlockchainResult<TxOutcome> {
        let pending = self
            .instance
            .whiteListAddress(address, amount)
            .from(self.signer_address()?)
            .send()
            .await
            .map_err(contract_error)?;
        await_confirmation(pending, self.client.confirmation_blocks()).await
    }

    async fn claim_token(&self, company: Address) -> BlockchainResult<TxOutcome> {
        let pending = self
            .instance
            .claimToken(company)
            .from(self.signer_address()?)
            .send()
            .await
            .map_err(contract_error)?;
        await_confirmation(pending, self.client.confirmation_blocks()).await
    }
}

impl std::fmt::Debug for OnchainRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnchainRegistry")
            .field("address", &self.address())
            .field("client", &self.client)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::NetworkConfig;
    use alloy::sol_types::SolCall;

    fn registry() -> OnchainRegistry {
        let config = NetworkConfig {
            rpc_url: "http://127.0.0.1:1".to_string(),
            ..NetworkConfig::default()
        };
        let client = BlockchainClient::new(config, None).unwrap();
        OnchainRegistry::new(client, Address::repeat_byte(0xab))
    }

    #[test]
    fn test_selectors_match_deployed_abi() {
        assert_eq!(
            IVestingRegistry::getMyBalanceCall::SIGNATURE,
            "getMyBalance()"
        );
        assert_eq!(
            IVestingRegistry::registerCompanyCall::SIGNATURE,
            "registerCompany(string,string,uint256)"
        );
        assert_eq!(
            IVestingRegistry::whitelistedBalanceBeforewithdrawalCall::SIGNATURE,
            "whitelistedBalanceBeforewithdrawal(address)"
        );
        assert_eq!(
            IVestingRegistry::whiteListAddressCall::SIGNATURE,
            "whiteListAddress(address,uint256)"
        );
    }

    #[test]
    fn test_register_company_encoding() {
        let call = IVestingRegistry::registerCompanyCall {
            _tokenName: "Acme".to_string(),
            _tokenAbbrev: "ACM".to_string(),
            _totalSupply: U256::from(5000),
        };
        let data = call.abi_encode();
        assert_eq!(&data[..4], IVestingRegistry::registerCompanyCall::SELECTOR.as_slice());
        // selector + three head words + two (length, data) string tails
        assert_eq!(data.len(), 4 + 32 * 3 + 32 * 4);
    }

    #[test]
    fn test_read_only_registry_has_no_signer() {
        let registry = registry();
        assert_eq!(registry.address(), Address::repeat_byte(0xab));
        assert!(matches!(
            registry.signer_address(),
            Err(BlockchainError::NoSigner)
        ));
        assert_eq!(registry.caller(), Address::ZERO);
    }

    #[tokio::test]
    async fn test_write_without_signer_fails_before_send() {
        let registry = registry();
        let result = registry.claim_token(Address::repeat_byte(0x01)).await;
        assert!(matches!(result, Err(BlockchainError::NoSigner)));
    }
}
