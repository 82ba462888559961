//! Alloy-backed implementation of the marketplace interface.

use alloy_network::EthereumWallet;
use alloy_primitives::{Address, Bytes, B256, U256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_rpc_types::{TransactionReceipt, TransactionRequest};
use alloy_signer_local::PrivateKeySigner;
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use market_types::{Listing, NetworksConfig, SecretString};
use tracing::{debug, info, warn};

use crate::{
	contracts::{self, ICollectible, IMarketplace},
	ChainError, MarketplaceInterface, MintOutcome,
};

/// Connection handle bound to one network's marketplace deployment.
///
/// Construction resolves the active chain id and the deployment record for
/// it; the handle is then passed explicitly to every component that needs
/// chain access.
#[derive(Clone)]
pub struct ChainClient {
	provider: DynProvider,
	marketplace: Address,
	collectible: Address,
	caller: Option<Address>,
	gas_limit: u64,
}

impl ChainClient {
	/// Connects to the RPC endpoint and binds the active network's deployment.
	///
	/// A signing key is only required for the write path; read-only use can
	/// pass `None`.
	pub async fn connect(
		rpc_url: &str,
		private_key: Option<&SecretString>,
		networks: &NetworksConfig,
		gas_limit: u64,
	) -> Result<Self, ChainError> {
		let url = rpc_url
			.parse()
			.map_err(|e| ChainError::Network(format!("Invalid RPC URL {rpc_url}: {e}")))?;

		let (provider, caller) = match private_key {
			Some(key) => {
				let signer = key.with_exposed(|raw| {
					raw.parse::<PrivateKeySigner>()
						.map_err(|_| ChainError::InvalidPrivateKey)
				})?;
				let caller = signer.address();
				let wallet = EthereumWallet::from(signer);
				let provider = ProviderBuilder::new()
					.wallet(wallet)
					.connect_http(url)
					.erased();
				(provider, Some(caller))
			},
			None => {
				let provider = ProviderBuilder::new().connect_http(url).erased();
				(provider, None)
			},
		};

		let chain_id = provider
			.get_chain_id()
			.await
			.map_err(|e| ChainError::Network(format!("Failed to resolve network id: {e}")))?;
		let deployment = networks
			.get(chain_id)
			.ok_or(ChainError::DeploymentNotFound(chain_id))?;

		info!(chain_id, "Connected to marketplace network");

		Ok(Self {
			provider,
			marketplace: deployment.marketplace,
			collectible: deployment.collectible,
			caller,
			gas_limit,
		})
	}

	async fn read(&self, to: Address, data: Vec<u8>) -> Result<Bytes, ChainError> {
		let request = TransactionRequest::default().to(to).input(data.into());
		self.provider
			.call(request)
			.await
			.map_err(|e| ChainError::CallFailed(e.to_string()))
	}

	fn write_request(&self, to: Address, data: Vec<u8>) -> Result<TransactionRequest, ChainError> {
		let caller = self.caller.ok_or(ChainError::AccountMissing)?;
		Ok(TransactionRequest::default()
			.from(caller)
			.to(to)
			.input(data.into())
			.gas_limit(self.gas_limit))
	}

	fn list_request(
		&self,
		token_id: U256,
		price: U256,
		fee: U256,
	) -> Result<TransactionRequest, ChainError> {
		let data = IMarketplace::listNftCall {
			nftContract: self.collectible,
			tokenId: token_id,
			price,
		}
		.abi_encode();
		Ok(self.write_request(self.marketplace, data)?.value(fee))
	}

	async fn send_and_wait(
		&self,
		request: TransactionRequest,
		label: &str,
	) -> Result<TransactionReceipt, ChainError> {
		let pending = self
			.provider
			.send_transaction(request)
			.await
			.map_err(|e| ChainError::Network(format!("Failed to send {label} transaction: {e}")))?;
		let tx_hash = *pending.tx_hash();
		debug!(label, tx = %tx_hash, "Transaction submitted");

		let receipt = pending.get_receipt().await.map_err(|e| {
			ChainError::Network(format!("Failed to confirm {label} transaction: {e}"))
		})?;
		if !receipt.status() {
			return Err(ChainError::TransactionFailed(format!(
				"{label} transaction {tx_hash} reverted"
			)));
		}
		Ok(receipt)
	}
}

#[async_trait]
impl MarketplaceInterface for ChainClient {
	async fn listed_nfts(&self) -> Result<Vec<Listing>, ChainError> {
		let data = IMarketplace::getListedNftsCall {}.abi_encode();
		let raw = self.read(self.marketplace, data).await?;
		let tokens = IMarketplace::getListedNftsCall::abi_decode_returns(&raw)
			.map_err(|e| ChainError::CallFailed(format!("undecodable listing batch: {e}")))?;
		Ok(tokens.into_iter().map(Into::into).collect())
	}

	async fn token_uri(&self, token_id: U256) -> Result<String, ChainError> {
		let data = ICollectible::tokenURICall { tokenId: token_id }.abi_encode();
		let raw = self.read(self.collectible, data).await?;
		ICollectible::tokenURICall::abi_decode_returns(&raw)
			.map_err(|e| ChainError::CallFailed(format!("undecodable token URI: {e}")))
	}

	async fn listing_fee(&self) -> Result<U256, ChainError> {
		let data = IMarketplace::getListingFeeCall {}.abi_encode();
		let raw = self.read(self.marketplace, data).await?;
		IMarketplace::getListingFeeCall::abi_decode_returns(&raw)
			.map_err(|e| ChainError::CallFailed(format!("undecodable listing fee: {e}")))
	}

	async fn mint(&self, metadata_url: &str) -> Result<MintOutcome, ChainError> {
		let data = ICollectible::mintCall {
			metadataUrl: metadata_url.to_string(),
		}
		.abi_encode();
		let request = self.write_request(self.collectible, data)?;
		let receipt = self.send_and_wait(request, "mint").await?;

		let token_id =
			contracts::minted_token_id(receipt.inner.logs().iter().map(|log| &log.inner))?;
		info!(%token_id, tx = %receipt.transaction_hash, "Minted collectible");

		Ok(MintOutcome {
			tx_hash: receipt.transaction_hash,
			token_id,
		})
	}

	async fn list_nft(&self, token_id: U256, price: U256, fee: U256) -> Result<B256, ChainError> {
		let request = self.list_request(token_id, price, fee)?;
		let receipt = self.send_and_wait(request, "list").await?;
		info!(%token_id, tx = %receipt.transaction_hash, "Listed collectible for sale");
		Ok(receipt.transaction_hash)
	}

	async fn list_nft_detached(
		&self,
		token_id: U256,
		price: U256,
		fee: U256,
	) -> Result<B256, ChainError> {
		let request = self.list_request(token_id, price, fee)?;
		let pending = self
			.provider
			.send_transaction(request)
			.await
			.map_err(|e| ChainError::Network(format!("Failed to send list transaction: {e}")))?;
		let tx_hash = *pending.tx_hash();
		warn!(%token_id, tx = %tx_hash, "List transaction submitted without awaiting confirmation");
		Ok(tx_hash)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::TxKind;

	fn test_client(caller: Option<Address>) -> ChainClient {
		let provider = ProviderBuilder::new()
			.connect_http("http://127.0.0.1:1".parse().unwrap())
			.erased();
		ChainClient {
			provider,
			marketplace: Address::repeat_byte(0x0a),
			collectible: Address::repeat_byte(0x0b),
			caller,
			gas_limit: 2_000_000,
		}
	}

	#[test]
	fn write_request_requires_an_account() {
		let client = test_client(None);
		assert!(matches!(
			client.write_request(Address::repeat_byte(0x0a), vec![]),
			Err(ChainError::AccountMissing)
		));
	}

	#[test]
	fn list_request_carries_value_gas_and_target() {
		let client = test_client(Some(Address::repeat_byte(0x01)));
		let request = client
			.list_request(U256::from(3u64), U256::from(10u64), U256::from(5u64))
			.unwrap();

		assert_eq!(request.to, Some(TxKind::Call(Address::repeat_byte(0x0a))));
		assert_eq!(request.value, Some(U256::from(5u64)));
		assert_eq!(request.gas, Some(2_000_000));
		assert_eq!(request.from, Some(Address::repeat_byte(0x01)));
	}
}
