//! Chain access for the NFT marketplace client.
//!
//! This crate owns the connection to the blockchain node and the marketplace
//! and collectible contract bindings. The [`MarketplaceInterface`] trait is
//! the seam the orchestration layers depend on; [`ChainClient`] is the
//! alloy-backed implementation.

use alloy_primitives::{B256, U256};
use async_trait::async_trait;
use market_types::Listing;
use thiserror::Error;

pub mod client;
pub mod contracts;

pub use client::ChainClient;

/// Errors that can occur during chain operations.
#[derive(Debug, Error)]
pub enum ChainError {
	/// Network communication with the RPC endpoint failed.
	#[error("Network error: {0}")]
	Network(String),
	/// No deployment record is configured for the active network.
	#[error("No deployment record for network {0}")]
	DeploymentNotFound(u64),
	/// A read-only contract call failed or returned undecodable data.
	#[error("Contract call failed: {0}")]
	CallFailed(String),
	/// A submitted transaction failed or reverted.
	#[error("Transaction failed: {0}")]
	TransactionFailed(String),
	/// The mint receipt carried no recognizable mint event.
	#[error("Mint receipt carries no mint event")]
	MintEventMissing,
	/// No signing account is configured for write operations.
	#[error("No signing account configured")]
	AccountMissing,
	/// The configured signing key could not be parsed.
	#[error("Invalid private key")]
	InvalidPrivateKey,
}

/// Outcome of an awaited mint transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintOutcome {
	/// Hash of the mint transaction.
	pub tx_hash: B256,
	/// Token id taken from the first value of the emitted mint event.
	pub token_id: U256,
}

/// Contract operations the orchestration layers depend on.
///
/// Implemented by [`ChainClient`] against a live node; tests substitute stub
/// implementations.
#[async_trait]
pub trait MarketplaceInterface: Send + Sync {
	/// Returns all currently listed tokens, in contract order.
	async fn listed_nfts(&self) -> Result<Vec<Listing>, ChainError>;

	/// Returns the metadata URI recorded for a token.
	async fn token_uri(&self, token_id: U256) -> Result<String, ChainError>;

	/// Reads the marketplace's current listing fee.
	async fn listing_fee(&self) -> Result<U256, ChainError>;

	/// Submits a mint transaction and waits for its receipt.
	///
	/// Returns the minted token id extracted from the receipt's mint event.
	async fn mint(&self, metadata_url: &str) -> Result<MintOutcome, ChainError>;

	/// Submits a list transaction paying `fee` and waits for its receipt.
	async fn list_nft(&self, token_id: U256, price: U256, fee: U256) -> Result<B256, ChainError>;

	/// Submits a list transaction without waiting for its confirmation.
	///
	/// Detaching from the confirmation is the caller's explicit choice; the
	/// returned hash is the only acknowledgement.
	async fn list_nft_detached(
		&self,
		token_id: U256,
		price: U256,
		fee: U256,
	) -> Result<B256, ChainError>;
}
