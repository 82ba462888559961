//! Mint-and-list flow: the write path.

use alloy_primitives::{B256, U256};
use market_chain::{MarketplaceInterface, MintOutcome};
use market_pinning::PinningInterface;
use market_types::TokenMetadata;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::error::Result;

/// Result of a completed mint-and-list run.
#[derive(Debug, Clone)]
pub struct MintAndListOutcome {
	pub asset_url: String,
	pub metadata_url: String,
	pub token_id: U256,
	pub mint_tx: B256,
	pub list_tx: B256,
	/// False when the listing confirmation was explicitly detached.
	pub list_confirmed: bool,
}

/// Sequential mint-and-list orchestration.
///
/// Upload the asset, upload the metadata document, read the listing fee,
/// mint, then list the minted token. Every step is awaited and checked; the
/// first failure aborts the flow, so no transaction is ever built from a
/// failed upload.
pub struct MintAndList {
	chain: Arc<dyn MarketplaceInterface>,
	pinning: Arc<dyn PinningInterface>,
	sale_price: U256,
}

impl MintAndList {
	pub fn new(
		chain: Arc<dyn MarketplaceInterface>,
		pinning: Arc<dyn PinningInterface>,
		sale_price: U256,
	) -> Self {
		Self {
			chain,
			pinning,
			sale_price,
		}
	}

	/// Runs the flow for one asset.
	///
	/// With `detach_listing`, the final list transaction is submitted but
	/// its confirmation is not awaited.
	pub async fn run(
		&self,
		file: &Path,
		name: &str,
		description: &str,
		detach_listing: bool,
	) -> Result<MintAndListOutcome> {
		let asset_url = self.pinning.pin_file(file).await?;
		info!(%asset_url, "Asset pinned");

		let metadata = TokenMetadata {
			name: Some(name.to_string()),
			description: Some(description.to_string()),
			image: Some(asset_url.clone()),
		};
		let metadata_url = self
			.pinning
			.pin_json(serde_json::to_value(&metadata)?)
			.await?;
		info!(%metadata_url, "Metadata pinned");

		let fee = self.chain.listing_fee().await?;
		let MintOutcome {
			tx_hash: mint_tx,
			token_id,
		} = self.chain.mint(&metadata_url).await?;

		let (list_tx, list_confirmed) = if detach_listing {
			let hash = self
				.chain
				.list_nft_detached(token_id, self.sale_price, fee)
				.await?;
			(hash, false)
		} else {
			let hash = self.chain.list_nft(token_id, self.sale_price, fee).await?;
			(hash, true)
		};

		Ok(MintAndListOutcome {
			asset_url,
			metadata_url,
			token_id,
			mint_tx,
			list_tx,
			list_confirmed,
		})
	}
}
