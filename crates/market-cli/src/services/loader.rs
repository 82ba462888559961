//! Listing loader: the read path.

use futures::stream::{self, StreamExt};
use market_chain::{ChainError, MarketplaceInterface};
use market_pinning::MetadataGateway;
use market_types::{Listing, MarketNft, TokenMetadata};
use std::sync::Arc;
use tracing::{debug, warn};

/// Loads listed tokens and resolves their metadata into display records.
///
/// Per-record resolution failures are logged and dropped; a failure for one
/// listing never aborts the batch. Output order follows the on-chain query.
pub struct ListingLoader {
	chain: Arc<dyn MarketplaceInterface>,
	gateway: Arc<dyn MetadataGateway>,
	concurrency: usize,
}

impl ListingLoader {
	pub fn new(
		chain: Arc<dyn MarketplaceInterface>,
		gateway: Arc<dyn MetadataGateway>,
		concurrency: usize,
	) -> Self {
		Self {
			chain,
			gateway,
			concurrency: concurrency.max(1),
		}
	}

	/// Fetches all listings and resolves each one's metadata.
	///
	/// Resolution runs through an order-preserving bounded stream; the batch
	/// query itself failing is the only error this returns.
	pub async fn load(&self) -> Result<Vec<MarketNft>, ChainError> {
		let listings = self.chain.listed_nfts().await?;
		debug!(count = listings.len(), "Fetched listing batch");

		let resolved: Vec<Option<MarketNft>> = stream::iter(listings)
			.map(|listing| self.resolve(listing))
			.buffered(self.concurrency)
			.collect()
			.await;

		Ok(resolved.into_iter().flatten().collect())
	}

	/// Resolves one listing; failures are logged and mapped to `None`.
	async fn resolve(&self, listing: Listing) -> Option<MarketNft> {
		let token_id = listing.token_id;
		match self.resolve_metadata(&listing).await {
			Ok(metadata) => Some(MarketNft::merge(listing, metadata)),
			Err(err) => {
				warn!(%token_id, error = %err, "Dropping listing with unresolvable metadata");
				None
			},
		}
	}

	async fn resolve_metadata(&self, listing: &Listing) -> anyhow::Result<TokenMetadata> {
		let uri = self.chain.token_uri(listing.token_id).await?;
		let metadata = self.gateway.fetch(&uri).await?;
		Ok(metadata)
	}
}
