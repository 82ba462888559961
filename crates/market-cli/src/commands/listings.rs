//! Listing loader command.

use crate::display;
use crate::error::Result;
use crate::services::ListingLoader;

pub async fn handle(loader: &ListingLoader, json: bool) -> Result<()> {
	let nfts = loader.load().await?;

	if json {
		println!("{}", serde_json::to_string_pretty(&nfts)?);
		return Ok(());
	}

	if nfts.is_empty() {
		println!("No listings available");
		return Ok(());
	}

	display::header("Listed NFTs");
	for nft in &nfts {
		display::nft(nft);
	}
	Ok(())
}
