//! Domain records for marketplace listings and token metadata.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// An on-chain record offering a token for sale.
///
/// Produced by the marketplace contract's listing query. Immutable once
/// read; the client keeps a display-only copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
	/// Sale price in wei.
	pub price: U256,
	/// Identifier of the listed token.
	pub token_id: U256,
	/// Address that listed the token.
	pub seller: Address,
	/// Buyer/owner address recorded by the marketplace.
	pub buyer: Address,
}

/// Off-chain metadata document referenced by a token's URI.
///
/// The shape is not validated; absent fields stay `None` and surface as
/// missing display values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub image: Option<String>,
}

/// A listing merged with its resolved metadata, ready for display.
///
/// Constructed per load and discarded on reload; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketNft {
	pub price: U256,
	pub token_id: U256,
	pub seller: Address,
	pub owner: Address,
	pub name: Option<String>,
	pub description: Option<String>,
	pub image: Option<String>,
}

impl MarketNft {
	/// Merges a listing with its metadata document.
	pub fn merge(listing: Listing, metadata: TokenMetadata) -> Self {
		Self {
			price: listing.price,
			token_id: listing.token_id,
			seller: listing.seller,
			owner: listing.buyer,
			name: metadata.name,
			description: metadata.description,
			image: metadata.image,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn metadata_missing_fields_stay_absent() {
		let meta: TokenMetadata = serde_json::from_str(r#"{"name":"Rex"}"#).unwrap();
		assert_eq!(meta.name.as_deref(), Some("Rex"));
		assert_eq!(meta.description, None);
		assert_eq!(meta.image, None);
	}

	#[test]
	fn metadata_ignores_unknown_fields() {
		let meta: TokenMetadata =
			serde_json::from_str(r#"{"name":"Rex","attributes":[1,2]}"#).unwrap();
		assert_eq!(meta.name.as_deref(), Some("Rex"));
	}

	#[test]
	fn merge_carries_listing_and_metadata_fields() {
		let listing = Listing {
			price: U256::from(1_000_000_000_000_000_000u64),
			token_id: U256::from(3u64),
			seller: "0x1111111111111111111111111111111111111111"
				.parse()
				.unwrap(),
			buyer: "0x2222222222222222222222222222222222222222"
				.parse()
				.unwrap(),
		};
		let metadata = TokenMetadata {
			name: Some("Rex".to_string()),
			description: None,
			image: Some("https://ipfs.io/ipfs/QmRex".to_string()),
		};

		let nft = MarketNft::merge(listing.clone(), metadata);
		assert_eq!(nft.price, listing.price);
		assert_eq!(nft.token_id, listing.token_id);
		assert_eq!(nft.seller, listing.seller);
		assert_eq!(nft.owner, listing.buyer);
		assert_eq!(nft.name.as_deref(), Some("Rex"));
		assert_eq!(nft.description, None);
	}
}
