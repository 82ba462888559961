//! Contract bindings for the marketplace and collectible contracts.
//!
//! Only the surface this client touches is bound: the marketplace's listing
//! query, fee read and list call, the collectible's token URI read and mint
//! call, and the mint event carrying the new token id.

use alloy_primitives::{Log, U256};
use alloy_sol_types::{sol, SolEvent};
use market_types::Listing;

use crate::ChainError;

sol! {
	/// A listed token as returned by the marketplace query.
	struct ListedToken {
		uint256 price;
		uint256 tokenId;
		address seller;
		address buyer;
	}

	interface IMarketplace {
		function getListedNfts() external view returns (ListedToken[] memory);
		function getListingFee() external view returns (uint256);
		function listNft(address nftContract, uint256 tokenId, uint256 price) external payable;
	}

	interface ICollectible {
		function tokenURI(uint256 tokenId) external view returns (string memory);
		function mint(string memory metadataUrl) external returns (uint256);
	}

	/// Emitted by the collectible contract on mint; the token id is the
	/// event's first value.
	event NFTMinted(uint256 tokenId);
}

impl From<ListedToken> for Listing {
	fn from(value: ListedToken) -> Self {
		Self {
			price: value.price,
			token_id: value.tokenId,
			seller: value.seller,
			buyer: value.buyer,
		}
	}
}

/// Extracts the minted token id from a receipt's logs.
///
/// Scans for the first mint event and returns its first value verbatim.
pub fn minted_token_id<'a>(logs: impl IntoIterator<Item = &'a Log>) -> Result<U256, ChainError> {
	for log in logs {
		if log.data.topics().first() == Some(&NFTMinted::SIGNATURE_HASH) {
			let event = NFTMinted::decode_log_data(&log.data)
				.map_err(|e| ChainError::CallFailed(format!("undecodable mint event: {e}")))?;
			return Ok(event.tokenId);
		}
	}
	Err(ChainError::MintEventMissing)
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::{Address, Bytes, LogData, B256};
	use alloy_sol_types::SolValue;

	fn mint_log(token_id: u64) -> Log {
		Log {
			address: Address::repeat_byte(0x22),
			data: LogData::new_unchecked(
				vec![NFTMinted::SIGNATURE_HASH],
				Bytes::from(U256::from(token_id).abi_encode()),
			),
		}
	}

	fn unrelated_log() -> Log {
		Log {
			address: Address::repeat_byte(0x33),
			data: LogData::new_unchecked(vec![B256::repeat_byte(0xab)], Bytes::new()),
		}
	}

	#[test]
	fn minted_token_id_reads_the_event_value() {
		let logs = vec![unrelated_log(), mint_log(7)];
		assert_eq!(minted_token_id(&logs).unwrap(), U256::from(7u64));
	}

	#[test]
	fn minted_token_id_takes_the_first_matching_event() {
		let logs = vec![mint_log(1), mint_log(2)];
		assert_eq!(minted_token_id(&logs).unwrap(), U256::from(1u64));
	}

	#[test]
	fn minted_token_id_errors_without_the_event() {
		let logs = vec![unrelated_log()];
		assert!(matches!(
			minted_token_id(&logs),
			Err(ChainError::MintEventMissing)
		));
	}

	#[test]
	fn listed_tokens_round_trip_through_abi() {
		let tokens = vec![
			ListedToken {
				price: U256::from(1_000u64),
				tokenId: U256::from(1u64),
				seller: Address::repeat_byte(0x11),
				buyer: Address::ZERO,
			},
			ListedToken {
				price: U256::from(2_000u64),
				tokenId: U256::from(2u64),
				seller: Address::repeat_byte(0x44),
				buyer: Address::repeat_byte(0x55),
			},
		];

		let encoded = tokens.abi_encode();
		let decoded = Vec::<ListedToken>::abi_decode(&encoded).unwrap();
		assert_eq!(decoded.len(), 2);
		assert_eq!(decoded[0].tokenId, U256::from(1u64));
		assert_eq!(decoded[1].price, U256::from(2_000u64));

		let listing: Listing = decoded.into_iter().next().unwrap().into();
		assert_eq!(listing.token_id, U256::from(1u64));
		assert_eq!(listing.seller, Address::repeat_byte(0x11));
		assert_eq!(listing.buyer, Address::ZERO);
	}
}
