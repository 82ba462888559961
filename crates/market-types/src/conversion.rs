//! Price conversion between wei and display units.
//!
//! Listings carry prices in the chain's smallest unit; display output and
//! configuration use whole native units. Both directions wrap alloy's ether
//! formatting helpers so the conversion round-trips exactly.

use alloy_primitives::{
	utils::{format_ether, parse_ether},
	U256,
};

/// Formats a wei price as a native-unit decimal string.
pub fn format_price(wei: U256) -> String {
	format_ether(wei)
}

/// Parses a native-unit decimal string into a wei price.
pub fn parse_price(display: &str) -> Result<U256, String> {
	parse_ether(display).map_err(|e| format!("invalid price '{display}': {e}"))
}
