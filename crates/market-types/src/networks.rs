//! Per-network contract deployment records.
//!
//! The marketplace is deployed first and the collectible is deployed with
//! the marketplace's address as a constructor argument; the client only
//! consumes the resulting address pair for whichever network it connects to.

use alloy_primitives::Address;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Deployed contract addresses for a single network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
	/// Marketplace contract address.
	pub marketplace: Address,
	/// Collectible contract address.
	pub collectible: Address,
}

/// Deployment records keyed by chain id.
///
/// TOML tables key sections by string, so chain ids are parsed from string
/// keys during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworksConfig(HashMap<u64, Deployment>);

impl NetworksConfig {
	/// Returns the deployment record for a chain id, if configured.
	pub fn get(&self, chain_id: u64) -> Option<&Deployment> {
		self.0.get(&chain_id)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}
}

impl<'de> Deserialize<'de> for NetworksConfig {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = HashMap::<String, Deployment>::deserialize(deserializer)?;
		let mut deployments = HashMap::with_capacity(raw.len());
		for (key, deployment) in raw {
			let chain_id = key
				.parse::<u64>()
				.map_err(|_| serde::de::Error::custom(format!("invalid chain id '{key}'")))?;
			deployments.insert(chain_id, deployment);
		}
		Ok(Self(deployments))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Deserialize)]
	struct Wrapper {
		networks: NetworksConfig,
	}

	#[test]
	fn parses_string_chain_id_keys() {
		let wrapper: Wrapper = toml::from_str(
			r#"
			[networks.5777]
			marketplace = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
			collectible = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512"

			[networks.1337]
			marketplace = "0x1111111111111111111111111111111111111111"
			collectible = "0x2222222222222222222222222222222222222222"
			"#,
		)
		.unwrap();

		assert_eq!(wrapper.networks.len(), 2);
		let deployment = wrapper.networks.get(5777).unwrap();
		assert_eq!(
			deployment.marketplace,
			"0x5FbDB2315678afecb367f032d93F642f64180aa3"
				.parse::<Address>()
				.unwrap()
		);
		assert!(wrapper.networks.get(1).is_none());
	}

	#[test]
	fn rejects_non_numeric_chain_ids() {
		let result: Result<Wrapper, _> = toml::from_str(
			r#"
			[networks.mainnet]
			marketplace = "0x1111111111111111111111111111111111111111"
			collectible = "0x2222222222222222222222222222222222222222"
			"#,
		);
		assert!(result.is_err());
	}
}
