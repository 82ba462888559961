//! Configuration for the marketplace client.
//!
//! Loaded from a TOML file; the RPC endpoint and credentials can be
//! overridden through environment variables so a local chain can be pointed
//! at without editing the file.

use market_pinning::PinningConfig;
use market_types::{NetworksConfig, SecretString};
use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};

/// Top-level configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	/// Chain RPC endpoint.
	#[serde(default)]
	pub rpc: RpcConfig,
	/// Signing account.
	#[serde(default)]
	pub account: AccountConfig,
	/// Contract deployments per network.
	pub networks: NetworksConfig,
	/// Pinning service endpoints and credentials.
	#[serde(default)]
	pub pinning: PinningConfig,
	/// Sale and fan-out parameters.
	#[serde(default)]
	pub listing: ListingConfig,
}

/// Chain RPC endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcConfig {
	#[serde(default = "default_rpc_url")]
	pub url: String,
}

impl Default for RpcConfig {
	fn default() -> Self {
		Self {
			url: default_rpc_url(),
		}
	}
}

fn default_rpc_url() -> String {
	"http://127.0.0.1:7545".to_string()
}

/// Signing account configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountConfig {
	/// Private key of the signing account; write operations require it.
	#[serde(default)]
	pub private_key: Option<SecretString>,
}

/// Sale and fan-out parameters for the write and read paths.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingConfig {
	/// Sale price in native units for newly listed tokens.
	#[serde(default = "default_sale_price")]
	pub sale_price_eth: String,
	/// Gas allowance for the mint and list transactions.
	#[serde(default = "default_gas_limit")]
	pub gas_limit: u64,
	/// Concurrent metadata resolutions while loading listings.
	#[serde(default = "default_metadata_concurrency")]
	pub metadata_concurrency: usize,
}

impl Default for ListingConfig {
	fn default() -> Self {
		Self {
			sale_price_eth: default_sale_price(),
			gas_limit: default_gas_limit(),
			metadata_concurrency: default_metadata_concurrency(),
		}
	}
}

fn default_sale_price() -> String {
	"1".to_string()
}

fn default_gas_limit() -> u64 {
	2_000_000
}

fn default_metadata_concurrency() -> usize {
	8
}

impl Config {
	/// Loads a configuration file and applies environment overrides.
	pub async fn from_file(path: &Path) -> Result<Self> {
		if !path.exists() {
			return Err(Error::ConfigNotFound(path.to_path_buf()));
		}
		let raw = tokio::fs::read_to_string(path).await?;
		let mut config = Self::from_toml_str(&raw)?;
		config.apply_env_overrides(|name| std::env::var(name).ok());
		Ok(config)
	}

	/// Parses a configuration document.
	pub fn from_toml_str(raw: &str) -> Result<Self> {
		toml::from_str(raw).map_err(|e| Error::InvalidConfig(e.message().to_string()))
	}

	/// Applies environment overrides through the provided lookup.
	///
	/// `HOST` and `HOST_PORT` rebuild the RPC URL; `PINATA_API_KEY` and
	/// `PINATA_API_SECRET_KEY` supply the pinning credentials;
	/// `MARKET_PRIVATE_KEY` supplies the signing account.
	pub fn apply_env_overrides(&mut self, get: impl Fn(&str) -> Option<String>) {
		let host = get("HOST");
		let port = get("HOST_PORT");
		if host.is_some() || port.is_some() {
			let host = host.unwrap_or_else(|| "127.0.0.1".to_string());
			let port = port.unwrap_or_else(|| "7545".to_string());
			self.rpc.url = format!("http://{host}:{port}");
		}
		if let Some(key) = get("PINATA_API_KEY") {
			self.pinning.api_key = Some(SecretString::from(key));
		}
		if let Some(secret) = get("PINATA_API_SECRET_KEY") {
			self.pinning.secret_api_key = Some(SecretString::from(secret));
		}
		if let Some(key) = get("MARKET_PRIVATE_KEY") {
			self.account.private_key = Some(SecretString::from(key));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	const MINIMAL: &str = r#"
		[networks.5777]
		marketplace = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
		collectible = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512"
	"#;

	#[test]
	fn minimal_config_gets_defaults() {
		let config = Config::from_toml_str(MINIMAL).unwrap();
		assert_eq!(config.rpc.url, "http://127.0.0.1:7545");
		assert_eq!(config.listing.sale_price_eth, "1");
		assert_eq!(config.listing.gas_limit, 2_000_000);
		assert_eq!(config.listing.metadata_concurrency, 8);
		assert!(config.account.private_key.is_none());
		assert!(config.pinning.api_key.is_none());
	}

	#[test]
	fn full_config_parses() {
		let config = Config::from_toml_str(
			r#"
			[rpc]
			url = "http://10.0.0.5:8545"

			[account]
			private_key = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"

			[networks.1337]
			marketplace = "0x1111111111111111111111111111111111111111"
			collectible = "0x2222222222222222222222222222222222222222"

			[pinning]
			api_url = "https://pin.example.com"
			gateway_url = "https://gw.example.com/ipfs"
			api_key = "k"
			secret_api_key = "s"

			[listing]
			sale_price_eth = "0.5"
			gas_limit = 3000000
			metadata_concurrency = 2
			"#,
		)
		.unwrap();

		assert_eq!(config.rpc.url, "http://10.0.0.5:8545");
		assert!(config.networks.get(1337).is_some());
		assert_eq!(config.pinning.api_url, "https://pin.example.com");
		assert_eq!(config.listing.sale_price_eth, "0.5");
		assert_eq!(config.listing.metadata_concurrency, 2);
	}

	#[test]
	fn missing_networks_section_is_an_error() {
		assert!(Config::from_toml_str("[rpc]\nurl = \"http://localhost:7545\"").is_err());
	}

	#[test]
	fn host_env_rebuilds_rpc_url() {
		let mut config = Config::from_toml_str(MINIMAL).unwrap();
		let env: HashMap<&str, &str> =
			HashMap::from([("HOST", "192.168.0.9"), ("HOST_PORT", "8545")]);
		config.apply_env_overrides(|name| env.get(name).map(|v| v.to_string()));
		assert_eq!(config.rpc.url, "http://192.168.0.9:8545");
	}

	#[test]
	fn partial_host_env_falls_back_to_defaults() {
		let mut config = Config::from_toml_str(MINIMAL).unwrap();
		let env: HashMap<&str, &str> = HashMap::from([("HOST_PORT", "9545")]);
		config.apply_env_overrides(|name| env.get(name).map(|v| v.to_string()));
		assert_eq!(config.rpc.url, "http://127.0.0.1:9545");
	}

	#[test]
	fn credential_env_overrides_apply() {
		let mut config = Config::from_toml_str(MINIMAL).unwrap();
		let env: HashMap<&str, &str> = HashMap::from([
			("PINATA_API_KEY", "key"),
			("PINATA_API_SECRET_KEY", "secret"),
			("MARKET_PRIVATE_KEY", "0xabc"),
		]);
		config.apply_env_overrides(|name| env.get(name).map(|v| v.to_string()));
		assert!(config.pinning.api_key.is_some());
		assert!(config.pinning.secret_api_key.is_some());
		assert!(config.account.private_key.is_some());
	}

	#[test]
	fn no_env_leaves_config_untouched() {
		let mut config = Config::from_toml_str(MINIMAL).unwrap();
		config.apply_env_overrides(|_| None);
		assert_eq!(config.rpc.url, "http://127.0.0.1:7545");
		assert!(config.pinning.api_key.is_none());
	}
}
