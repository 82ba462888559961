//! HTTP client for the pinning service.

use async_trait::async_trait;
use market_types::SecretString;
use reqwest::{
	header::{HeaderMap, HeaderValue},
	multipart, Client, Response,
};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::{PinningError, PinningInterface};

const FILE_PIN_ROUTE: &str = "/pinning/pinFileToIPFS";
const JSON_PIN_ROUTE: &str = "/pinning/pinJSONToIPFS";

/// Pinning service endpoints and credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct PinningConfig {
	/// Base URL of the pinning API.
	#[serde(default = "default_api_url")]
	pub api_url: String,
	/// Gateway prefix used to build retrievable URLs for pinned hashes.
	#[serde(default = "default_gateway_url")]
	pub gateway_url: String,
	/// API key header value.
	#[serde(default)]
	pub api_key: Option<SecretString>,
	/// API secret header value.
	#[serde(default)]
	pub secret_api_key: Option<SecretString>,
}

impl Default for PinningConfig {
	fn default() -> Self {
		Self {
			api_url: default_api_url(),
			gateway_url: default_gateway_url(),
			api_key: None,
			secret_api_key: None,
		}
	}
}

fn default_api_url() -> String {
	"https://api.pinata.cloud".to_string()
}

fn default_gateway_url() -> String {
	"https://ipfs.io/ipfs".to_string()
}

/// Response body of both pin routes.
#[derive(Debug, Deserialize)]
struct PinResponse {
	#[serde(rename = "IpfsHash")]
	ipfs_hash: String,
}

/// Client for the pinning service's pin routes.
///
/// Credentials are installed once as default headers; both routes respond
/// with the content hash, which is turned into a gateway URL.
pub struct PinningClient {
	client: Client,
	api_url: String,
	gateway_url: String,
}

impl PinningClient {
	/// Builds a client from configuration.
	///
	/// Fails when either credential is missing; the read path never needs
	/// this client, so construction is deferred to the write commands.
	pub fn new(config: &PinningConfig) -> Result<Self, PinningError> {
		let api_key = config.api_key.as_ref().ok_or_else(|| {
			PinningError::InvalidCredentials("api_key is not configured".to_string())
		})?;
		let secret = config.secret_api_key.as_ref().ok_or_else(|| {
			PinningError::InvalidCredentials("secret_api_key is not configured".to_string())
		})?;

		let mut headers = HeaderMap::new();
		headers.insert(
			"pinata_api_key",
			api_key.with_exposed(|key| {
				HeaderValue::from_str(key)
					.map_err(|e| PinningError::InvalidCredentials(e.to_string()))
			})?,
		);
		headers.insert(
			"pinata_secret_api_key",
			secret.with_exposed(|key| {
				HeaderValue::from_str(key)
					.map_err(|e| PinningError::InvalidCredentials(e.to_string()))
			})?,
		);

		let client = Client::builder()
			.default_headers(headers)
			.timeout(Duration::from_secs(30))
			.build()?;

		Ok(Self {
			client,
			api_url: config.api_url.trim_end_matches('/').to_string(),
			gateway_url: config.gateway_url.trim_end_matches('/').to_string(),
		})
	}

	fn gateway_url_for(&self, hash: &str) -> String {
		format!("{}/{}", self.gateway_url, hash)
	}

	async fn decode_pin_response(response: Response) -> Result<PinResponse, PinningError> {
		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(PinningError::PinRejected {
				status: status.as_u16(),
				body,
			});
		}
		response
			.json::<PinResponse>()
			.await
			.map_err(|e| PinningError::InvalidDocument(e.to_string()))
	}
}

#[async_trait]
impl PinningInterface for PinningClient {
	async fn pin_file(&self, path: &Path) -> Result<String, PinningError> {
		let bytes = tokio::fs::read(path)
			.await
			.map_err(|e| PinningError::AssetUnreadable(format!("{}: {e}", path.display())))?;
		let file_name = path
			.file_name()
			.and_then(|name| name.to_str())
			.unwrap_or("asset")
			.to_string();

		let part = multipart::Part::bytes(bytes).file_name(file_name);
		let form = multipart::Form::new().part("file", part);

		let response = self
			.client
			.post(format!("{}{FILE_PIN_ROUTE}", self.api_url))
			.multipart(form)
			.send()
			.await?;
		let pinned = Self::decode_pin_response(response).await?;

		info!(hash = %pinned.ipfs_hash, "Asset upload successful");
		Ok(self.gateway_url_for(&pinned.ipfs_hash))
	}

	async fn pin_json(&self, document: serde_json::Value) -> Result<String, PinningError> {
		let response = self
			.client
			.post(format!("{}{JSON_PIN_ROUTE}", self.api_url))
			.json(&document)
			.send()
			.await?;
		let pinned = Self::decode_pin_response(response).await?;

		info!(hash = %pinned.ipfs_hash, "Metadata upload successful");
		Ok(self.gateway_url_for(&pinned.ipfs_hash))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config_with_credentials() -> PinningConfig {
		PinningConfig {
			api_key: Some(SecretString::from("key")),
			secret_api_key: Some(SecretString::from("secret")),
			..PinningConfig::default()
		}
	}

	#[test]
	fn pin_response_parses_service_body() {
		let response: PinResponse =
			serde_json::from_str(r#"{"IpfsHash":"QmHash","PinSize":123,"Timestamp":"t"}"#).unwrap();
		assert_eq!(response.ipfs_hash, "QmHash");
	}

	#[test]
	fn gateway_urls_join_without_duplicate_slashes() {
		let mut config = config_with_credentials();
		config.gateway_url = "https://ipfs.io/ipfs/".to_string();
		let client = PinningClient::new(&config).unwrap();
		assert_eq!(
			client.gateway_url_for("QmHash"),
			"https://ipfs.io/ipfs/QmHash"
		);
	}

	#[test]
	fn missing_credentials_fail_construction() {
		let config = PinningConfig::default();
		assert!(matches!(
			PinningClient::new(&config),
			Err(PinningError::InvalidCredentials(_))
		));
	}

	#[test]
	fn config_defaults_point_at_public_services() {
		let config = PinningConfig::default();
		assert_eq!(config.api_url, "https://api.pinata.cloud");
		assert_eq!(config.gateway_url, "https://ipfs.io/ipfs");
	}
}
