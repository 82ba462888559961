//! Metadata retrieval through the content gateway.

use async_trait::async_trait;
use market_types::TokenMetadata;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::{MetadataGateway, PinningError};

/// HTTP metadata fetcher.
///
/// Token URIs are plain HTTP URLs pointing at the public gateway; the body
/// is parsed as a metadata document without shape validation.
pub struct HttpMetadataGateway {
	client: Client,
}

impl HttpMetadataGateway {
	pub fn new() -> Result<Self, PinningError> {
		let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
		Ok(Self { client })
	}
}

#[async_trait]
impl MetadataGateway for HttpMetadataGateway {
	async fn fetch(&self, uri: &str) -> Result<TokenMetadata, PinningError> {
		debug!(uri, "Fetching token metadata");
		let response = self.client.get(uri).send().await?;
		let status = response.status();
		if !status.is_success() {
			return Err(PinningError::FetchFailed(format!(
				"{uri} returned status {status}"
			)));
		}
		response
			.json::<TokenMetadata>()
			.await
			.map_err(|e| PinningError::InvalidDocument(format!("{uri}: {e}")))
	}
}
