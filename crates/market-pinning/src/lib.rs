//! Pinning service client and metadata gateway.
//!
//! The write half talks to the pinning service's file and JSON pin routes
//! and yields gateway URLs for the pinned content; the read half fetches and
//! parses metadata documents from their token URIs.

use async_trait::async_trait;
use market_types::TokenMetadata;
use std::path::Path;
use thiserror::Error;

pub mod client;
pub mod gateway;

pub use client::{PinningClient, PinningConfig};
pub use gateway::HttpMetadataGateway;

/// Errors from the pinning service or metadata gateway.
#[derive(Debug, Error)]
pub enum PinningError {
	/// The pin request was rejected by the service.
	#[error("Pin request failed with status {status}: {body}")]
	PinRejected { status: u16, body: String },
	/// The metadata document could not be fetched.
	#[error("Metadata fetch failed: {0}")]
	FetchFailed(String),
	/// A response body could not be decoded.
	#[error("Invalid response document: {0}")]
	InvalidDocument(String),
	/// Credentials are missing or could not be installed as headers.
	#[error("Invalid pinning credentials: {0}")]
	InvalidCredentials(String),
	/// The asset file could not be read.
	#[error("Failed to read asset file: {0}")]
	AssetUnreadable(String),
	/// Transport-level HTTP failure.
	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),
}

/// Upload operations against the pinning service.
#[async_trait]
pub trait PinningInterface: Send + Sync {
	/// Pins a local file and returns its gateway URL.
	async fn pin_file(&self, path: &Path) -> Result<String, PinningError>;

	/// Pins a JSON document and returns its gateway URL.
	async fn pin_json(&self, document: serde_json::Value) -> Result<String, PinningError>;
}

/// Read access to metadata documents behind token URIs.
#[async_trait]
pub trait MetadataGateway: Send + Sync {
	/// Fetches and parses the metadata document at `uri`.
	async fn fetch(&self, uri: &str) -> Result<TokenMetadata, PinningError>;
}
