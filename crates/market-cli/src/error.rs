//! Error types and result handling for the binary.

use market_chain::ChainError;
use market_pinning::PinningError;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type alias using the local Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type covering all command failures.
#[derive(Debug, Error)]
pub enum Error {
	// Config errors
	#[error("Configuration file not found: {0}")]
	ConfigNotFound(PathBuf),

	#[error("Invalid configuration: {0}")]
	InvalidConfig(String),

	#[error("Invalid price: {0}")]
	InvalidPrice(String),

	// Subsystem errors
	#[error(transparent)]
	Chain(#[from] ChainError),

	#[error(transparent)]
	Pinning(#[from] PinningError),

	// IO errors
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	// JSON errors
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	// Generic error for unexpected cases
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}
