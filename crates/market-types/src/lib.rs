//! Shared types for the NFT marketplace client.
//!
//! This crate defines the domain data model (listings, token metadata, the
//! merged display record), the per-network deployment configuration, and the
//! price conversion helpers shared by the other crates.

pub mod conversion;
pub mod listing;
pub mod networks;
pub mod secret;

pub use listing::{Listing, MarketNft, TokenMetadata};
pub use networks::{Deployment, NetworksConfig};
pub use secret::SecretString;
