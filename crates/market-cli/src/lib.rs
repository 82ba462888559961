//! Command-line client for the on-chain NFT marketplace.
//!
//! The binary wires a chain connection, a metadata gateway and a pinning
//! client into the two orchestration services: the listing loader (read
//! path) and the mint-and-list flow (write path).

pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod services;

pub use config::Config;
pub use error::{Error, Result};
