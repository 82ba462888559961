//! Orchestration services behind the commands.

pub mod loader;
pub mod minter;

pub use loader::ListingLoader;
pub use minter::{MintAndList, MintAndListOutcome};
