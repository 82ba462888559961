//! Command definitions and handlers.

pub mod buy;
pub mod listings;
pub mod mint;

use clap::Subcommand;
use std::path::PathBuf;

/// Subcommands of the marketplace client.
#[derive(Debug, Subcommand)]
pub enum Commands {
	/// Load and display the currently listed NFTs
	Listings {
		/// Emit the records as JSON instead of the readable list
		#[arg(long)]
		json: bool,
	},

	/// Mint a new collectible and list it for sale
	Mint {
		/// Path of the asset file to pin
		#[arg(long)]
		file: PathBuf,

		/// Asset name recorded in the metadata document
		#[arg(long, default_value = "")]
		name: String,

		/// Asset description recorded in the metadata document
		#[arg(long, default_value = "")]
		description: String,

		/// Sale price in native units (overrides the configured default)
		#[arg(long)]
		price: Option<String>,

		/// Submit the list transaction without awaiting its confirmation
		#[arg(long)]
		detach: bool,
	},

	/// Buy a listed NFT (not implemented)
	Buy {
		/// Token id of the listing to buy
		#[arg(long)]
		token_id: u64,
	},
}
