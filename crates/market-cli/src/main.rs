use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use market_chain::ChainClient;
use market_cli::{
	commands::{self, Commands},
	config::Config,
	display,
	logging::init_logging,
	services::{ListingLoader, MintAndList},
};
use market_pinning::{HttpMetadataGateway, PinningClient};
use market_types::conversion;

#[derive(Parser)]
#[command(name = "nft-market")]
#[command(about = "Client for the on-chain NFT marketplace")]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Enable debug logging
	#[arg(global = true, long, env = "MARKET_DEBUG")]
	debug: bool,

	/// Config file path (can be set via MARKET_CONFIG env var)
	#[arg(global = true, long, env = "MARKET_CONFIG", default_value = "market.toml")]
	config: PathBuf,
}

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	init_logging(cli.debug);

	if let Err(err) = run(cli).await {
		display::error(&err.to_string());
		std::process::exit(1);
	}
}

async fn run(cli: Cli) -> market_cli::Result<()> {
	let config = Config::from_file(&cli.config).await?;
	debug!(path = %cli.config.display(), "Configuration loaded");

	let chain = Arc::new(
		ChainClient::connect(
			&config.rpc.url,
			config.account.private_key.as_ref(),
			&config.networks,
			config.listing.gas_limit,
		)
		.await?,
	);

	match cli.command {
		Commands::Listings { json } => {
			let gateway = Arc::new(HttpMetadataGateway::new()?);
			let loader = ListingLoader::new(chain, gateway, config.listing.metadata_concurrency);
			commands::listings::handle(&loader, json).await
		},

		Commands::Mint {
			file,
			name,
			description,
			price,
			detach,
		} => {
			let sale_price = conversion::parse_price(
				price.as_deref().unwrap_or(&config.listing.sale_price_eth),
			)
			.map_err(market_cli::Error::InvalidPrice)?;

			let pinning = Arc::new(PinningClient::new(&config.pinning)?);
			let minter = MintAndList::new(chain, pinning, sale_price);
			commands::mint::handle(&minter, &file, &name, &description, detach).await
		},

		Commands::Buy { token_id } => commands::buy::handle(token_id),
	}
}
