//! Mint-and-list command.

use crate::display;
use crate::error::Result;
use crate::services::MintAndList;
use std::path::Path;

pub async fn handle(
	minter: &MintAndList,
	file: &Path,
	name: &str,
	description: &str,
	detach: bool,
) -> Result<()> {
	let outcome = minter.run(file, name, description, detach).await?;

	display::header("Mint and list");
	display::success(&format!("Asset pinned at {}", outcome.asset_url));
	display::success(&format!("Metadata pinned at {}", outcome.metadata_url));
	display::success(&format!(
		"Minted token {} in transaction {}",
		outcome.token_id, outcome.mint_tx
	));
	if outcome.list_confirmed {
		display::success(&format!("Listed in transaction {}", outcome.list_tx));
	} else {
		display::success(&format!(
			"List transaction {} submitted; confirmation not awaited",
			outcome.list_tx
		));
	}
	Ok(())
}
