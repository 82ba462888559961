//! Purchase command. Declared, but no purchase flow exists yet.

use crate::display;
use crate::error::Result;
use tracing::warn;

pub fn handle(token_id: u64) -> Result<()> {
	warn!(token_id, "Purchase flow invoked but not implemented");
	display::error(&format!("Buying token {token_id} is not implemented"));
	Ok(())
}
