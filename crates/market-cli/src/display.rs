//! User-facing output, kept separate from the structured logs.

use market_types::{conversion, MarketNft};

/// Prints a section header.
pub fn header(title: &str) {
	println!("\n=== {title} ===");
}

/// Prints a success line.
pub fn success(message: &str) {
	println!("  ✓ {message}");
}

/// Prints an error line to stderr.
pub fn error(message: &str) {
	eprintln!("  ✗ {message}");
}

/// Prints one listed NFT.
pub fn nft(nft: &MarketNft) {
	println!(
		"#{}  {}  {} ETH",
		nft.token_id,
		nft.name.as_deref().unwrap_or("(unnamed)"),
		conversion::format_price(nft.price)
	);
	if let Some(description) = nft.description.as_deref() {
		println!("    {description}");
	}
	if let Some(image) = nft.image.as_deref() {
		println!("    image: {image}");
	}
	println!("    seller: {}  owner: {}", nft.seller, nft.owner);
}
