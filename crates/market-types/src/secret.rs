//! Secret value wrapper that keeps credentials out of logs.

use serde::Deserialize;
use std::fmt;

/// A string whose value is excluded from `Debug` output.
///
/// Credentials are read through [`SecretString::with_exposed`], which hands
/// the raw value to a closure without cloning it into intermediate types.
#[derive(Clone, Deserialize)]
#[serde(transparent)]
pub struct SecretString(String);

impl SecretString {
	/// Runs a closure over the underlying value.
	pub fn with_exposed<T>(&self, f: impl FnOnce(&str) -> T) -> T {
		f(&self.0)
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("SecretString(****)")
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}
