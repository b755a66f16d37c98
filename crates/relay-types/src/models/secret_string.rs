//! Secure string handling for sensitive data like provider API keys
//!
//! The underlying string is zeroized when the value is dropped, and every
//! Debug/Display/Serialize path redacts the contents.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string wrapper for secrets that clears its memory on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
	inner: String,
}

impl SecretString {
	/// Create a new `SecretString` from a `String`
	pub fn new(secret: String) -> Self {
		Self { inner: secret }
	}

	/// Create a new `SecretString` from a string slice
	pub fn from_str(secret: &str) -> Self {
		Self::new(secret.to_string())
	}

	/// Expose the secret value
	///
	/// Use sparingly; prefer passing the `SecretString` itself around.
	pub fn expose_secret(&self) -> &str {
		&self.inner
	}

	/// Get the length of the secret without exposing it
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Check if the secret is empty without exposing it
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SecretString")
			.field("inner", &"[REDACTED]")
			.finish()
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[REDACTED]")
	}
}

impl From<String> for SecretString {
	fn from(secret: String) -> Self {
		Self::new(secret)
	}
}

impl From<&str> for SecretString {
	fn from(secret: &str) -> Self {
		Self::from_str(secret)
	}
}

// Never leak the value through serialization paths (logs, API responses)
impl Serialize for SecretString {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str("[REDACTED]")
	}
}

impl<'de> Deserialize<'de> for SecretString {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		Ok(SecretString::new(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_debug_and_display_redact() {
		let secret = SecretString::from_str("super-secret-key");
		assert!(!format!("{:?}", secret).contains("super-secret-key"));
		assert_eq!(format!("{}", secret), "[REDACTED]");
	}

	#[test]
	fn test_serialize_redacts() {
		let secret = SecretString::from_str("super-secret-key");
		let json = serde_json::to_string(&secret).unwrap();
		assert_eq!(json, "\"[REDACTED]\"");
	}

	#[test]
	fn test_expose_secret() {
		let secret = SecretString::from_str("abc");
		assert_eq!(secret.expose_secret(), "abc");
		assert_eq!(secret.len(), 3);
		assert!(!secret.is_empty());
	}
}
