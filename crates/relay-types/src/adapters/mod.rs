//! Adapter identity and trait definitions

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod traits;

pub use errors::{AdapterError, AdapterResult};
pub use traits::QuoteAdapter;

/// Adapter identity and descriptive metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adapter {
	/// Unique identifier used for registration and provider matching
	pub adapter_id: String,

	/// Human-readable name
	pub name: String,

	/// Description of the provider protocol this adapter speaks
	pub description: Option<String>,

	/// Adapter version
	pub version: String,
}

impl Adapter {
	pub fn new(adapter_id: String, name: String, description: String, version: String) -> Self {
		Self {
			adapter_id,
			name,
			description: Some(description),
			version,
		}
	}
}
