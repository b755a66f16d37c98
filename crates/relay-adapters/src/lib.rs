//! Relay Adapters
//!
//! Provider-specific quote adapters for the quote-relay orchestrator.

pub mod rfq_adapter;
pub mod spot_adapter;

pub use rfq_adapter::RfqAdapter;
pub use spot_adapter::SpotAdapter;

pub use relay_types::{AdapterError, AdapterResult, QuoteAdapter};

use std::collections::HashMap;

/// Registry of available quote adapters
///
/// Registration order is preserved: it is the final tie-break in quote
/// ranking, so selection stays deterministic across runs.
#[derive(Debug, Default)]
pub struct AdapterRegistry {
	adapters: HashMap<String, Box<dyn QuoteAdapter>>,
	order: Vec<String>,
}

impl AdapterRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self {
			adapters: HashMap::new(),
			order: Vec::new(),
		}
	}

	/// Create a registry with the built-in adapters registered
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		registry
			.register(Box::new(RfqAdapter::with_default_config()))
			.expect("default rfq adapter registration cannot collide");
		registry
			.register(Box::new(SpotAdapter::with_default_config()))
			.expect("default spot adapter registration cannot collide");
		registry
	}

	/// Register an adapter under its own ID
	pub fn register(&mut self, adapter: Box<dyn QuoteAdapter>) -> AdapterResult<()> {
		let id = adapter.id().to_string();
		if self.adapters.contains_key(&id) {
			return Err(AdapterError::AlreadyRegistered { adapter_id: id });
		}
		self.order.push(id.clone());
		self.adapters.insert(id, adapter);
		Ok(())
	}

	/// Get an adapter by ID
	pub fn get(&self, adapter_id: &str) -> Option<&dyn QuoteAdapter> {
		self.adapters.get(adapter_id).map(|a| a.as_ref())
	}

	/// Position of an adapter in registration order
	pub fn registration_index(&self, adapter_id: &str) -> Option<usize> {
		self.order.iter().position(|id| id == adapter_id)
	}

	/// Adapter IDs in registration order
	pub fn ids(&self) -> &[String] {
		&self.order
	}

	pub fn len(&self) -> usize {
		self.adapters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.adapters.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_registered_in_order() {
		let registry = AdapterRegistry::with_defaults();

		assert_eq!(registry.len(), 2);
		assert_eq!(registry.registration_index("rfq-v1"), Some(0));
		assert_eq!(registry.registration_index("spot-v1"), Some(1));
		assert!(registry.get("rfq-v1").is_some());
	}

	#[test]
	fn test_duplicate_registration_rejected() {
		let mut registry = AdapterRegistry::with_defaults();
		let result = registry.register(Box::new(RfqAdapter::with_default_config()));
		assert!(matches!(
			result,
			Err(AdapterError::AlreadyRegistered { .. })
		));
		// Order list untouched by the failed registration
		assert_eq!(registry.ids().len(), 2);
	}

	#[test]
	fn test_unknown_adapter_lookup() {
		let registry = AdapterRegistry::with_defaults();
		assert!(registry.get("does-not-exist").is_none());
		assert_eq!(registry.registration_index("does-not-exist"), None);
	}
}
