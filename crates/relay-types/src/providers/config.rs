//! Provider configuration types

use std::collections::HashMap;

use crate::SecretString;

use super::Provider;

/// Static provider configuration, typically sourced from settings
#[derive(Debug, Clone)]
pub struct ProviderConfig {
	pub provider_id: String,
	pub adapter_id: String,
	pub endpoint: String,
	pub timeout_ms: u64,
	pub enabled: bool,
	pub name: Option<String>,
	pub description: Option<String>,
	pub api_key: Option<SecretString>,
	pub headers: Option<HashMap<String, String>>,
}

/// Runtime configuration handed to an adapter for a single call
///
/// Carries everything provider-specific an adapter needs, so adapters hold
/// no global mutable state.
#[derive(Debug, Clone)]
pub struct ProviderRuntimeConfig {
	pub provider_id: String,
	pub endpoint: String,
	pub timeout_ms: u64,
	pub api_key: Option<SecretString>,
	pub headers: Option<HashMap<String, String>>,
}

impl From<&Provider> for ProviderRuntimeConfig {
	fn from(provider: &Provider) -> Self {
		Self {
			provider_id: provider.provider_id.clone(),
			endpoint: provider.endpoint.clone(),
			timeout_ms: provider.timeout_ms,
			api_key: provider.metadata.api_key.clone(),
			headers: provider.metadata.headers.clone(),
		}
	}
}
