//! Core adapter trait for provider integrations

use async_trait::async_trait;
use std::fmt::Debug;

use crate::providers::ProviderRuntimeConfig;
use crate::quotes::{QuoteRequest, QuoteResult};

use super::{Adapter, AdapterResult};

/// Core trait for quote adapter implementations
///
/// Each implementation encapsulates one provider's request shape, auth
/// scheme and response normalization. Custom adapters are supported by
/// implementing this trait and registering the adapter.
#[async_trait]
pub trait QuoteAdapter: Send + Sync + Debug {
	/// Get adapter identity and metadata
	fn adapter_info(&self) -> &Adapter;

	/// Get adapter ID (for registration and provider matching)
	fn id(&self) -> &str {
		&self.adapter_info().adapter_id
	}

	/// Get human-readable name for this adapter
	fn name(&self) -> &str {
		&self.adapter_info().name
	}

	/// Request a quote from the provider using runtime configuration
	///
	/// Provider-side 4xx/5xx responses and transport failures must be
	/// translated into `AdapterError`, never a panic.
	async fn get_quote(
		&self,
		request: &QuoteRequest,
		config: &ProviderRuntimeConfig,
	) -> AdapterResult<QuoteResult>;

	/// Health check for the provider using runtime configuration
	async fn health_check(&self, config: &ProviderRuntimeConfig) -> AdapterResult<bool>;
}
