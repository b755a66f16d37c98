//! Mock adapters for examples and testing
//!
//! Simple, working mock adapters that can be used in integrations and tests
//! without real provider endpoints.

use async_trait::async_trait;
use std::time::Duration;

use relay_types::{
	Adapter, AdapterError, AdapterResult, Provider, ProviderRuntimeConfig, ProviderStatus,
	QuoteAdapter, QuoteRequest, QuoteResult,
};

/// Configurable mock adapter
///
/// Returns a fixed output amount and cost, optionally after a delay, or
/// fails every call when `should_fail` is set.
#[derive(Debug, Clone)]
pub struct MockQuoteAdapter {
	pub adapter: Adapter,
	pub to_amount: String,
	pub estimated_cost: String,
	pub delay: Option<Duration>,
	pub should_fail: bool,
}

impl MockQuoteAdapter {
	pub fn new(adapter_id: &str, to_amount: &str, estimated_cost: &str) -> Self {
		Self {
			adapter: Adapter::new(
				adapter_id.to_string(),
				format!("Mock adapter {}", adapter_id),
				"Mock quote adapter for testing".to_string(),
				"1.0.0".to_string(),
			),
			to_amount: to_amount.to_string(),
			estimated_cost: estimated_cost.to_string(),
			delay: None,
			should_fail: false,
		}
	}

	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = Some(delay);
		self
	}

	pub fn failing(mut self) -> Self {
		self.should_fail = true;
		self
	}
}

#[async_trait]
impl QuoteAdapter for MockQuoteAdapter {
	fn adapter_info(&self) -> &Adapter {
		&self.adapter
	}

	async fn get_quote(
		&self,
		request: &QuoteRequest,
		config: &ProviderRuntimeConfig,
	) -> AdapterResult<QuoteResult> {
		if let Some(delay) = self.delay {
			tokio::time::sleep(delay).await;
		}

		if self.should_fail {
			return Err(AdapterError::ProviderError {
				code: "MOCK_FAILURE".to_string(),
				message: "Mock adapter configured to fail".to_string(),
			});
		}

		Ok(QuoteResult::new(
			config.provider_id.clone(),
			request.amount.clone(),
			self.to_amount.clone(),
			self.estimated_cost.clone(),
		))
	}

	async fn health_check(&self, _config: &ProviderRuntimeConfig) -> AdapterResult<bool> {
		Ok(!self.should_fail)
	}
}

/// Build an active provider wired to the given adapter
pub fn mock_provider(provider_id: &str, adapter_id: &str) -> Provider {
	let mut provider = Provider::new(
		provider_id.to_string(),
		adapter_id.to_string(),
		"http://localhost:8080".to_string(),
		5000,
	);
	provider.metadata.name = Some(provider_id.to_string());
	provider.status = ProviderStatus::Active;
	provider
}
