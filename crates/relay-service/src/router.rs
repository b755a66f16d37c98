//! Core quote routing logic
//!
//! Fans a quote request out to every configured provider, collects whatever
//! comes back in time, and picks a single best quote deterministically.

use futures::future::join_all;
use relay_adapters::AdapterRegistry;
use relay_types::{Provider, ProviderRuntimeConfig, QuoteRequest, QuoteResult};
use std::sync::Arc;
use thiserror::Error;
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum RouterServiceError {
	#[error("validation error: {0}")]
	Validation(String),
	#[error("no providers produced a quote")]
	NoQuotesAvailable,
	#[error("internal routing error: {0}")]
	Internal(String),
}

pub type RouterResult<T> = Result<T, RouterServiceError>;

/// Service for routing quote requests across providers
///
/// Provider order is configuration order and is the final tie-break when
/// two quotes are otherwise equal, so repeated identical requests select
/// the same winner.
pub struct RouterService {
	providers: Vec<Provider>,
	adapter_registry: Arc<AdapterRegistry>,
	global_timeout_ms: u64,
}

impl RouterService {
	/// Create a new router service with pre-configured adapters
	pub fn new(
		providers: Vec<Provider>,
		adapter_registry: Arc<AdapterRegistry>,
		global_timeout_ms: u64,
	) -> Self {
		Self {
			providers,
			adapter_registry,
			global_timeout_ms,
		}
	}

	/// Validate that every provider references a registered adapter
	pub fn validate_providers(&self) -> RouterResult<()> {
		for provider in &self.providers {
			if self.adapter_registry.get(&provider.adapter_id).is_none() {
				return Err(RouterServiceError::Validation(format!(
					"Provider '{}' references unknown adapter '{}'",
					provider.provider_id, provider.adapter_id
				)));
			}
		}
		Ok(())
	}

	pub fn provider_count(&self) -> usize {
		self.providers.len()
	}

	/// Fetch quotes concurrently from all configured providers
	///
	/// Each provider runs in its own task under its own timeout; a provider
	/// that fails or times out is skipped, never fatal. The global timeout
	/// bounds the whole fan-out and aborts any stragglers.
	pub async fn fetch_quotes(&self, request: &QuoteRequest) -> Vec<(usize, QuoteResult)> {
		info!(
			"Fetching quotes for {}/{} from {} providers",
			request.from_asset,
			request.to_asset,
			self.providers.len()
		);

		let tasks: Vec<_> = self
			.providers
			.iter()
			.enumerate()
			.map(|(index, provider)| {
				let request = request.clone();
				let provider = provider.clone();
				let adapter_registry = Arc::clone(&self.adapter_registry);

				tokio::spawn(async move {
					debug!("Starting quote fetch from provider {}", provider.provider_id);

					let adapter = match adapter_registry.get(&provider.adapter_id) {
						Some(adapter) => adapter,
						None => {
							warn!(
								"No adapter found for provider {} (adapter_id: {})",
								provider.provider_id, provider.adapter_id
							);
							return None;
						},
					};

					let config = ProviderRuntimeConfig::from(&provider);
					let provider_timeout = Duration::from_millis(provider.timeout_ms);

					match timeout(provider_timeout, adapter.get_quote(&request, &config)).await {
						Ok(Ok(quote)) => {
							debug!(
								"Provider {} quoted {} -> {}",
								provider.provider_id, quote.from_amount, quote.to_amount
							);
							Some((index, quote))
						},
						Ok(Err(e)) => {
							warn!("Provider {} returned error: {}", provider.provider_id, e);
							None
						},
						Err(_) => {
							warn!(
								"Provider {} timed out after {}ms",
								provider.provider_id, provider.timeout_ms
							);
							None
						},
					}
				})
			})
			.collect();

		let abort_handles: Vec<_> = tasks.iter().map(|t| t.abort_handle()).collect();

		let fanout_future = join_all(tasks);
		let global_timeout_duration = Duration::from_millis(self.global_timeout_ms);

		let results = match timeout(global_timeout_duration, fanout_future).await {
			Ok(results) => results,
			Err(_) => {
				warn!(
					"Global routing timeout reached after {}ms",
					self.global_timeout_ms
				);
				for handle in abort_handles {
					handle.abort();
				}
				Vec::new()
			},
		};

		let quotes: Vec<(usize, QuoteResult)> = results
			.into_iter()
			.filter_map(|r| r.ok().flatten())
			.collect();

		info!(
			"Quote routing completed: {} quotes from {} providers",
			quotes.len(),
			self.providers.len()
		);

		quotes
	}

	/// Select the best quote from a fan-out result set
	///
	/// Ranking: highest output amount, then lowest estimated cost, then the
	/// provider that appears first in configuration order. A quote with a
	/// non-numeric amount is excluded from the candidates, never ranked.
	pub fn select_best(quotes: Vec<(usize, QuoteResult)>) -> Option<QuoteResult> {
		let mut candidates: Vec<(usize, u128, u128, QuoteResult)> = quotes
			.into_iter()
			.filter_map(|(index, quote)| {
				match (quote.to_amount_units(), quote.estimated_cost_units()) {
					(Ok(amount), Ok(cost)) => Some((index, amount, cost, quote)),
					_ => {
						warn!(
							"Discarding quote from {} with non-numeric amounts",
							quote.provider_name
						);
						None
					},
				}
			})
			.collect();

		candidates.sort_by(|(a_index, a_amount, a_cost, _), (b_index, b_amount, b_cost, _)| {
			b_amount
				.cmp(a_amount)
				.then_with(|| a_cost.cmp(b_cost))
				.then_with(|| a_index.cmp(b_index))
		});

		candidates.into_iter().next().map(|(_, _, _, quote)| quote)
	}

	/// Fan out a validated request and return the single best quote
	pub async fn get_best_quote(&self, request: &QuoteRequest) -> RouterResult<QuoteResult> {
		request
			.validate()
			.map_err(|e| RouterServiceError::Validation(e.to_string()))?;

		let quotes = self.fetch_quotes(request).await;
		Self::select_best(quotes).ok_or(RouterServiceError::NoQuotesAvailable)
	}

	/// Perform health checks on all providers via their adapters
	pub async fn health_check_all(&self) -> Vec<(String, bool)> {
		let mut results = Vec::new();

		for provider in &self.providers {
			let healthy = match self.adapter_registry.get(&provider.adapter_id) {
				Some(adapter) => {
					let config = ProviderRuntimeConfig::from(provider);
					adapter.health_check(&config).await.unwrap_or(false)
				},
				None => false,
			};
			results.push((provider.provider_id.clone(), healthy));
		}

		results
	}
}
