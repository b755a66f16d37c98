//! Provider service
//!
//! Service for listing providers and checking their health via adapters.

use std::collections::HashMap;
use std::sync::Arc;

use relay_adapters::AdapterRegistry;
use relay_storage::{ProviderStorage, Storage};
use relay_types::{Provider, ProviderRuntimeConfig, ProviderStatus};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ProviderServiceError {
	#[error("storage error: {0}")]
	Storage(String),
	#[error("provider not found: {0}")]
	NotFound(String),
}

/// Provider statistics for health checks and monitoring
#[derive(Debug, Serialize, Clone)]
pub struct ProviderStats {
	pub total: usize,
	pub active: usize,
	pub healthy: usize,
	pub health_details: HashMap<String, bool>,
}

#[derive(Clone)]
pub struct ProviderService {
	storage: Arc<dyn Storage>,
	adapter_registry: Arc<AdapterRegistry>,
}

impl ProviderService {
	pub fn new(storage: Arc<dyn Storage>, adapter_registry: Arc<AdapterRegistry>) -> Self {
		Self {
			storage,
			adapter_registry,
		}
	}

	pub async fn list_providers(&self) -> Result<Vec<Provider>, ProviderServiceError> {
		self.storage
			.list_all_providers()
			.await
			.map_err(|e| ProviderServiceError::Storage(e.to_string()))
	}

	pub async fn get_provider(&self, provider_id: &str) -> Result<Provider, ProviderServiceError> {
		match self
			.storage
			.get_provider(provider_id)
			.await
			.map_err(|e| ProviderServiceError::Storage(e.to_string()))?
		{
			Some(provider) => Ok(provider),
			None => Err(ProviderServiceError::NotFound(provider_id.to_string())),
		}
	}

	/// Health-check all stored providers via their adapters
	pub async fn health_check_all(&self) -> Result<HashMap<String, bool>, ProviderServiceError> {
		let mut results = HashMap::new();

		let providers = self.list_providers().await?;
		for provider in &providers {
			let healthy = match self.adapter_registry.get(&provider.adapter_id) {
				Some(adapter) => {
					let config = ProviderRuntimeConfig::from(provider);
					adapter.health_check(&config).await.unwrap_or(false)
				},
				None => false,
			};
			results.insert(provider.provider_id.clone(), healthy);
		}

		Ok(results)
	}

	/// Run health checks and fold the outcome back into stored provider state
	pub async fn refresh_provider_health(&self) -> Result<ProviderStats, ProviderServiceError> {
		let providers = self.list_providers().await?;
		let health_details = self.health_check_all().await?;

		for provider in providers {
			let healthy = health_details
				.get(&provider.provider_id)
				.copied()
				.unwrap_or(false);

			let mut updated = provider;
			if healthy {
				updated.metrics.record_success();
				updated.update_status(ProviderStatus::Active);
			} else {
				updated.metrics.record_failure();
				updated.update_status(ProviderStatus::Error);
			}

			debug!(
				"Provider {} health refreshed: healthy={}",
				updated.provider_id, healthy
			);
			self.storage
				.update_provider(updated)
				.await
				.map_err(|e| ProviderServiceError::Storage(e.to_string()))?;
		}

		self.get_stats_from(health_details).await
	}

	async fn get_stats_from(
		&self,
		health_details: HashMap<String, bool>,
	) -> Result<ProviderStats, ProviderServiceError> {
		let providers = self.list_providers().await?;
		let total = providers.len();
		let active = providers.iter().filter(|p| p.is_available()).count();
		let healthy = health_details.values().filter(|&&h| h).count();

		Ok(ProviderStats {
			total,
			active,
			healthy,
			health_details,
		})
	}

	/// Get provider statistics including a fresh health check pass
	pub async fn get_stats(&self) -> Result<ProviderStats, ProviderServiceError> {
		let health_details = self.health_check_all().await?;
		self.get_stats_from(health_details).await
	}
}
