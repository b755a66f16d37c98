//! In-memory storage implementation using DashMap

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use relay_types::{Event, Provider, StorageStats, Tenant};

use crate::traits::{
	EventStorage, ProviderStorage, Storage, StorageError, StorageResult, TenantStorage,
};

/// In-memory storage for tenants, events and providers
///
/// Listings are ordered by (created_at, id) so `list()` results are stable
/// regardless of map iteration order.
#[derive(Clone, Default)]
pub struct MemoryStore {
	tenants: Arc<DashMap<String, Tenant>>,
	events: Arc<DashMap<String, Event>>,
	providers: Arc<DashMap<String, Provider>>,
}

impl MemoryStore {
	/// Create a new memory store instance
	pub fn new() -> Self {
		Self {
			tenants: Arc::new(DashMap::new()),
			events: Arc::new(DashMap::new()),
			providers: Arc::new(DashMap::new()),
		}
	}

	fn sorted_tenants(&self) -> Vec<Tenant> {
		let mut tenants: Vec<Tenant> = self.tenants.iter().map(|e| e.value().clone()).collect();
		tenants.sort_by(|a, b| {
			a.created_at
				.cmp(&b.created_at)
				.then_with(|| a.tenant_id.cmp(&b.tenant_id))
		});
		tenants
	}
}

#[async_trait]
impl TenantStorage for MemoryStore {
	async fn create_tenant(&self, tenant: Tenant) -> StorageResult<()> {
		if self.tenants.contains_key(&tenant.tenant_id) {
			return Err(StorageError::Duplicate {
				id: tenant.tenant_id,
			});
		}
		debug!("Storing tenant {}", tenant.tenant_id);
		self.tenants.insert(tenant.tenant_id.clone(), tenant);
		Ok(())
	}

	async fn get_tenant(&self, tenant_id: &str) -> StorageResult<Option<Tenant>> {
		Ok(self.tenants.get(tenant_id).map(|entry| entry.clone()))
	}

	async fn list_all_tenants(&self) -> StorageResult<Vec<Tenant>> {
		Ok(self.sorted_tenants())
	}

	async fn list_tenants_paginated(
		&self,
		start: usize,
		limit: usize,
	) -> StorageResult<Vec<Tenant>> {
		let tenants = self.sorted_tenants();
		Ok(tenants.into_iter().skip(start).take(limit).collect())
	}

	async fn count_tenants(&self) -> StorageResult<usize> {
		Ok(self.tenants.len())
	}
}

#[async_trait]
impl EventStorage for MemoryStore {
	async fn append_event(&self, event: Event) -> StorageResult<()> {
		debug!(
			"Appending event {} for tenant {}",
			event.event_id, event.tenant_id
		);
		self.events.insert(event.event_id.clone(), event);
		Ok(())
	}

	async fn get_events_by_tenant(&self, tenant_id: &str) -> StorageResult<Vec<Event>> {
		let mut events: Vec<Event> = self
			.events
			.iter()
			.filter(|entry| entry.value().tenant_id == tenant_id)
			.map(|entry| entry.value().clone())
			.collect();
		events.sort_by(|a, b| {
			a.received_at
				.cmp(&b.received_at)
				.then_with(|| a.event_id.cmp(&b.event_id))
		});
		Ok(events)
	}

	async fn count_events(&self, tenant_id: &str) -> StorageResult<u64> {
		Ok(self
			.events
			.iter()
			.filter(|entry| entry.value().tenant_id == tenant_id)
			.count() as u64)
	}

	async fn last_event_at(&self, tenant_id: &str) -> StorageResult<Option<DateTime<Utc>>> {
		Ok(self
			.events
			.iter()
			.filter(|entry| entry.value().tenant_id == tenant_id)
			.map(|entry| entry.value().received_at)
			.max())
	}
}

#[async_trait]
impl ProviderStorage for MemoryStore {
	async fn create_provider(&self, provider: Provider) -> StorageResult<()> {
		if self.providers.contains_key(&provider.provider_id) {
			return Err(StorageError::Duplicate {
				id: provider.provider_id,
			});
		}
		self.providers
			.insert(provider.provider_id.clone(), provider);
		Ok(())
	}

	async fn get_provider(&self, provider_id: &str) -> StorageResult<Option<Provider>> {
		Ok(self.providers.get(provider_id).map(|entry| entry.clone()))
	}

	async fn update_provider(&self, provider: Provider) -> StorageResult<()> {
		if !self.providers.contains_key(&provider.provider_id) {
			return Err(StorageError::not_found(provider.provider_id));
		}
		self.providers
			.insert(provider.provider_id.clone(), provider);
		Ok(())
	}

	async fn list_all_providers(&self) -> StorageResult<Vec<Provider>> {
		let mut providers: Vec<Provider> =
			self.providers.iter().map(|e| e.value().clone()).collect();
		providers.sort_by(|a, b| {
			a.created_at
				.cmp(&b.created_at)
				.then_with(|| a.provider_id.cmp(&b.provider_id))
		});
		Ok(providers)
	}

	async fn count_providers(&self) -> StorageResult<usize> {
		Ok(self.providers.len())
	}
}

#[async_trait]
impl Storage for MemoryStore {
	async fn health_check(&self) -> StorageResult<bool> {
		Ok(true)
	}

	async fn stats(&self) -> StorageResult<StorageStats> {
		Ok(StorageStats {
			total_tenants: self.tenants.len(),
			total_events: self.events.len(),
			total_providers: self.providers.len(),
		})
	}

	async fn close(&self) -> StorageResult<()> {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[tokio::test]
	async fn test_tenant_roundtrip() {
		let store = MemoryStore::new();
		let tenant = Tenant::new("Acme".to_string(), None);
		let tenant_id = tenant.tenant_id.clone();

		store.create_tenant(tenant).await.unwrap();
		let loaded = store.get_tenant(&tenant_id).await.unwrap().unwrap();
		assert_eq!(loaded.display_name, "Acme");
		assert_eq!(store.count_tenants().await.unwrap(), 1);
	}

	#[tokio::test]
	async fn test_duplicate_tenant_rejected() {
		let store = MemoryStore::new();
		let tenant = Tenant::new("Acme".to_string(), None);

		store.create_tenant(tenant.clone()).await.unwrap();
		let result = store.create_tenant(tenant).await;
		assert!(matches!(result, Err(StorageError::Duplicate { .. })));
	}

	#[tokio::test]
	async fn test_tenant_listing_is_ordered() {
		let store = MemoryStore::new();
		for name in ["one", "two", "three"] {
			store
				.create_tenant(Tenant::new(name.to_string(), None))
				.await
				.unwrap();
		}

		let tenants = store.list_all_tenants().await.unwrap();
		assert_eq!(tenants.len(), 3);
		for pair in tenants.windows(2) {
			assert!(
				(pair[0].created_at, &pair[0].tenant_id)
					<= (pair[1].created_at, &pair[1].tenant_id)
			);
		}
	}

	#[tokio::test]
	async fn test_event_aggregation_inputs() {
		let store = MemoryStore::new();

		assert_eq!(store.count_events("t1").await.unwrap(), 0);
		assert!(store.last_event_at("t1").await.unwrap().is_none());

		store
			.append_event(Event::new("t1".to_string(), json!({"x": 1})))
			.await
			.unwrap();
		store
			.append_event(Event::new("t1".to_string(), json!({"x": 2})))
			.await
			.unwrap();
		store
			.append_event(Event::new("t2".to_string(), json!({"y": 1})))
			.await
			.unwrap();

		assert_eq!(store.count_events("t1").await.unwrap(), 2);
		assert_eq!(store.count_events("t2").await.unwrap(), 1);
		assert!(store.last_event_at("t1").await.unwrap().is_some());

		let events = store.get_events_by_tenant("t1").await.unwrap();
		assert_eq!(events.len(), 2);
	}

	#[tokio::test]
	async fn test_provider_update() {
		let store = MemoryStore::new();
		let mut provider = Provider::new(
			"p1".to_string(),
			"rfq-v1".to_string(),
			"https://quotes.example.com".to_string(),
			5000,
		);
		store.create_provider(provider.clone()).await.unwrap();

		provider.update_status(relay_types::ProviderStatus::Active);
		store.update_provider(provider).await.unwrap();

		let loaded = store.get_provider("p1").await.unwrap().unwrap();
		assert!(loaded.is_available());
	}

	#[tokio::test]
	async fn test_update_missing_provider_fails() {
		let store = MemoryStore::new();
		let provider = Provider::new(
			"ghost".to_string(),
			"rfq-v1".to_string(),
			"https://quotes.example.com".to_string(),
			5000,
		);
		assert!(matches!(
			store.update_provider(provider).await,
			Err(StorageError::NotFound { .. })
		));
	}

	#[tokio::test]
	async fn test_stats() {
		let store = MemoryStore::new();
		store
			.create_tenant(Tenant::new("Acme".to_string(), None))
			.await
			.unwrap();
		store
			.append_event(Event::new("t1".to_string(), json!({})))
			.await
			.unwrap();

		let stats = store.stats().await.unwrap();
		assert_eq!(stats.total_tenants, 1);
		assert_eq!(stats.total_events, 1);
		assert_eq!(stats.total_providers, 0);
	}
}
