//! Storage traits for pluggable storage implementations

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{Event, Provider, Tenant};

use super::{StorageError, StorageResult};

/// Statistics about storage usage
#[derive(Debug, Clone)]
pub struct StorageStats {
	pub total_tenants: usize,
	pub total_events: usize,
	pub total_providers: usize,
}

/// Trait for tenant storage operations
#[async_trait]
pub trait TenantStorageTrait: Send + Sync {
	/// Add a new tenant to storage; fails with `Duplicate` if the id exists
	async fn create_tenant(&self, tenant: Tenant) -> StorageResult<()>;

	/// Get a tenant by ID
	async fn get_tenant(&self, tenant_id: &str) -> StorageResult<Option<Tenant>>;

	/// Get all tenants ordered by (created_at, id)
	async fn list_all_tenants(&self) -> StorageResult<Vec<Tenant>>;

	/// Get a page of tenants ordered by (created_at, id)
	async fn list_tenants_paginated(&self, start: usize, limit: usize)
		-> StorageResult<Vec<Tenant>>;

	/// Get tenant count
	async fn count_tenants(&self) -> StorageResult<usize>;
}

/// Trait for event ledger storage operations
///
/// Append is the only mutation; there is deliberately no update or delete.
#[async_trait]
pub trait EventStorageTrait: Send + Sync {
	/// Append a new event to the ledger
	async fn append_event(&self, event: Event) -> StorageResult<()>;

	/// Get all events for a tenant ordered by received_at
	async fn get_events_by_tenant(&self, tenant_id: &str) -> StorageResult<Vec<Event>>;

	/// Count events for a tenant
	async fn count_events(&self, tenant_id: &str) -> StorageResult<u64>;

	/// Timestamp of the most recent event for a tenant, if any
	async fn last_event_at(&self, tenant_id: &str) -> StorageResult<Option<DateTime<Utc>>>;
}

/// Trait for provider storage operations
#[async_trait]
pub trait ProviderStorageTrait: Send + Sync {
	/// Add a new provider to storage
	async fn create_provider(&self, provider: Provider) -> StorageResult<()>;

	/// Get a provider by ID
	async fn get_provider(&self, provider_id: &str) -> StorageResult<Option<Provider>>;

	/// Update an existing provider
	async fn update_provider(&self, provider: Provider) -> StorageResult<()>;

	/// Get all providers
	async fn list_all_providers(&self) -> StorageResult<Vec<Provider>>;

	/// Get provider count
	async fn count_providers(&self) -> StorageResult<usize>;
}

/// Main storage trait that combines all storage operations
#[async_trait]
pub trait StorageTrait: TenantStorageTrait + EventStorageTrait + ProviderStorageTrait {
	/// Health check for the storage system
	async fn health_check(&self) -> StorageResult<bool>;

	/// Get overall storage statistics
	async fn stats(&self) -> StorageResult<StorageStats>;

	/// Close the storage connection
	async fn close(&self) -> StorageResult<()>;
}

impl StorageError {
	/// Convenience constructor for not-found errors
	pub fn not_found(id: impl Into<String>) -> Self {
		StorageError::NotFound { id: id.into() }
	}
}
