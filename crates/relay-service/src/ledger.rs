//! Event ledger service
//!
//! Service for appending tenant events and computing per-tenant aggregates.
//! Aggregates are derived from the ledger on read, never stored.

use std::sync::Arc;

use relay_storage::{EventStorage, Storage, TenantStorage};
use relay_types::{AppendEventRequest, Event, EventAggregate};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerServiceError {
	#[error("validation error: {0}")]
	Validation(String),
	#[error("tenant not found: {0}")]
	TenantNotFound(String),
	#[error("storage error: {0}")]
	Storage(String),
}

#[derive(Clone)]
pub struct LedgerService {
	storage: Arc<dyn Storage>,
}

impl LedgerService {
	pub fn new(storage: Arc<dyn Storage>) -> Self {
		Self { storage }
	}

	async fn ensure_tenant_exists(&self, tenant_id: &str) -> Result<(), LedgerServiceError> {
		let tenant = self
			.storage
			.get_tenant(tenant_id)
			.await
			.map_err(|e| LedgerServiceError::Storage(e.to_string()))?;

		if tenant.is_none() {
			return Err(LedgerServiceError::TenantNotFound(tenant_id.to_string()));
		}
		Ok(())
	}

	/// Validate and append an event for an existing tenant
	pub async fn append_event(
		&self,
		tenant_id: &str,
		request: &AppendEventRequest,
	) -> Result<Event, LedgerServiceError> {
		request
			.validate()
			.map_err(|e| LedgerServiceError::Validation(e.to_string()))?;

		self.ensure_tenant_exists(tenant_id).await?;

		let event = Event::new(tenant_id.to_string(), request.payload.clone());

		self.storage
			.append_event(event.clone())
			.await
			.map_err(|e| LedgerServiceError::Storage(e.to_string()))?;

		Ok(event)
	}

	/// Compute the aggregate view for an existing tenant
	///
	/// A tenant with no events yet aggregates to a zero count with no
	/// last-seen timestamp; only an unknown tenant is an error.
	pub async fn aggregate(&self, tenant_id: &str) -> Result<EventAggregate, LedgerServiceError> {
		self.ensure_tenant_exists(tenant_id).await?;

		let count = self
			.storage
			.count_events(tenant_id)
			.await
			.map_err(|e| LedgerServiceError::Storage(e.to_string()))?;

		let last_seen = self
			.storage
			.last_event_at(tenant_id)
			.await
			.map_err(|e| LedgerServiceError::Storage(e.to_string()))?;

		Ok(EventAggregate { count, last_seen })
	}

	pub async fn events_for_tenant(&self, tenant_id: &str) -> Result<Vec<Event>, LedgerServiceError> {
		self.ensure_tenant_exists(tenant_id).await?;

		self.storage
			.get_events_by_tenant(tenant_id)
			.await
			.map_err(|e| LedgerServiceError::Storage(e.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use relay_storage::{MemoryStore, TenantStorage};
	use relay_types::Tenant;
	use serde_json::json;

	async fn service_with_tenant() -> (LedgerService, String) {
		let storage = Arc::new(MemoryStore::new());
		let tenant = Tenant::new("Acme".to_string(), None);
		let tenant_id = tenant.tenant_id.clone();
		storage.create_tenant(tenant).await.unwrap();
		(LedgerService::new(storage), tenant_id)
	}

	#[tokio::test]
	async fn test_append_and_aggregate() {
		let (service, tenant_id) = service_with_tenant().await;

		let request = AppendEventRequest {
			payload: json!({"x": 1}),
		};
		let event = service.append_event(&tenant_id, &request).await.unwrap();
		assert_eq!(event.tenant_id, tenant_id);

		let aggregate = service.aggregate(&tenant_id).await.unwrap();
		assert_eq!(aggregate.count, 1);
		assert!(aggregate.last_seen.is_some());
	}

	#[tokio::test]
	async fn test_aggregate_without_events() {
		let (service, tenant_id) = service_with_tenant().await;

		let aggregate = service.aggregate(&tenant_id).await.unwrap();
		assert_eq!(aggregate.count, 0);
		assert!(aggregate.last_seen.is_none());
	}

	#[tokio::test]
	async fn test_append_for_unknown_tenant() {
		let (service, _) = service_with_tenant().await;

		let request = AppendEventRequest {
			payload: json!({"x": 1}),
		};
		assert!(matches!(
			service.append_event("ghost", &request).await,
			Err(LedgerServiceError::TenantNotFound(_))
		));
	}

	#[tokio::test]
	async fn test_aggregate_for_unknown_tenant() {
		let (service, _) = service_with_tenant().await;

		assert!(matches!(
			service.aggregate("ghost").await,
			Err(LedgerServiceError::TenantNotFound(_))
		));
	}

	#[tokio::test]
	async fn test_append_rejects_non_object_payload() {
		let (service, tenant_id) = service_with_tenant().await;

		let request = AppendEventRequest {
			payload: json!("just a string"),
		};
		assert!(matches!(
			service.append_event(&tenant_id, &request).await,
			Err(LedgerServiceError::Validation(_))
		));
	}

	#[tokio::test]
	async fn test_events_for_tenant_in_receipt_order() {
		let (service, tenant_id) = service_with_tenant().await;

		for i in 0..3 {
			service
				.append_event(
					&tenant_id,
					&AppendEventRequest {
						payload: json!({"seq": i}),
					},
				)
				.await
				.unwrap();
		}

		let events = service.events_for_tenant(&tenant_id).await.unwrap();
		assert_eq!(events.len(), 3);
		assert_eq!(events[0].payload["seq"], 0);
		assert_eq!(events[2].payload["seq"], 2);

		assert!(matches!(
			service.events_for_tenant("ghost").await,
			Err(LedgerServiceError::TenantNotFound(_))
		));
	}

	#[tokio::test]
	async fn test_last_seen_advances() {
		let (service, tenant_id) = service_with_tenant().await;

		service
			.append_event(
				&tenant_id,
				&AppendEventRequest {
					payload: json!({"n": 1}),
				},
			)
			.await
			.unwrap();
		let first = service.aggregate(&tenant_id).await.unwrap();

		service
			.append_event(
				&tenant_id,
				&AppendEventRequest {
					payload: json!({"n": 2}),
				},
			)
			.await
			.unwrap();
		let second = service.aggregate(&tenant_id).await.unwrap();

		assert_eq!(second.count, 2);
		assert!(second.last_seen.unwrap() >= first.last_seen.unwrap());
	}
}
