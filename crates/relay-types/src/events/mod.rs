//! Core Event domain model
//!
//! Events are append-only: once created they are never mutated, and the
//! ledger exposes no update or delete operation.

use chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod errors;
pub mod request;
pub mod response;

pub use errors::EventValidationError;
pub use request::AppendEventRequest;
pub use response::{EventAggregateResponse, EventResponse, EventsResponse};

/// Result type for event validation operations
pub type EventValidationResult<T> = Result<T, EventValidationError>;

/// Core Event domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
	/// Unique identifier for the event
	pub event_id: String,

	/// Tenant that submitted the event
	pub tenant_id: String,

	/// Arbitrary JSON object supplied by the tenant
	pub payload: serde_json::Value,

	/// When the event was accepted
	pub received_at: DateTime<Utc>,
}

impl Event {
	/// Create a new event for a tenant
	pub fn new(tenant_id: String, payload: serde_json::Value) -> Self {
		Self {
			event_id: Uuid::new_v4().to_string(),
			tenant_id,
			payload,
			received_at: Utc::now(),
		}
	}
}

/// Aggregate view over a tenant's events, computed on read
#[derive(Debug, Clone, PartialEq)]
pub struct EventAggregate {
	/// Number of events appended for the tenant
	pub count: u64,

	/// Timestamp of the most recent event, if any
	pub last_seen: Option<DateTime<Utc>>,
}

impl EventAggregate {
	pub fn empty() -> Self {
		Self {
			count: 0,
			last_seen: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_event_creation() {
		let event = Event::new("tenant-1".to_string(), json!({"x": 1}));

		assert_eq!(event.tenant_id, "tenant-1");
		assert_eq!(event.payload["x"], 1);
		assert!(!event.event_id.is_empty());
	}

	#[test]
	fn test_empty_aggregate() {
		let aggregate = EventAggregate::empty();
		assert_eq!(aggregate.count, 0);
		assert!(aggregate.last_seen.is_none());
	}
}
