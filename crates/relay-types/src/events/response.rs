//! Event API response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Event, EventAggregate};

/// API response for a single appended event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
	pub event_id: String,
	pub tenant_id: String,
	pub payload: serde_json::Value,
	pub received_at: DateTime<Utc>,
}

impl From<&Event> for EventResponse {
	fn from(event: &Event) -> Self {
		Self {
			event_id: event.event_id.clone(),
			tenant_id: event.tenant_id.clone(),
			payload: event.payload.clone(),
			received_at: event.received_at,
		}
	}
}

/// API response for GET /v1/tenants/{id}/events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
	pub events: Vec<EventResponse>,
	pub total_events: usize,
	pub timestamp: i64,
}

/// API response for GET /v1/tenants/{id}/events/aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAggregateResponse {
	pub count: u64,
	pub last_seen: Option<DateTime<Utc>>,
	pub timestamp: i64,
}

impl EventAggregateResponse {
	pub fn from_aggregate(aggregate: &EventAggregate) -> Self {
		Self {
			count: aggregate.count,
			last_seen: aggregate.last_seen,
			timestamp: Utc::now().timestamp(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_event_response_wire_format() {
		let event = Event::new("tenant-1".to_string(), json!({"x": 1}));
		let response = EventResponse::from(&event);
		let json = serde_json::to_value(&response).unwrap();

		assert_eq!(json["eventId"], event.event_id);
		assert_eq!(json["tenantId"], "tenant-1");
		assert_eq!(json["payload"]["x"], 1);
	}

	#[test]
	fn test_aggregate_response_null_last_seen() {
		let response = EventAggregateResponse::from_aggregate(&EventAggregate::empty());
		let json = serde_json::to_value(&response).unwrap();

		assert_eq!(json["count"], 0);
		assert!(json["lastSeen"].is_null());
	}
}
