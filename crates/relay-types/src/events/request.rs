//! Event submission request model and validation

use serde::{Deserialize, Serialize};

use crate::constants::limits::MAX_EVENT_PAYLOAD_BYTES;

use super::{EventValidationError, EventValidationResult};

/// API request body for POST /v1/tenants/{id}/events
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppendEventRequest {
	/// Arbitrary JSON object carried by the event
	pub payload: serde_json::Value,
}

impl AppendEventRequest {
	/// Validate the submission before it reaches the ledger
	pub fn validate(&self) -> EventValidationResult<()> {
		if !self.payload.is_object() {
			return Err(EventValidationError::InvalidPayload);
		}

		// Serialized size bound keeps the append path predictable
		let size = serde_json::to_vec(&self.payload)
			.map(|bytes| bytes.len())
			.unwrap_or(usize::MAX);
		if size > MAX_EVENT_PAYLOAD_BYTES {
			return Err(EventValidationError::PayloadTooLarge {
				max: MAX_EVENT_PAYLOAD_BYTES,
				actual: size,
			});
		}

		Ok(())
	}
}
