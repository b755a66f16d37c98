//! Error types for event ledger operations

use thiserror::Error;

/// Validation errors for event submissions
#[derive(Debug, Error)]
pub enum EventValidationError {
	#[error("payload is required and must be a JSON object")]
	InvalidPayload,

	#[error("payload exceeds maximum size of {max} bytes (got {actual})")]
	PayloadTooLarge { max: usize, actual: usize },
}
