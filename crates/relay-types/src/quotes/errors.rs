//! Error types for quote operations

use thiserror::Error;

/// Validation errors for quote requests
#[derive(Debug, Error)]
pub enum QuoteValidationError {
	#[error("Missing required field: {field}")]
	MissingField { field: String },

	#[error("Invalid amount: {reason}")]
	InvalidAmount { reason: String },

	#[error("Invalid chainId: must be greater than zero")]
	InvalidChainId,
}

/// Quote operation errors
#[derive(Debug, Error)]
pub enum QuoteError {
	#[error("Quote validation failed: {0}")]
	Validation(#[from] QuoteValidationError),

	#[error("Quote processing failed: {reason}")]
	ProcessingFailed { reason: String },
}
