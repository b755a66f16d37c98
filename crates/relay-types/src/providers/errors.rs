//! Error types for provider configuration

use thiserror::Error;

/// Result type for provider validation operations
pub type ProviderValidationResult<T> = Result<T, ProviderValidationError>;

/// Validation errors for provider configurations
#[derive(Debug, Error)]
pub enum ProviderValidationError {
	#[error("Provider id is required")]
	MissingProviderId,

	#[error("Provider '{provider_id}' is missing an adapter id")]
	MissingAdapterId { provider_id: String },

	#[error("Provider '{provider_id}' has invalid endpoint '{endpoint}'")]
	InvalidEndpoint {
		provider_id: String,
		endpoint: String,
	},

	#[error("Provider '{provider_id}' timeout must be between {min}ms and {max}ms")]
	InvalidTimeout {
		provider_id: String,
		min: u64,
		max: u64,
	},
}
