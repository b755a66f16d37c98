//! Core Provider domain model and business logic

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod config;
pub mod errors;
pub mod response;

pub use config::{ProviderConfig, ProviderRuntimeConfig};
pub use errors::{ProviderValidationError, ProviderValidationResult};
pub use response::{ProviderResponse, ProvidersResponse};

use crate::constants::limits::{MAX_PROVIDER_TIMEOUT_MS, MIN_PROVIDER_TIMEOUT_MS};
use crate::SecretString;

/// Core Provider domain model
///
/// A provider is one external quoting API, reached through the adapter named
/// by `adapter_id`.
#[derive(Debug, Clone)]
pub struct Provider {
	/// Unique identifier for the provider
	pub provider_id: String,

	/// ID of the adapter used to communicate with this provider
	pub adapter_id: String,

	/// Base HTTP endpoint for the provider API
	pub endpoint: String,

	/// Timeout for requests to this provider in milliseconds
	pub timeout_ms: u64,

	/// Current operational status
	pub status: ProviderStatus,

	/// Additional metadata and configuration
	pub metadata: ProviderMetadata,

	/// When the provider was registered
	pub created_at: DateTime<Utc>,

	/// Last time the provider responded to a request or health check
	pub last_seen: Option<DateTime<Utc>>,

	/// Request counters
	pub metrics: ProviderMetrics,
}

/// Provider operational status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderStatus {
	/// Provider is active and available
	Active,
	/// Provider is temporarily inactive
	Inactive,
	/// Provider has encountered repeated errors
	Error,
	/// Provider is being initialized
	Initializing,
}

/// Provider metadata and per-provider configuration
#[derive(Debug, Clone, Default)]
pub struct ProviderMetadata {
	/// Human-readable name
	pub name: Option<String>,

	/// Description of the provider
	pub description: Option<String>,

	/// API key sent to the provider, if it requires one
	pub api_key: Option<SecretString>,

	/// Custom HTTP headers for requests
	pub headers: Option<HashMap<String, String>>,
}

/// Request counters for monitoring
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderMetrics {
	/// Total number of requests made
	pub total_requests: u64,

	/// Number of successful requests
	pub successful_requests: u64,

	/// Number of failed requests
	pub failed_requests: u64,

	/// Last time metrics were updated
	pub last_updated: DateTime<Utc>,
}

impl ProviderMetrics {
	pub fn new() -> Self {
		Self {
			total_requests: 0,
			successful_requests: 0,
			failed_requests: 0,
			last_updated: Utc::now(),
		}
	}

	pub fn record_success(&mut self) {
		self.total_requests += 1;
		self.successful_requests += 1;
		self.last_updated = Utc::now();
	}

	pub fn record_failure(&mut self) {
		self.total_requests += 1;
		self.failed_requests += 1;
		self.last_updated = Utc::now();
	}
}

impl Default for ProviderMetrics {
	fn default() -> Self {
		Self::new()
	}
}

impl Provider {
	/// Create a new provider
	pub fn new(provider_id: String, adapter_id: String, endpoint: String, timeout_ms: u64) -> Self {
		Self {
			provider_id,
			adapter_id,
			endpoint,
			timeout_ms,
			status: ProviderStatus::Initializing,
			metadata: ProviderMetadata::default(),
			created_at: Utc::now(),
			last_seen: None,
			metrics: ProviderMetrics::new(),
		}
	}

	/// Check if the provider is available for requests
	pub fn is_available(&self) -> bool {
		matches!(self.status, ProviderStatus::Active)
	}

	/// Update provider status and mark it as seen
	pub fn update_status(&mut self, status: ProviderStatus) {
		self.status = status;
		self.last_seen = Some(Utc::now());
	}

	/// Validate the provider configuration
	pub fn validate(&self) -> ProviderValidationResult<()> {
		if self.provider_id.trim().is_empty() {
			return Err(ProviderValidationError::MissingProviderId);
		}
		if self.adapter_id.trim().is_empty() {
			return Err(ProviderValidationError::MissingAdapterId {
				provider_id: self.provider_id.clone(),
			});
		}
		if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
			return Err(ProviderValidationError::InvalidEndpoint {
				provider_id: self.provider_id.clone(),
				endpoint: self.endpoint.clone(),
			});
		}
		if self.timeout_ms < MIN_PROVIDER_TIMEOUT_MS || self.timeout_ms > MAX_PROVIDER_TIMEOUT_MS {
			return Err(ProviderValidationError::InvalidTimeout {
				provider_id: self.provider_id.clone(),
				min: MIN_PROVIDER_TIMEOUT_MS,
				max: MAX_PROVIDER_TIMEOUT_MS,
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn create_test_provider() -> Provider {
		Provider::new(
			"test-provider".to_string(),
			"rfq-v1".to_string(),
			"https://quotes.example.com".to_string(),
			5000,
		)
	}

	#[test]
	fn test_provider_creation() {
		let provider = create_test_provider();

		assert_eq!(provider.status, ProviderStatus::Initializing);
		assert!(!provider.is_available());
		assert!(provider.validate().is_ok());
	}

	#[test]
	fn test_provider_activation() {
		let mut provider = create_test_provider();
		provider.update_status(ProviderStatus::Active);

		assert!(provider.is_available());
		assert!(provider.last_seen.is_some());
	}

	#[test]
	fn test_invalid_endpoint_rejected() {
		let mut provider = create_test_provider();
		provider.endpoint = "ftp://quotes.example.com".to_string();
		assert!(matches!(
			provider.validate(),
			Err(ProviderValidationError::InvalidEndpoint { .. })
		));
	}

	#[test]
	fn test_timeout_outside_range_rejected() {
		let mut provider = create_test_provider();
		provider.timeout_ms = MIN_PROVIDER_TIMEOUT_MS - 1;
		assert!(matches!(
			provider.validate(),
			Err(ProviderValidationError::InvalidTimeout { .. })
		));

		provider.timeout_ms = MAX_PROVIDER_TIMEOUT_MS + 1;
		assert!(matches!(
			provider.validate(),
			Err(ProviderValidationError::InvalidTimeout { .. })
		));

		provider.timeout_ms = MAX_PROVIDER_TIMEOUT_MS;
		assert!(provider.validate().is_ok());
	}

	#[test]
	fn test_metrics_counters() {
		let mut metrics = ProviderMetrics::new();
		metrics.record_success();
		metrics.record_success();
		metrics.record_failure();

		assert_eq!(metrics.total_requests, 3);
		assert_eq!(metrics.successful_requests, 2);
		assert_eq!(metrics.failed_requests, 1);
	}
}
