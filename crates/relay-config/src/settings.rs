//! Configuration settings structures

use crate::configurable_value::{ConfigurableValue, ConfigurableValueError};
use relay_types::ProviderConfig as DomainProviderConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
	pub server: ServerSettings,
	pub providers: HashMap<String, ProviderSettings>,
	pub timeouts: TimeoutSettings,
	pub environment: EnvironmentSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Individual provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderSettings {
	pub provider_id: String,
	pub adapter_id: String,
	pub endpoint: String,
	pub timeout_ms: Option<u64>,
	pub enabled: bool,
	/// API key for the provider, either inline or from the environment
	pub api_key: Option<ConfigurableValue>,
	pub headers: Option<HashMap<String, String>>,
	// Optional descriptive metadata
	pub name: Option<String>,
	pub description: Option<String>,
}

impl ProviderSettings {
	/// Convert to the domain provider configuration, resolving secrets
	pub fn to_domain_config(
		&self,
		default_timeout_ms: u64,
	) -> Result<DomainProviderConfig, ConfigurableValueError> {
		let api_key = match &self.api_key {
			Some(value) => Some(value.resolve_for_secret()?),
			None => None,
		};

		Ok(DomainProviderConfig {
			provider_id: self.provider_id.clone(),
			adapter_id: self.adapter_id.clone(),
			endpoint: self.endpoint.clone(),
			timeout_ms: self.timeout_ms.unwrap_or(default_timeout_ms),
			enabled: self.enabled,
			name: self.name.clone(),
			description: self.description.clone(),
			api_key,
			headers: self.headers.clone(),
		})
	}
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TimeoutSettings {
	/// Per-provider timeout in milliseconds
	pub per_provider_ms: u64,
	/// Global routing timeout in milliseconds; bounds the whole fan-out
	pub global_ms: u64,
	/// Request timeout for HTTP clients
	pub request_ms: u64,
}

/// Environment-specific settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EnvironmentSettings {
	pub profile: EnvironmentProfile,
	pub debug: bool,
	pub rate_limiting: RateLimitSettings,
}

/// Environment profiles
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentProfile {
	Development,
	Staging,
	Production,
}

/// Rate limiting configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RateLimitSettings {
	pub enabled: bool,
	pub requests_per_minute: u32,
	pub burst_size: u32,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			server: ServerSettings {
				host: "0.0.0.0".to_string(),
				port: 3000,
			},
			providers: HashMap::new(),
			timeouts: TimeoutSettings {
				per_provider_ms: 10_000,
				global_ms: 12_000,
				request_ms: 15_000,
			},
			environment: EnvironmentSettings {
				profile: EnvironmentProfile::Development,
				debug: true,
				rate_limiting: RateLimitSettings {
					enabled: false,
					requests_per_minute: 100,
					burst_size: 10,
				},
			},
			logging: LoggingSettings {
				level: "info".to_string(),
				format: LogFormat::Pretty,
				structured: false,
			},
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Get enabled providers only
	pub fn enabled_providers(&self) -> HashMap<String, ProviderSettings> {
		self.providers
			.iter()
			.filter(|(_, config)| config.enabled)
			.map(|(k, v)| (k.clone(), v.clone()))
			.collect()
	}

	/// Check if running in production
	pub fn is_production(&self) -> bool {
		self.environment.profile == EnvironmentProfile::Production
	}

	/// Check if debug mode is enabled
	pub fn is_debug(&self) -> bool {
		self.environment.debug && !self.is_production()
	}
}
