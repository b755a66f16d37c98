//! RFQ v1 adapter for request-for-quote style providers
//!
//! Speaks a JSON POST protocol: the provider receives the full quote request
//! and answers with a firm quote. Authenticates with a bearer token.

use async_trait::async_trait;
use reqwest::{
	header::{HeaderMap, HeaderName, HeaderValue},
	Client,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use url::Url;

use relay_types::{
	Adapter, AdapterError, AdapterResult, ProviderRuntimeConfig, QuoteAdapter, QuoteRequest,
	QuoteResult,
};

/// RFQ v1 wire request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct RfqQuoteRequest {
	from_asset: String,
	to_asset: String,
	amount: String,
	chain_id: u64,
}

/// RFQ v1 wire response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RfqQuoteResponse {
	/// Output amount in base units, as a decimal string
	to_amount: String,
	/// Quoted execution fee in base units; absent means zero
	fee: Option<String>,
}

/// Adapter for RFQ v1 providers
#[derive(Debug)]
pub struct RfqAdapter {
	config: Adapter,
}

impl RfqAdapter {
	pub fn new(config: Adapter) -> Self {
		Self { config }
	}

	/// Create the default RFQ v1 adapter instance
	pub fn with_default_config() -> Self {
		Self::new(Adapter::new(
			"rfq-v1".to_string(),
			"RFQ v1 Protocol".to_string(),
			"Request-for-quote JSON adapter".to_string(),
			"1.0.0".to_string(),
		))
	}

	/// Create an HTTP client with RFQ headers and the provider timeout
	fn create_client(config: &ProviderRuntimeConfig) -> AdapterResult<Client> {
		let mut headers = HeaderMap::new();
		headers.insert("Content-Type", HeaderValue::from_static("application/json"));
		headers.insert("Accept", HeaderValue::from_static("application/json"));
		headers.insert("User-Agent", HeaderValue::from_static("Quote-Relay/1.0"));
		headers.insert("X-Adapter-Type", HeaderValue::from_static("RFQ-v1"));

		if let Some(api_key) = &config.api_key {
			let value = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
				.map_err(|_| AdapterError::ConfigError {
					reason: format!("Invalid API key for provider {}", config.provider_id),
				})?;
			headers.insert("Authorization", value);
		}

		// Custom headers from the provider config
		if let Some(provider_headers) = &config.headers {
			for (key, value) in provider_headers {
				if let (Ok(header_name), Ok(header_value)) =
					(HeaderName::from_str(key), HeaderValue::from_str(value))
				{
					headers.insert(header_name, header_value);
				}
			}
		}

		Client::builder()
			.default_headers(headers)
			.timeout(Duration::from_millis(config.timeout_ms))
			.build()
			.map_err(AdapterError::HttpError)
	}

	/// Join a path onto the provider's base endpoint
	fn build_url(base_url: &str, path: &str) -> AdapterResult<String> {
		let mut base = Url::parse(base_url).map_err(|e| AdapterError::ConfigError {
			reason: format!("Invalid base URL '{}': {}", base_url, e),
		})?;

		if !base.path().ends_with('/') {
			base.set_path(&format!("{}/", base.path()));
		}

		let joined = base.join(path).map_err(|e| AdapterError::ConfigError {
			reason: format!("Failed to join path '{}' to base '{}': {}", path, base_url, e),
		})?;

		Ok(joined.to_string())
	}
}

#[async_trait]
impl QuoteAdapter for RfqAdapter {
	fn adapter_info(&self) -> &Adapter {
		&self.config
	}

	async fn get_quote(
		&self,
		request: &QuoteRequest,
		config: &ProviderRuntimeConfig,
	) -> AdapterResult<QuoteResult> {
		debug!(
			"RFQ adapter requesting quote for {}/{} via provider {}",
			request.from_asset, request.to_asset, config.provider_id
		);

		let client = Self::create_client(config)?;
		let url = Self::build_url(&config.endpoint, "quote")?;

		let wire_request = RfqQuoteRequest {
			from_asset: request.from_asset.clone(),
			to_asset: request.to_asset.clone(),
			amount: request.amount.clone(),
			chain_id: request.chain_id,
		};

		let response = client
			.post(&url)
			.json(&wire_request)
			.send()
			.await
			.map_err(AdapterError::HttpError)?;

		if !response.status().is_success() {
			return Err(AdapterError::from_http_failure(response.status().as_u16()));
		}

		let body: RfqQuoteResponse =
			response
				.json()
				.await
				.map_err(|e| AdapterError::InvalidResponse {
					reason: format!("RFQ response did not match wire format: {}", e),
				})?;

		// Reject non-numeric amounts here so ranking never sees them
		body.to_amount
			.parse::<u128>()
			.map_err(|_| AdapterError::InvalidResponse {
				reason: format!("RFQ toAmount '{}' is not a base-unit amount", body.to_amount),
			})?;
		let estimated_cost = body.fee.unwrap_or_else(|| "0".to_string());
		estimated_cost
			.parse::<u128>()
			.map_err(|_| AdapterError::InvalidResponse {
				reason: format!("RFQ fee '{}' is not a base-unit amount", estimated_cost),
			})?;

		Ok(QuoteResult::new(
			config.provider_id.clone(),
			request.amount.clone(),
			body.to_amount,
			estimated_cost,
		))
	}

	async fn health_check(&self, config: &ProviderRuntimeConfig) -> AdapterResult<bool> {
		debug!(
			"RFQ adapter health check for provider {}",
			config.provider_id
		);

		let client = Self::create_client(config)?;
		let url = Self::build_url(&config.endpoint, "health")?;

		let response = client.get(&url).send().await.map_err(AdapterError::HttpError)?;
		Ok(response.status().is_success())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_config() {
		let adapter = RfqAdapter::with_default_config();
		assert_eq!(adapter.id(), "rfq-v1");
		assert_eq!(adapter.name(), "RFQ v1 Protocol");
	}

	#[test]
	fn test_build_url_joins_paths() {
		let url = RfqAdapter::build_url("https://quotes.example.com/api", "quote").unwrap();
		assert_eq!(url, "https://quotes.example.com/api/quote");

		let url = RfqAdapter::build_url("https://quotes.example.com/api/", "health").unwrap();
		assert_eq!(url, "https://quotes.example.com/api/health");
	}

	#[test]
	fn test_build_url_invalid_base() {
		assert!(RfqAdapter::build_url("not a url", "quote").is_err());
	}
}
