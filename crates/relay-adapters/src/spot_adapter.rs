//! Spot v1 adapter for indicative-price providers
//!
//! Speaks a GET query protocol: the provider exposes a price endpoint that
//! answers with numeric amounts. Authenticates with an `X-API-Key` header.

use async_trait::async_trait;
use reqwest::{
	header::{HeaderMap, HeaderName, HeaderValue},
	Client,
};
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use url::Url;

use relay_types::{
	Adapter, AdapterError, AdapterResult, ProviderRuntimeConfig, QuoteAdapter, QuoteRequest,
	QuoteResult,
};

/// Spot v1 wire response
///
/// Amounts come back as JSON numbers rather than strings, so normalization
/// converts them into the relay's string convention.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpotPriceResponse {
	/// Output amount in base units
	amount_out: u64,
	/// Estimated execution cost in base units; absent means zero
	#[serde(default)]
	cost: u64,
}

/// Adapter for Spot v1 providers
#[derive(Debug)]
pub struct SpotAdapter {
	config: Adapter,
}

impl SpotAdapter {
	pub fn new(config: Adapter) -> Self {
		Self { config }
	}

	/// Create the default Spot v1 adapter instance
	pub fn with_default_config() -> Self {
		Self::new(Adapter::new(
			"spot-v1".to_string(),
			"Spot v1 Protocol".to_string(),
			"Spot price query adapter".to_string(),
			"1.0.0".to_string(),
		))
	}

	fn create_client(config: &ProviderRuntimeConfig) -> AdapterResult<Client> {
		let mut headers = HeaderMap::new();
		headers.insert("Accept", HeaderValue::from_static("application/json"));
		headers.insert("User-Agent", HeaderValue::from_static("Quote-Relay/1.0"));
		headers.insert("X-Adapter-Type", HeaderValue::from_static("Spot-v1"));

		if let Some(api_key) = &config.api_key {
			let value = HeaderValue::from_str(api_key.expose_secret()).map_err(|_| {
				AdapterError::ConfigError {
					reason: format!("Invalid API key for provider {}", config.provider_id),
				}
			})?;
			headers.insert("X-API-Key", value);
		}

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

	/// Build the price query URL for a request
	fn build_price_url(base_url: &str, request: &QuoteRequest) -> AdapterResult<String> {
		let mut base = Url::parse(base_url).map_err(|e| AdapterError::ConfigError {
			reason: format!("Invalid base URL '{}': {}", base_url, e),
		})?;

		if !base.path().ends_with('/') {
			base.set_path(&format!("{}/", base.path()));
		}

		let mut url = base.join("v1/price").map_err(|e| AdapterError::ConfigError {
			reason: format!("Failed to build price URL from '{}': {}", base_url, e),
		})?;

		url.query_pairs_mut()
			.append_pair("fromAsset", &request.from_asset)
			.append_pair("toAsset", &request.to_asset)
			.append_pair("amount", &request.amount)
			.append_pair("chainId", &request.chain_id.to_string());

		Ok(url.to_string())
	}
}

#[async_trait]
impl QuoteAdapter for SpotAdapter {
	fn adapter_info(&self) -> &Adapter {
		&self.config
	}

	async fn get_quote(
		&self,
		request: &QuoteRequest,
		config: &ProviderRuntimeConfig,
	) -> AdapterResult<QuoteResult> {
		debug!(
			"Spot adapter requesting price for {}/{} via provider {}",
			request.from_asset, request.to_asset, config.provider_id
		);

		let client = Self::create_client(config)?;
		let url = Self::build_price_url(&config.endpoint, request)?;

		let response = client.get(&url).send().await.map_err(AdapterError::HttpError)?;

		if !response.status().is_success() {
			return Err(AdapterError::from_http_failure(response.status().as_u16()));
		}

		let body: SpotPriceResponse =
			response
				.json()
				.await
				.map_err(|e| AdapterError::InvalidResponse {
					reason: format!("Spot response did not match wire format: {}", e),
				})?;

		if body.amount_out == 0 {
			return Err(AdapterError::InvalidResponse {
				reason: "Spot provider returned a zero output amount".to_string(),
			});
		}

		Ok(QuoteResult::new(
			config.provider_id.clone(),
			request.amount.clone(),
			body.amount_out.to_string(),
			body.cost.to_string(),
		))
	}

	async fn health_check(&self, config: &ProviderRuntimeConfig) -> AdapterResult<bool> {
		debug!(
			"Spot adapter health check for provider {}",
			config.provider_id
		);

		let client = Self::create_client(config)?;
		let mut base = Url::parse(&config.endpoint).map_err(|e| AdapterError::ConfigError {
			reason: format!("Invalid base URL '{}': {}", config.endpoint, e),
		})?;
		if !base.path().ends_with('/') {
			base.set_path(&format!("{}/", base.path()));
		}
		let url = base.join("v1/ping").map_err(|e| AdapterError::ConfigError {
			reason: format!("Failed to build ping URL: {}", e),
		})?;

		let response = client
			.get(url)
			.send()
			.await
			.map_err(AdapterError::HttpError)?;
		Ok(response.status().is_success())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn create_test_request() -> QuoteRequest {
		QuoteRequest {
			from_asset: "ETH".to_string(),
			to_asset: "USDC".to_string(),
			amount: "1000000000000000000".to_string(),
			chain_id: 1,
		}
	}

	#[test]
	fn test_default_config() {
		let adapter = SpotAdapter::with_default_config();
		assert_eq!(adapter.id(), "spot-v1");
	}

	#[test]
	fn test_price_url_carries_query() {
		let url =
			SpotAdapter::build_price_url("https://spot.example.com", &create_test_request())
				.unwrap();

		assert!(url.starts_with("https://spot.example.com/v1/price?"));
		assert!(url.contains("fromAsset=ETH"));
		assert!(url.contains("toAsset=USDC"));
		assert!(url.contains("chainId=1"));
	}

	#[test]
	fn test_numeric_response_normalization() {
		let body: SpotPriceResponse =
			serde_json::from_str(r#"{"amountOut": 2500000000, "cost": 15000}"#).unwrap();
		assert_eq!(body.amount_out, 2_500_000_000);
		assert_eq!(body.cost, 15_000);

		// cost is optional on the wire
		let body: SpotPriceResponse = serde_json::from_str(r#"{"amountOut": 10}"#).unwrap();
		assert_eq!(body.cost, 0);
	}
}
