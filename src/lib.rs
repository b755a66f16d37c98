//! Quote Relay Library
//!
//! A multi-tenant event-relay orchestrator: registers tenants, appends
//! tenant events to a ledger, and routes price-quote requests across
//! pluggable providers to return a single best quote.

// Core domain types - the most commonly used types
pub use relay_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	// Core types
	Adapter,
	AdapterError,
	AppendEventRequest,
	Event,
	EventAggregate,
	Provider,
	ProviderConfig,
	ProviderStatus,
	QuoteAdapter,
	QuoteError,
	QuoteRequest,
	QuoteResponse,
	QuoteResult,
	RegisterTenantRequest,
	SecretString,
	Tenant,
};

// Service layer
pub use relay_service::{
	JobHandle, JobRunner, LedgerService, LedgerServiceError, ProviderHealthJob, ProviderService,
	ProviderServiceError, RouterService, RouterServiceError, TenantService, TenantServiceError,
};

// Storage layer
pub use relay_storage::{
	traits::{EventStorage, ProviderStorage, StorageError, StorageResult, TenantStorage},
	MemoryStore, Storage,
};

// Storage traits module for advanced usage
pub mod traits {
	pub use relay_storage::traits::*;
}

// API layer
pub use relay_api::{create_router, AppState};

// Adapters
pub use relay_adapters::{AdapterRegistry, AdapterResult, RfqAdapter, SpotAdapter};

// Config
pub use relay_config::{load_config, log_service_info, log_startup_complete, Settings};

// Module aliases for direct access to each layer
pub mod models {
	pub use relay_types::*;
}

pub mod storage {
	pub use relay_storage::*;
}

pub mod config {
	pub use relay_config::*;
}

pub mod adapters {
	pub use relay_adapters::*;
}

pub mod api {
	pub use relay_api::*;
}

pub mod service {
	pub use relay_service::*;
}

pub mod mocks;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

// Re-export external dependencies for integrations
pub use async_trait;
pub use reqwest;

/// How often the background job re-checks provider health
const PROVIDER_HEALTH_INTERVAL: Duration = Duration::from_secs(300);

/// Builder pattern for configuring the relay
pub struct RelayBuilder<S = MemoryStore>
where
	S: Storage + 'static,
{
	settings: Option<Settings>,
	storage: S,
	adapter_registry: Option<AdapterRegistry>,
	providers: Vec<Provider>,
}

impl<S> RelayBuilder<S>
where
	S: Storage + Clone + 'static,
{
	/// Create a new relay builder with the provided storage
	pub fn with_storage(storage: S) -> Self {
		Self {
			settings: None,
			storage,
			adapter_registry: None,
			providers: Vec::new(),
		}
	}
}

// Default constructor using MemoryStore for convenience
impl Default for RelayBuilder<MemoryStore> {
	fn default() -> Self {
		Self::new()
	}
}

impl RelayBuilder<MemoryStore> {
	/// Create a new relay builder with default memory storage
	pub fn new() -> Self {
		Self::with_storage(MemoryStore::new())
	}
}

impl<S> RelayBuilder<S>
where
	S: Storage + Clone + 'static,
{
	/// Add a provider to the relay
	pub fn with_provider(mut self, provider: Provider) -> Self {
		self.providers.push(provider);
		self
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Register a custom adapter (uses adapter's own ID)
	/// Panics if adapter registration fails (this is intentional for startup-time configuration errors)
	pub fn with_adapter(mut self, adapter: Box<dyn QuoteAdapter>) -> Self {
		let mut registry = self
			.adapter_registry
			.unwrap_or_else(AdapterRegistry::with_defaults);
		registry.register(adapter).expect(
			"Failed to register adapter during startup - this is a fatal configuration error",
		);
		self.adapter_registry = Some(registry);
		self
	}

	/// Upsert providers defined in Settings into storage so that start() can
	/// load them via `list_all_providers()`.
	async fn upsert_providers_from_settings(&self, settings: &Settings) -> Result<(), String> {
		let mut errors = Vec::new();

		for provider_settings in settings.enabled_providers().values() {
			let config = match provider_settings.to_domain_config(settings.timeouts.per_provider_ms)
			{
				Ok(config) => config,
				Err(e) => {
					errors.push(format!(
						"Provider '{}' configuration failed: {}",
						provider_settings.provider_id, e
					));
					continue;
				},
			};

			let mut provider = Provider::new(
				config.provider_id.clone(),
				config.adapter_id.clone(),
				config.endpoint.clone(),
				config.timeout_ms,
			);
			provider.metadata.name = config.name.or_else(|| Some(config.provider_id.clone()));
			provider.metadata.description = config.description;
			provider.metadata.api_key = config.api_key;
			provider.metadata.headers = config.headers;
			provider.status = ProviderStatus::Active;

			if let Err(validation_error) = provider.validate() {
				errors.push(format!(
					"Provider '{}' validation failed: {}",
					provider.provider_id, validation_error
				));
				continue;
			}

			if let Err(storage_error) = self.storage.create_provider(provider.clone()).await {
				errors.push(format!(
					"Failed to create provider '{}': {}",
					provider.provider_id, storage_error
				));
			}
		}

		if !errors.is_empty() {
			return Err(format!(
				"Configuration errors found:\n{}",
				errors.join("\n")
			));
		}

		Ok(())
	}

	/// Upsert collected providers into storage
	async fn upsert_collected_providers(&self) -> Result<(), String> {
		let mut errors = Vec::new();

		for provider in &self.providers {
			if let Err(validation_error) = provider.validate() {
				errors.push(format!(
					"Provider '{}' validation failed: {}",
					provider.provider_id, validation_error
				));
				continue;
			}

			if let Err(storage_error) = self.storage.create_provider(provider.clone()).await {
				errors.push(format!(
					"Failed to create provider '{}': {}",
					provider.provider_id, storage_error
				));
			}
		}

		if !errors.is_empty() {
			return Err(format!("Provider creation errors:\n{}", errors.join("\n")));
		}

		Ok(())
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use relay_config::settings::LogFormat;

		// Create env filter using config level or environment variable
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		// Initialize tracing with the configuration
		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Start the relay and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.clone().unwrap_or_default();
		// Upsert providers from settings into storage first - fail on any configuration errors
		self.upsert_providers_from_settings(&settings).await?;
		// Upsert collected providers from with_provider() calls
		self.upsert_collected_providers().await?;

		let providers = self
			.storage
			.list_all_providers()
			.await
			.map_err(|e| format!("Failed to get providers: {}", e))?;

		info!(
			"Successfully initialized with {} provider(s)",
			providers.len()
		);

		// Use custom registry or create with defaults
		let adapter_registry = Arc::new(
			self.adapter_registry
				.unwrap_or_else(AdapterRegistry::with_defaults),
		);

		let router_service = RouterService::new(
			providers.clone(),
			Arc::clone(&adapter_registry),
			settings.timeouts.global_ms,
		);

		// Validate that all providers have matching adapters
		router_service
			.validate_providers()
			.map_err(|e| format!("Provider validation failed: {}", e))?;

		// Create application state
		let storage_arc: Arc<dyn Storage> = Arc::new(self.storage.clone());
		let app_state = AppState {
			router_service: Arc::new(router_service),
			tenant_service: Arc::new(TenantService::new(Arc::clone(&storage_arc))),
			ledger_service: Arc::new(LedgerService::new(Arc::clone(&storage_arc))),
			provider_service: Arc::new(ProviderService::new(
				Arc::clone(&storage_arc),
				Arc::clone(&adapter_registry),
			)),
			storage: storage_arc,
		};

		// Create router with state
		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	/// This method handles everything needed to run the server, including:
	/// - Loading .env file
	/// - Loading configuration with defaults
	/// - Initializing tracing
	/// - Spawning the provider health refresh job
	/// - Binding and serving the application
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let using_provided_settings = self.settings.is_some();
		let settings = if using_provided_settings {
			self.settings.take().unwrap()
		} else {
			load_config().unwrap_or_default()
		};

		// Initialize tracing with configuration-based settings
		self.init_tracing_from_settings(&settings)?;

		// Log service startup information
		log_service_info();

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);

		info!("🔧 Configuring Quote Relay server");
		let enabled_providers = settings.enabled_providers();
		info!("Enabled providers: {}", enabled_providers.len());
		for (id, provider) in &enabled_providers {
			info!(
				"  - {}: {} ({}ms timeout)",
				id,
				provider.endpoint,
				provider
					.timeout_ms
					.unwrap_or(settings.timeouts.per_provider_ms)
			);
		}

		// Parse bind address
		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		// Ensure we have proper configuration in the builder
		if self.settings.is_none() {
			self.settings = Some(settings.clone());
		}

		// Create the router using the builder pattern
		let (app, app_state) = self.start().await?;

		// Keep provider health fresh in the background
		let health_job = ProviderHealthJob::new((*app_state.provider_service).clone());
		let _health_handle = JobRunner::spawn_recurring(Arc::new(health_job), PROVIDER_HEALTH_INTERVAL);

		// Start the server
		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  GET  /ready");
		info!("  POST /v1/tenants");
		info!("  GET  /v1/tenants");
		info!("  GET  /v1/tenants/{{id}}");
		info!("  POST /v1/tenants/{{id}}/events");
		info!("  GET  /v1/tenants/{{id}}/events/aggregate");
		info!("  POST /v1/quotes");
		info!("  GET  /v1/providers");

		// Apply global rate limiting based on settings at the make_service level
		let rate_cfg = &settings.environment.rate_limiting;
		if rate_cfg.enabled {
			use tower::limit::RateLimitLayer;
			use tower::ServiceBuilder;
			let make_svc = ServiceBuilder::new()
				.layer(RateLimitLayer::new(
					rate_cfg.requests_per_minute as u64,
					Duration::from_secs(60),
				))
				.service(app.into_make_service());
			axum::serve(listener, make_svc).await?;
		} else {
			axum::serve(listener, app).await?;
		}

		Ok(())
	}
}
