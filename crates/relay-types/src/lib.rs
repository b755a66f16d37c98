//! Relay Types
//!
//! Shared models and traits for the quote-relay orchestrator.
//! This crate contains all domain models organized by business entity.

pub mod adapters;
pub mod constants;
pub mod events;
pub mod models;
pub mod providers;
pub mod quotes;
pub mod storage;
pub mod tenants;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use tenants::{
	RegisterTenantRequest, Tenant, TenantResponse, TenantValidationError, TenantValidationResult,
	TenantsResponse,
};

pub use events::{
	AppendEventRequest, Event, EventAggregate, EventAggregateResponse, EventResponse,
	EventValidationError, EventValidationResult, EventsResponse,
};

pub use quotes::{
	QuoteError, QuoteRequest, QuoteResponse, QuoteResult, QuoteValidationError,
	QuoteValidationResult,
};

pub use providers::{
	Provider, ProviderConfig, ProviderMetadata, ProviderMetrics, ProviderResponse,
	ProviderRuntimeConfig, ProviderStatus, ProviderValidationError, ProviderValidationResult,
	ProvidersResponse,
};

pub use adapters::{Adapter, AdapterError, AdapterResult, QuoteAdapter};

pub use models::SecretString;

pub use storage::{
	EventStorageTrait, ProviderStorageTrait, StorageError, StorageResult, StorageStats,
	StorageTrait, TenantStorageTrait,
};
