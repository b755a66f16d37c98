//! Provider API response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Provider, ProviderStatus};

/// API response for a single provider
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderResponse {
	pub provider_id: String,
	pub adapter_id: String,
	pub name: Option<String>,
	pub status: ProviderStatus,
	pub created_at: DateTime<Utc>,
	pub last_seen: Option<DateTime<Utc>>,
}

impl From<&Provider> for ProviderResponse {
	fn from(provider: &Provider) -> Self {
		Self {
			provider_id: provider.provider_id.clone(),
			adapter_id: provider.adapter_id.clone(),
			name: provider.metadata.name.clone(),
			status: provider.status.clone(),
			created_at: provider.created_at,
			last_seen: provider.last_seen,
		}
	}
}

/// API response for GET /v1/providers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvidersResponse {
	pub providers: Vec<ProviderResponse>,
	pub total_providers: usize,
	pub timestamp: i64,
}
