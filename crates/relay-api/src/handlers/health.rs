use axum::{extract::State, http::StatusCode, response::Json};
use relay_storage::Storage;
use serde::Serialize;

use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
	"OK"
}

/// Readiness response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse {
	pub status: String,
	pub storage_healthy: bool,
	pub providers: Vec<ProviderHealth>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderHealth {
	pub provider_id: String,
	pub healthy: bool,
}

/// GET /ready - Readiness probe with storage and provider checks
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
	let storage_healthy = state.storage.health_check().await.unwrap_or(false);
	let provider_health = state.router_service.health_check_all().await;
	let providers_healthy = provider_health.iter().all(|(_, h)| *h) || provider_health.is_empty();

	let providers = provider_health
		.into_iter()
		.map(|(provider_id, healthy)| ProviderHealth {
			provider_id,
			healthy,
		})
		.collect();

	let overall = storage_healthy && providers_healthy;
	let status = if overall { "ready" } else { "degraded" };

	let body = ReadinessResponse {
		status: status.to_string(),
		storage_healthy,
		providers,
	};
	let code = if overall {
		StatusCode::OK
	} else {
		StatusCode::SERVICE_UNAVAILABLE
	};
	(code, Json(body))
}
