//! Provider handlers

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::debug;

use crate::handlers::common::{error, ErrorResponse};
use crate::state::AppState;
use relay_types::providers::response::{ProviderResponse, ProvidersResponse};

/// GET /v1/providers - List all configured providers
pub async fn get_providers(
	State(state): State<AppState>,
) -> Result<Json<ProvidersResponse>, (StatusCode, Json<ErrorResponse>)> {
	debug!("Listing providers");

	let providers = state
		.provider_service
		.list_providers()
		.await
		.map_err(|e| error(StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", e.to_string()))?;

	let response = ProvidersResponse {
		total_providers: providers.len(),
		providers: providers.iter().map(ProviderResponse::from).collect(),
		timestamp: chrono::Utc::now().timestamp(),
	};
	Ok(Json(response))
}
