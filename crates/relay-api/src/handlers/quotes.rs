//! Quote handlers

use axum::{extract::State, http::StatusCode, response::Json};
use tracing::info;

use crate::extractors::ValidatedJson;
use crate::handlers::common::{error, ErrorResponse};
use crate::state::AppState;
use relay_service::RouterServiceError;
use relay_types::quotes::request::QuoteRequest;
use relay_types::quotes::response::QuoteResponse;

/// POST /v1/quotes - Route a quote request and return the best quote
pub async fn post_quotes(
	State(state): State<AppState>,
	ValidatedJson(request): ValidatedJson<QuoteRequest>,
) -> Result<Json<QuoteResponse>, (StatusCode, Json<ErrorResponse>)> {
	info!(
		"Received quote request for {}/{} on chain {}",
		request.from_asset, request.to_asset, request.chain_id
	);

	let best = state
		.router_service
		.get_best_quote(&request)
		.await
		.map_err(|e| match e {
			RouterServiceError::Validation(msg) => {
				error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
			},
			RouterServiceError::NoQuotesAvailable => error(
				StatusCode::NOT_FOUND,
				"NO_QUOTES_AVAILABLE",
				"No providers produced a quote for this request",
			),
			RouterServiceError::Internal(msg) => {
				error(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
			},
		})?;

	info!(
		"Returning best quote from provider {} ({} -> {})",
		best.provider_name, best.from_amount, best.to_amount
	);
	Ok(Json(QuoteResponse::from(&best)))
}
