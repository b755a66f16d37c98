//! Event ledger handlers

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Json,
};
use tracing::{debug, info};

use crate::extractors::ValidatedJson;
use crate::handlers::common::{error, ErrorResponse};
use crate::state::AppState;
use relay_service::LedgerServiceError;
use relay_types::events::request::AppendEventRequest;
use relay_types::events::response::{EventAggregateResponse, EventResponse, EventsResponse};

fn map_ledger_error(e: LedgerServiceError) -> (StatusCode, Json<ErrorResponse>) {
	match e {
		LedgerServiceError::Validation(msg) => {
			error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
		},
		LedgerServiceError::TenantNotFound(id) => error(
			StatusCode::NOT_FOUND,
			"TENANT_NOT_FOUND",
			format!("Tenant {} not found", id),
		),
		LedgerServiceError::Storage(msg) => {
			error(StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", msg)
		},
	}
}

/// POST /v1/tenants/{id}/events - Append an event to the tenant's ledger
pub async fn post_events(
	State(state): State<AppState>,
	Path(tenant_id): Path<String>,
	ValidatedJson(request): ValidatedJson<AppendEventRequest>,
) -> Result<(StatusCode, Json<EventResponse>), (StatusCode, Json<ErrorResponse>)> {
	info!("Appending event for tenant {}", tenant_id);

	let event = state
		.ledger_service
		.append_event(&tenant_id, &request)
		.await
		.map_err(map_ledger_error)?;

	Ok((StatusCode::CREATED, Json(EventResponse::from(&event))))
}

/// GET /v1/tenants/{id}/events - List the tenant's events in receipt order
pub async fn get_events(
	State(state): State<AppState>,
	Path(tenant_id): Path<String>,
) -> Result<Json<EventsResponse>, (StatusCode, Json<ErrorResponse>)> {
	debug!("Listing events for tenant {}", tenant_id);

	let events = state
		.ledger_service
		.events_for_tenant(&tenant_id)
		.await
		.map_err(map_ledger_error)?;

	Ok(Json(EventsResponse {
		total_events: events.len(),
		events: events.iter().map(EventResponse::from).collect(),
		timestamp: chrono::Utc::now().timestamp(),
	}))
}

/// GET /v1/tenants/{id}/events/aggregate - Aggregate view of the tenant's ledger
pub async fn get_event_aggregate(
	State(state): State<AppState>,
	Path(tenant_id): Path<String>,
) -> Result<Json<EventAggregateResponse>, (StatusCode, Json<ErrorResponse>)> {
	debug!("Computing event aggregate for tenant {}", tenant_id);

	let aggregate = state
		.ledger_service
		.aggregate(&tenant_id)
		.await
		.map_err(map_ledger_error)?;

	Ok(Json(EventAggregateResponse::from_aggregate(&aggregate)))
}
