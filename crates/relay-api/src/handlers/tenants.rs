//! Tenant handlers

use axum::{
	extract::{Path, Query, State},
	http::StatusCode,
	response::Json,
};
use tracing::{debug, info};

use crate::extractors::ValidatedJson;
use crate::handlers::common::{error, ErrorResponse};
use crate::pagination::{page_bounds, PaginationQuery};
use crate::state::AppState;
use relay_service::TenantServiceError;
use relay_types::tenants::request::RegisterTenantRequest;
use relay_types::tenants::response::{TenantResponse, TenantsResponse};

/// POST /v1/tenants - Register a new tenant
pub async fn post_tenants(
	State(state): State<AppState>,
	ValidatedJson(request): ValidatedJson<RegisterTenantRequest>,
) -> Result<(StatusCode, Json<TenantResponse>), (StatusCode, Json<ErrorResponse>)> {
	info!("Registering tenant '{}'", request.display_name);

	let tenant = state
		.tenant_service
		.register_tenant(&request)
		.await
		.map_err(|e| match e {
			TenantServiceError::Validation(msg) => {
				error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
			},
			TenantServiceError::NotFound(id) => error(
				StatusCode::NOT_FOUND,
				"TENANT_NOT_FOUND",
				format!("Tenant {} not found", id),
			),
			TenantServiceError::Storage(msg) => {
				error(StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", msg)
			},
		})?;

	Ok((StatusCode::CREATED, Json(TenantResponse::from(&tenant))))
}

/// GET /v1/tenants - List all tenants
pub async fn get_tenants(
	State(state): State<AppState>,
	Query(pq): Query<PaginationQuery>,
) -> Result<Json<TenantsResponse>, (StatusCode, Json<ErrorResponse>)> {
	debug!("Listing tenants with pagination");
	let (start, limit) = page_bounds(pq.page, pq.page_size);
	let (page_items, total) = state
		.tenant_service
		.list_tenants_page(start, limit)
		.await
		.map_err(|e| error(StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", e.to_string()))?;

	let response = TenantsResponse {
		tenants: page_items.iter().map(TenantResponse::from).collect(),
		total_tenants: total,
		timestamp: chrono::Utc::now().timestamp(),
	};
	Ok(Json(response))
}

/// GET /v1/tenants/{id} - Get tenant by id
pub async fn get_tenant_by_id(
	State(state): State<AppState>,
	Path(tenant_id): Path<String>,
) -> Result<Json<TenantResponse>, (StatusCode, Json<ErrorResponse>)> {
	let tenant = state
		.tenant_service
		.get_tenant(&tenant_id)
		.await
		.map_err(|e| match e {
			TenantServiceError::NotFound(_) => error(
				StatusCode::NOT_FOUND,
				"TENANT_NOT_FOUND",
				format!("Tenant {} not found", tenant_id),
			),
			TenantServiceError::Storage(msg) => {
				error(StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", msg)
			},
			TenantServiceError::Validation(msg) => {
				error(StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg)
			},
		})?;

	Ok(Json(TenantResponse::from(&tenant)))
}
