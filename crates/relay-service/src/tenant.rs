//! Tenant registry service
//!
//! Service for registering and retrieving tenants.

use std::sync::Arc;

use relay_storage::{Storage, TenantStorage};
use relay_types::{RegisterTenantRequest, Tenant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TenantServiceError {
	#[error("validation error: {0}")]
	Validation(String),
	#[error("tenant not found: {0}")]
	NotFound(String),
	#[error("storage error: {0}")]
	Storage(String),
}

#[derive(Clone)]
pub struct TenantService {
	storage: Arc<dyn Storage>,
}

impl TenantService {
	pub fn new(storage: Arc<dyn Storage>) -> Self {
		Self { storage }
	}

	/// Validate, persist and return a newly registered tenant
	pub async fn register_tenant(
		&self,
		request: &RegisterTenantRequest,
	) -> Result<Tenant, TenantServiceError> {
		request
			.validate()
			.map_err(|e| TenantServiceError::Validation(e.to_string()))?;

		let tenant = Tenant::new(request.display_name.clone(), request.theme.clone());

		self.storage
			.create_tenant(tenant.clone())
			.await
			.map_err(|e| TenantServiceError::Storage(e.to_string()))?;

		Ok(tenant)
	}

	pub async fn get_tenant(&self, tenant_id: &str) -> Result<Tenant, TenantServiceError> {
		match self
			.storage
			.get_tenant(tenant_id)
			.await
			.map_err(|e| TenantServiceError::Storage(e.to_string()))?
		{
			Some(tenant) => Ok(tenant),
			None => Err(TenantServiceError::NotFound(tenant_id.to_string())),
		}
	}

	pub async fn list_tenants(&self) -> Result<Vec<Tenant>, TenantServiceError> {
		self.storage
			.list_all_tenants()
			.await
			.map_err(|e| TenantServiceError::Storage(e.to_string()))
	}

	/// List one page of tenants, returning (page_items, total_count)
	///
	/// `start` and `limit` are pre-clamped by the caller; past-the-end pages
	/// come back empty rather than as an error.
	pub async fn list_tenants_page(
		&self,
		start: usize,
		limit: usize,
	) -> Result<(Vec<Tenant>, usize), TenantServiceError> {
		let total = self
			.storage
			.count_tenants()
			.await
			.map_err(|e| TenantServiceError::Storage(e.to_string()))?;

		let page_items = self
			.storage
			.list_tenants_paginated(start, limit)
			.await
			.map_err(|e| TenantServiceError::Storage(e.to_string()))?;

		Ok((page_items, total))
	}
}
