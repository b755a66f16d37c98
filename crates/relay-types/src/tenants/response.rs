//! Tenant API response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Tenant;

/// API response for a single tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantResponse {
	pub id: String,
	pub display_name: String,
	pub theme: String,
	pub created_at: DateTime<Utc>,
}

impl From<&Tenant> for TenantResponse {
	fn from(tenant: &Tenant) -> Self {
		Self {
			id: tenant.tenant_id.clone(),
			display_name: tenant.display_name.clone(),
			theme: tenant.theme.clone(),
			created_at: tenant.created_at,
		}
	}
}

/// API response for GET /v1/tenants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantsResponse {
	pub tenants: Vec<TenantResponse>,
	pub total_tenants: usize,
	pub timestamp: i64,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_response_uses_wire_field_names() {
		let tenant = Tenant::new("Acme".to_string(), None);
		let response = TenantResponse::from(&tenant);
		let json = serde_json::to_value(&response).unwrap();

		assert_eq!(json["id"], tenant.tenant_id);
		assert_eq!(json["displayName"], "Acme");
		assert!(json.get("createdAt").is_some());
	}
}
