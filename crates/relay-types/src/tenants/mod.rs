//! Core Tenant domain model and business logic

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::constants::limits::{MAX_DISPLAY_NAME_LEN, MAX_THEME_LEN};

pub mod errors;
pub mod request;
pub mod response;

pub use errors::TenantValidationError;
pub use request::RegisterTenantRequest;
pub use response::{TenantResponse, TenantsResponse};

/// Result type for tenant validation operations
pub type TenantValidationResult<T> = Result<T, TenantValidationError>;

/// Theme applied when a registration omits one
pub const DEFAULT_THEME: &str = "default";

/// Core Tenant domain model
///
/// Identity (`tenant_id`, `created_at`) is immutable after registration;
/// display attributes are the only mutable parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Tenant {
	/// Server-generated unique identifier, never client-supplied
	pub tenant_id: String,

	/// Human-readable tenant name
	pub display_name: String,

	/// Theme identifier for the tenant's surface
	pub theme: String,

	/// When the tenant was registered
	pub created_at: DateTime<Utc>,
}

impl Tenant {
	/// Create a new tenant with a generated id
	pub fn new(display_name: String, theme: Option<String>) -> Self {
		Self {
			tenant_id: Uuid::new_v4().to_string(),
			display_name,
			theme: theme.unwrap_or_else(|| DEFAULT_THEME.to_string()),
			created_at: Utc::now(),
		}
	}

	/// Validate the tenant's display attributes
	pub fn validate(&self) -> TenantValidationResult<()> {
		if self.display_name.trim().is_empty() {
			return Err(TenantValidationError::MissingDisplayName);
		}
		if self.display_name.len() > MAX_DISPLAY_NAME_LEN {
			return Err(TenantValidationError::DisplayNameTooLong {
				max: MAX_DISPLAY_NAME_LEN,
				actual: self.display_name.len(),
			});
		}
		if self.theme.len() > MAX_THEME_LEN {
			return Err(TenantValidationError::ThemeTooLong {
				max: MAX_THEME_LEN,
				actual: self.theme.len(),
			});
		}
		Ok(())
	}
}
